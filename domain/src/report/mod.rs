//! Report wording shared by the PDF and email collaborators.

pub mod template;
