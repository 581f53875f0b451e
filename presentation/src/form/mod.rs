//! Survey form input

pub mod answers;
