//! Respondent metadata for one survey completion.

pub mod record;
