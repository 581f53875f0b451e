//! Survey questionnaire and answers.
//!
//! - [`catalog::Survey`] - the fixed category/question table
//! - [`answer::Answer`] - a single yes/no answer
//! - [`response_set::ResponseSet`] - every answer from one submission

pub mod answer;
pub mod catalog;
pub mod response_set;
