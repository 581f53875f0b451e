//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No answer recorded for question: {0}")]
    MissingAnswer(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Category '{category}' expects {expected} answers, got {actual}")]
    AnswerCountMismatch {
        category: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid answer: {0} (expected yes or no)")]
    InvalidAnswer(String),
}

/// Submission validation failures shown directly to the respondent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Company Name is required.")]
    MissingCompanyName,
}
