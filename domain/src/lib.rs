//! Domain layer for growth-index
//!
//! This crate contains the survey catalog, scoring rules and report content.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Survey
//!
//! Ten fixed categories of four yes/no questions. A [`ResponseSet`] holds the
//! answers from one submission.
//!
//! ## Score Table
//!
//! [`calculate_scores`] awards two points per `Yes`, giving each category a
//! score between 0 and 8.

pub mod chart;
pub mod config;
pub mod core;
pub mod report;
pub mod scoring;
pub mod submission;
pub mod survey;

// Re-export commonly used types
pub use chart::radial::{RadialChart, RadialSlice, wrap_label};
pub use config::OutputFormat;
pub use core::error::{DomainError, ValidationError};
pub use report::template::{REPORT_FILE_NAME, ReportTemplate};
pub use scoring::score_table::{CategoryScore, MAX_CATEGORY_SCORE, ScoreTable, calculate_scores};
pub use submission::record::SubmissionRecord;
pub use survey::{
    answer::Answer,
    catalog::{Category, QUESTIONS_PER_CATEGORY, Survey},
    response_set::ResponseSet,
};
