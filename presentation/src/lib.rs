//! Presentation layer for growth-index
//!
//! This crate contains CLI definitions, the answers-file form, output
//! formatters and progress reporters.

pub mod cli;
pub mod form;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat, SubmitArgs};
pub use form::answers::{AnswersFile, AnswersFileError, answers_template};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
