//! Application layer for growth-index
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ReportSettings;
pub use ports::{
    chart_renderer::{ChartImage, ChartRenderer, ImageFormat, RenderError},
    email_sender::{DeliveryError, EmailAttachment, EmailSender, OutgoingEmail},
    progress::{NoProgress, SubmissionProgress, SubmissionStep},
    report_writer::{ReportDocument, ReportWriter},
};
pub use use_cases::submit_survey::{
    DeliveryAttempt, Recipient, SubmissionOutcome, SubmitSurveyError, SubmitSurveyInput,
    SubmitSurveyUseCase,
};
