//! Infrastructure layer for growth-index
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod artifacts;
pub mod chart;
pub mod config;
pub mod email;
pub mod pdf;

// Re-export commonly used types
pub use artifacts::{ArtifactStore, StoredArtifacts};
pub use chart::PlottersChartRenderer;
pub use config::{
    ConfigLoader, ConfigValidationError, EmailTransportKind, FileConfig, FileEmailConfig,
    FileOutputConfig,
};
pub use email::{ConfiguredEmailSender, OutboxEmailSender, SendGridEmailSender, SmtpEmailSender};
pub use pdf::PrintPdfReportWriter;
