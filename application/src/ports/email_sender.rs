//! Email sender port
//!
//! A single "send report email" capability. The transport behind it
//! (SMTP submission, a transactional-email API, a local outbox) is chosen
//! by configuration in the infrastructure layer.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while delivering an email
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Message could not be built: {0}")]
    Message(String),

    #[error("Transport configuration error: {0}")]
    Configuration(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Rejected by provider (status {status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("I/O error: {0}")]
    Io(String),
}

/// A file attached to an outgoing email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAttachment {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl EmailAttachment {
    pub fn pdf(filename: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content_type: "application/pdf".to_string(),
            data,
        }
    }
}

/// A fully composed email ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
    pub attachment: EmailAttachment,
}

/// Delivers report emails
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send one email. No retries are attempted.
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError>;

    /// Short name of the transport, for logs
    fn transport_name(&self) -> &'static str;
}
