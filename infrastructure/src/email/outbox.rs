//! Filesystem outbox transport.
//!
//! Stores each message as a JSON envelope plus its attachment instead of
//! sending it. Used for dry runs and local testing.

use async_trait::async_trait;
use growth_index_application::{DeliveryError, EmailSender, OutgoingEmail};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Serialize)]
struct Envelope<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    attachment: &'a str,
    created_at: String,
}

/// Writes outgoing emails into a directory
pub struct OutboxEmailSender {
    dir: PathBuf,
}

impl OutboxEmailSender {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn message_stem(email: &OutgoingEmail) -> String {
        let recipient: String = email
            .to
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' { c } else { '_' })
            .collect();
        format!(
            "{}-{}-{}",
            chrono::Utc::now().format("%Y%m%dT%H%M%S"),
            &uuid::Uuid::new_v4().simple().to_string()[..8],
            recipient
        )
    }
}

#[async_trait]
impl EmailSender for OutboxEmailSender {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
        let io = |e: std::io::Error| DeliveryError::Io(e.to_string());

        tokio::fs::create_dir_all(&self.dir).await.map_err(io)?;

        let stem = Self::message_stem(email);
        let attachment_name = format!("{}-{}", stem, email.attachment.filename);
        tokio::fs::write(self.dir.join(&attachment_name), &email.attachment.data)
            .await
            .map_err(io)?;

        let envelope = Envelope {
            from: &email.from,
            to: &email.to,
            subject: &email.subject,
            html_body: &email.html_body,
            attachment: &attachment_name,
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        let json = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| DeliveryError::Message(e.to_string()))?;
        let envelope_path = self.dir.join(format!("{}.json", stem));
        tokio::fs::write(&envelope_path, json).await.map_err(io)?;

        debug!("Stored message for {} at {}", email.to, envelope_path.display());
        Ok(())
    }

    fn transport_name(&self) -> &'static str {
        "outbox"
    }
}
