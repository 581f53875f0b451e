//! SMTP submission transport (lettre, STARTTLS).

use async_trait::async_trait;
use growth_index_application::{DeliveryError, EmailSender, OutgoingEmail};
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::debug;

/// Sends report emails through an SMTP relay
pub struct SmtpEmailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
}

impl SmtpEmailSender {
    /// Build a STARTTLS relay on `host:port` authenticating as `username`.
    pub fn new(
        host: &str,
        port: u16,
        username: &str,
        password: &str,
    ) -> Result<Self, DeliveryError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .map_err(|e| DeliveryError::Configuration(e.to_string()))?
            .port(port)
            .credentials(Credentials::new(username.to_string(), password.to_string()))
            .build();

        Ok(Self {
            transport,
            host: host.to_string(),
        })
    }
}

/// Convert an outgoing email into a MIME message with the PDF attached
fn build_message(email: &OutgoingEmail) -> Result<Message, DeliveryError> {
    let from: Mailbox = email
        .from
        .parse()
        .map_err(|_| DeliveryError::InvalidAddress(email.from.clone()))?;
    let to: Mailbox = email
        .to
        .parse()
        .map_err(|_| DeliveryError::InvalidAddress(email.to.clone()))?;
    let content_type = ContentType::parse(&email.attachment.content_type)
        .map_err(|e| DeliveryError::Message(e.to_string()))?;

    let attachment = Attachment::new(email.attachment.filename.clone())
        .body(email.attachment.data.clone(), content_type);

    Message::builder()
        .from(from)
        .to(to)
        .subject(email.subject.clone())
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::html(email.html_body.clone()))
                .singlepart(attachment),
        )
        .map_err(|e| DeliveryError::Message(e.to_string()))
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
        let message = build_message(email)?;
        debug!("Submitting message for {} to {}", email.to, self.host);
        self.transport
            .send(message)
            .await
            .map(|_| ())
            .map_err(|e| DeliveryError::Transport(e.to_string()))
    }

    fn transport_name(&self) -> &'static str {
        "smtp"
    }
}
