//! SendGrid v3 mail API transport.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use growth_index_application::{DeliveryError, EmailSender, OutgoingEmail};
use serde_json::{Value, json};
use tracing::debug;

/// Sends report emails through SendGrid's HTTP API
pub struct SendGridEmailSender {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl SendGridEmailSender {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

/// Request body for `POST /v3/mail/send`
fn request_body(email: &OutgoingEmail) -> Value {
    json!({
        "personalizations": [{ "to": [{ "email": email.to }] }],
        "from": { "email": email.from },
        "subject": email.subject,
        "content": [{ "type": "text/html", "value": email.html_body }],
        "attachments": [{
            "content": STANDARD.encode(&email.attachment.data),
            "type": email.attachment.content_type,
            "filename": email.attachment.filename,
            "disposition": "attachment",
        }],
    })
}

#[async_trait]
impl EmailSender for SendGridEmailSender {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request_body(email))
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = response.status();
        debug!("SendGrid answered {} for {}", status, email.to);
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body,
        })
    }

    fn transport_name(&self) -> &'static str {
        "sendgrid"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use growth_index_application::EmailAttachment;

    #[test]
    fn test_request_body_shape() {
        let email = OutgoingEmail {
            from: "reports@tgc.test".to_string(),
            to: "jane@acme.test".to_string(),
            subject: "Growth Index Results".to_string(),
            html_body: "<p>Hi</p>".to_string(),
            attachment: EmailAttachment::pdf("survey_report.pdf", b"%PDF".to_vec()),
        };

        let body = request_body(&email);

        assert_eq!(body["personalizations"][0]["to"][0]["email"], "jane@acme.test");
        assert_eq!(body["from"]["email"], "reports@tgc.test");
        assert_eq!(body["content"][0]["type"], "text/html");
        assert_eq!(body["attachments"][0]["content"], "JVBERg==");
        assert_eq!(body["attachments"][0]["type"], "application/pdf");
        assert_eq!(body["attachments"][0]["disposition"], "attachment");
    }
}
