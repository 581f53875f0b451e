//! Email transports implementing the
//! [`EmailSender`](growth_index_application::EmailSender) port.
//!
//! Exactly one transport is active per run, chosen from `[email] transport`:
//!
//! - [`SmtpEmailSender`] - STARTTLS submission via lettre
//! - [`SendGridEmailSender`] - SendGrid v3 HTTP API via reqwest
//! - [`OutboxEmailSender`] - local directory, nothing leaves the machine
//!
//! A transport that cannot be built (missing secret, bad relay) becomes
//! [`ConfiguredEmailSender::Unavailable`], which fails each send instead of
//! aborting the submission before the report exists.

mod outbox;
mod sendgrid;
mod smtp;

pub use outbox::OutboxEmailSender;
pub use sendgrid::SendGridEmailSender;
pub use smtp::SmtpEmailSender;

use crate::config::{EmailTransportKind, FileEmailConfig};
use async_trait::async_trait;
use growth_index_application::{DeliveryError, EmailSender, OutgoingEmail};
use std::path::PathBuf;
use tracing::{info, warn};

/// The transport selected by configuration
pub enum ConfiguredEmailSender {
    Smtp(SmtpEmailSender),
    SendGrid(SendGridEmailSender),
    Outbox(OutboxEmailSender),
    /// Configured transport could not be built; every send fails with the cause
    Unavailable(DeliveryError),
}

impl ConfiguredEmailSender {
    /// Build the configured transport, reading secrets from the environment.
    pub fn from_config(config: &FileEmailConfig) -> Self {
        Self::from_config_with(config, |name| std::env::var(name).ok())
    }

    /// Like [`from_config`](Self::from_config) with an explicit secret lookup.
    pub fn from_config_with(
        config: &FileEmailConfig,
        secret: impl Fn(&str) -> Option<String>,
    ) -> Self {
        match Self::build(config, secret) {
            Ok(sender) => {
                info!("Email transport: {}", sender.transport_name());
                sender
            }
            Err(e) => {
                warn!("Email transport {} unavailable: {}", config.transport, e);
                Self::Unavailable(e)
            }
        }
    }

    fn build(
        config: &FileEmailConfig,
        secret: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, DeliveryError> {
        let sender = match config.transport {
            EmailTransportKind::Smtp => {
                let smtp = &config.smtp;
                let password = require_secret(&secret, &smtp.password_env)?;
                Self::Smtp(SmtpEmailSender::new(
                    &smtp.host,
                    smtp.port,
                    &smtp.username,
                    &password,
                )?)
            }
            EmailTransportKind::SendGrid => {
                let api_key = require_secret(&secret, &config.sendgrid.api_key_env)?;
                Self::SendGrid(SendGridEmailSender::new(
                    config.sendgrid.endpoint.clone(),
                    api_key,
                ))
            }
            EmailTransportKind::Outbox => {
                Self::Outbox(OutboxEmailSender::new(config.outbox.dir.clone()))
            }
        };
        Ok(sender)
    }

    /// An outbox transport regardless of configuration
    pub fn outbox(dir: impl Into<PathBuf>) -> Self {
        Self::Outbox(OutboxEmailSender::new(dir))
    }
}

fn require_secret(
    secret: &impl Fn(&str) -> Option<String>,
    env_name: &str,
) -> Result<String, DeliveryError> {
    secret(env_name)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            DeliveryError::Configuration(format!("environment variable {} is not set", env_name))
        })
}

#[async_trait]
impl EmailSender for ConfiguredEmailSender {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
        match self {
            Self::Smtp(sender) => sender.send(email).await,
            Self::SendGrid(sender) => sender.send(email).await,
            Self::Outbox(sender) => sender.send(email).await,
            Self::Unavailable(cause) => Err(cause.clone()),
        }
    }

    fn transport_name(&self) -> &'static str {
        match self {
            Self::Smtp(sender) => sender.transport_name(),
            Self::SendGrid(sender) => sender.transport_name(),
            Self::Outbox(sender) => sender.transport_name(),
            Self::Unavailable(_) => "unavailable",
        }
    }
}
