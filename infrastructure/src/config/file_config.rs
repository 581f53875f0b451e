//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain/application types where
//! appropriate.

use growth_index_application::ReportSettings;
use growth_index_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{field} is not a valid email address: '{value}'")]
    InvalidAddress { field: &'static str, value: String },

    #[error("email.smtp.host cannot be empty")]
    EmptySmtpHost,

    #[error("email.smtp.port cannot be 0")]
    InvalidSmtpPort,

    #[error("email.sendgrid.endpoint cannot be empty")]
    EmptySendGridEndpoint,

    #[error("email.outbox.dir cannot be empty")]
    EmptyOutboxDir,
}

/// Which email transport delivers reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailTransportKind {
    /// SMTP submission with STARTTLS
    #[default]
    Smtp,
    /// SendGrid v3 mail API
    SendGrid,
    /// Write messages to a local directory instead of sending them
    Outbox,
}

impl std::str::FromStr for EmailTransportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "smtp" => Ok(EmailTransportKind::Smtp),
            "sendgrid" => Ok(EmailTransportKind::SendGrid),
            "outbox" | "file" => Ok(EmailTransportKind::Outbox),
            _ => Err(format!(
                "Invalid email transport: {}. Valid: smtp, sendgrid, outbox",
                s
            )),
        }
    }
}

impl std::fmt::Display for EmailTransportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EmailTransportKind::Smtp => "smtp",
            EmailTransportKind::SendGrid => "sendgrid",
            EmailTransportKind::Outbox => "outbox",
        };
        write!(f, "{}", name)
    }
}

/// Raw SMTP configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    /// Environment variable holding the SMTP password
    pub password_env: String,
}

impl Default for FileSmtpConfig {
    fn default() -> Self {
        Self {
            host: "smtp.sendgrid.net".to_string(),
            port: 587,
            username: "apikey".to_string(),
            password_env: "SENDGRID_API_KEY_SMTP".to_string(),
        }
    }
}

/// Raw SendGrid API configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSendGridConfig {
    pub endpoint: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for FileSendGridConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.sendgrid.com/v3/mail/send".to_string(),
            api_key_env: "SENDGRID_API_KEY".to_string(),
        }
    }
}

/// Raw outbox configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutboxConfig {
    pub dir: PathBuf,
}

impl Default for FileOutboxConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("outbox"),
        }
    }
}

/// Raw email configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEmailConfig {
    pub transport: EmailTransportKind,
    pub smtp: FileSmtpConfig,
    pub sendgrid: FileSendGridConfig,
    pub outbox: FileOutboxConfig,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Console output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
    /// Keep the chart and PDF of each submission on disk
    pub write_artifacts: bool,
    /// Parent directory for per-submission artifact directories
    pub dir: PathBuf,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            write_artifacts: true,
            dir: PathBuf::from("reports"),
        }
    }
}

/// Complete configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Report wording and addresses
    pub report: ReportSettings,
    /// Email transport settings
    pub email: FileEmailConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        check_address("report.admin_email", &self.report.admin_email)?;
        check_address("report.sender_email", &self.report.sender_email)?;

        match self.email.transport {
            EmailTransportKind::Smtp => {
                if self.email.smtp.host.trim().is_empty() {
                    return Err(ConfigValidationError::EmptySmtpHost);
                }
                if self.email.smtp.port == 0 {
                    return Err(ConfigValidationError::InvalidSmtpPort);
                }
            }
            EmailTransportKind::SendGrid => {
                if self.email.sendgrid.endpoint.trim().is_empty() {
                    return Err(ConfigValidationError::EmptySendGridEndpoint);
                }
            }
            EmailTransportKind::Outbox => {
                if self.email.outbox.dir.as_os_str().is_empty() {
                    return Err(ConfigValidationError::EmptyOutboxDir);
                }
            }
        }

        Ok(())
    }
}

fn check_address(field: &'static str, value: &str) -> Result<(), ConfigValidationError> {
    let value = value.trim();
    let valid = value
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
    if valid {
        Ok(())
    } else {
        Err(ConfigValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        })
    }
}
