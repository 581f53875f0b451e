//! Report and delivery settings used by the submit use case.

use growth_index_domain::ReportTemplate;
use serde::{Deserialize, Serialize};

/// Wording and addresses applied to every generated report.
///
/// Loaded from configuration; the defaults are placeholders that must be
/// overridden before real delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Title printed at the top of the PDF
    pub title: String,
    /// Paragraph under the title; derived from `organization` when unset
    pub intro: Option<String>,
    /// Organization signing the report and the email
    pub organization: String,
    /// Subject line of every email
    pub subject: String,
    /// Address that always receives a copy of the report
    pub admin_email: String,
    /// Address the report is sent from
    pub sender_email: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            title: ReportTemplate::title().to_string(),
            intro: None,
            organization: "The Growth Collective".to_string(),
            subject: ReportTemplate::title().to_string(),
            admin_email: "admin@example.com".to_string(),
            sender_email: "reports@example.com".to_string(),
        }
    }
}

impl ReportSettings {
    pub fn intro_text(&self) -> String {
        self.intro
            .clone()
            .unwrap_or_else(|| ReportTemplate::intro(&self.organization))
    }

    pub fn with_admin_email(mut self, email: impl Into<String>) -> Self {
        self.admin_email = email.into();
        self
    }

    pub fn with_sender_email(mut self, email: impl Into<String>) -> Self {
        self.sender_email = email.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intro_defaults_from_organization() {
        let settings = ReportSettings {
            organization: "TGC".to_string(),
            ..Default::default()
        };
        assert!(settings.intro_text().contains("TGC's Growth Assessment"));
    }

    #[test]
    fn test_explicit_intro_wins() {
        let settings = ReportSettings {
            intro: Some("Thanks!".to_string()),
            ..Default::default()
        };
        assert_eq!(settings.intro_text(), "Thanks!");
    }
}
