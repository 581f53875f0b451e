//! Submission record value object

use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Identifying metadata a respondent supplies alongside their answers
///
/// Only the company name is required. The record lives for the duration of
/// one submission and is never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionRecord {
    pub company_name: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    /// Respondent email; empty means no respondent copy is sent
    pub email: String,
}

impl SubmissionRecord {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = first.into();
        self.last_name = last.into();
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.company_name.trim().is_empty() {
            return Err(ValidationError::MissingCompanyName);
        }
        Ok(())
    }

    /// Respondent address, if one was supplied.
    pub fn respondent_email(&self) -> Option<&str> {
        let email = self.email.trim();
        (!email.is_empty()).then_some(email)
    }

    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_company_is_rejected() {
        assert_eq!(
            SubmissionRecord::default().validate(),
            Err(ValidationError::MissingCompanyName)
        );
        assert_eq!(
            SubmissionRecord::new("   ").validate(),
            Err(ValidationError::MissingCompanyName)
        );
    }

    #[test]
    fn test_company_only_is_valid() {
        assert!(SubmissionRecord::new("Acme").validate().is_ok());
    }

    #[test]
    fn test_respondent_email_optional() {
        let record = SubmissionRecord::new("Acme");
        assert_eq!(record.respondent_email(), None);

        let record = record.with_email(" jane@acme.test ");
        assert_eq!(record.respondent_email(), Some("jane@acme.test"));
    }

    #[test]
    fn test_full_name_skips_blank_parts() {
        let record = SubmissionRecord::new("Acme").with_name("Jane", "");
        assert_eq!(record.full_name(), "Jane");

        let record = SubmissionRecord::new("Acme").with_name("Jane", "Doe");
        assert_eq!(record.full_name(), "Jane Doe");
    }
}
