//! Answers file
//!
//! The command-line stand-in for the survey form. Answers are given per
//! category, in question order:
//!
//! ```toml
//! [respondent]
//! company_name = "Acme"
//! first_name = "Jane"
//!
//! [answers]
//! "Business Development" = ["Yes", "No", "Yes", "Yes"]
//! ```
//!
//! Questions left out default to `No`, as on the form.

use growth_index_domain::{DomainError, ResponseSet, SubmissionRecord, Survey};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors while reading an answers file
#[derive(Error, Debug)]
pub enum AnswersFileError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid answers file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Parsed contents of an answers file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnswersFile {
    /// Optional respondent details; command-line flags take precedence
    pub respondent: Option<SubmissionRecord>,
    /// Category name -> answers in question order
    pub answers: BTreeMap<String, Vec<growth_index_domain::Answer>>,
}

impl AnswersFile {
    pub fn load(path: &Path) -> Result<Self, AnswersFileError> {
        let content = std::fs::read_to_string(path).map_err(|source| AnswersFileError::Io {
            path: path.display().to_string(),
            source,
        })?;
        content.parse()
    }

    /// Build a complete response set, defaulting unanswered questions to `No`.
    pub fn to_response_set(&self, survey: &Survey) -> Result<ResponseSet, AnswersFileError> {
        let mut responses = ResponseSet::with_defaults(survey);
        for (name, answers) in &self.answers {
            let category = survey
                .category(name)
                .ok_or_else(|| DomainError::UnknownCategory(name.clone()))?;
            responses.answer_category(category, answers)?;
        }
        Ok(responses)
    }
}

impl std::str::FromStr for AnswersFile {
    type Err = AnswersFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/// A commented answers file covering every question, all set to `No`.
pub fn answers_template(survey: &Survey) -> String {
    let mut output = String::from(
        "# Growth Index answers\n\
         # Answer each question with \"Yes\" or \"No\", in the order listed.\n\n\
         [respondent]\n\
         company_name = \"\"\n\
         first_name = \"\"\n\
         last_name = \"\"\n\
         position = \"\"\n\
         email = \"\"\n\n\
         [answers]\n",
    );
    for category in survey.categories() {
        output.push('\n');
        for (i, question) in category.questions.iter().enumerate() {
            output.push_str(&format!("# {}. {}\n", i + 1, question));
        }
        let defaults = vec!["\"No\""; category.questions.len()].join(", ");
        output.push_str(&format!("{:?} = [{}]\n", category.name, defaults));
    }
    output
}
