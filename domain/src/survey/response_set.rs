//! Response set entity

use super::answer::Answer;
use super::catalog::{Category, QUESTIONS_PER_CATEGORY, Survey};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All answers from one survey submission, keyed by question text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSet {
    answers: HashMap<String, Answer>,
}

impl ResponseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A response set with every question of `survey` set to `No`,
    /// matching the form's pre-selected option.
    pub fn with_defaults(survey: &Survey) -> Self {
        Self::uniform(survey, Answer::No)
    }

    /// A response set giving the same answer to every question of `survey`.
    pub fn uniform(survey: &Survey, answer: Answer) -> Self {
        Self {
            answers: survey.questions().map(|q| (q.to_string(), answer)).collect(),
        }
    }

    pub fn answer(&mut self, question: impl Into<String>, answer: Answer) {
        self.answers.insert(question.into(), answer);
    }

    /// Builder-style variant of [`answer`](Self::answer).
    pub fn with_answer(mut self, question: impl Into<String>, answer: Answer) -> Self {
        self.answer(question, answer);
        self
    }

    /// Record answers for a category positionally.
    ///
    /// Fewer than four answers leave the remaining questions untouched;
    /// more than four is an error.
    pub fn answer_category(
        &mut self,
        category: &Category,
        answers: &[Answer],
    ) -> Result<(), DomainError> {
        if answers.len() > QUESTIONS_PER_CATEGORY {
            return Err(DomainError::AnswerCountMismatch {
                category: category.name.to_string(),
                expected: QUESTIONS_PER_CATEGORY,
                actual: answers.len(),
            });
        }
        for (question, answer) in category.questions.iter().zip(answers) {
            self.answer(*question, *answer);
        }
        Ok(())
    }

    pub fn get(&self, question: &str) -> Option<Answer> {
        self.answers.get(question).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// First question of `survey` that has no recorded answer.
    pub fn first_missing<'a>(&self, survey: &'a Survey) -> Option<&'a str> {
        survey.questions().find(|q| !self.answers.contains_key(*q))
    }

    pub fn is_complete(&self, survey: &Survey) -> bool {
        self.first_missing(survey).is_none()
    }

    pub fn yes_count(&self) -> usize {
        self.answers.values().filter(|a| a.is_yes()).count()
    }
}
