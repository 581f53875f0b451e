//! Score table value object and the score calculator.

use crate::core::error::DomainError;
use crate::survey::catalog::{QUESTIONS_PER_CATEGORY, Survey};
use crate::survey::response_set::ResponseSet;
use serde::Serialize;

/// Highest score a single category can reach (four `Yes` answers).
pub const MAX_CATEGORY_SCORE: u8 = 2 * QUESTIONS_PER_CATEGORY as u8;

/// Score of a single category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: String,
    pub score: u8,
}

impl CategoryScore {
    /// Score as shown in the report table, e.g. `6/8`.
    pub fn display_score(&self) -> String {
        format!("{}/{}", self.score, MAX_CATEGORY_SCORE)
    }
}

/// Per-category scores in questionnaire order (Value Object)
///
/// Only produced by [`calculate_scores`]; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreTable {
    entries: Vec<CategoryScore>,
}

impl ScoreTable {
    pub fn entries(&self) -> &[CategoryScore] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, category: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.score)
    }

    /// Category names, parallel to [`values`](Self::values).
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.category.clone()).collect()
    }

    pub fn values(&self) -> Vec<u8> {
        self.entries.iter().map(|e| e.score).collect()
    }

    pub fn total(&self) -> u32 {
        self.entries.iter().map(|e| u32::from(e.score)).sum()
    }

    pub fn max_total(&self) -> u32 {
        self.entries.len() as u32 * u32::from(MAX_CATEGORY_SCORE)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryScore> {
        self.entries.iter()
    }
}

/// Compute one score per category: two points for every `Yes`.
///
/// Fails fast with [`DomainError::MissingAnswer`] if any question of the
/// survey has no answer in `responses`.
pub fn calculate_scores(
    survey: &Survey,
    responses: &ResponseSet,
) -> Result<ScoreTable, DomainError> {
    let mut entries = Vec::with_capacity(survey.categories().len());

    for category in survey.categories() {
        let mut score = 0u8;
        for question in category.questions {
            let answer = responses
                .get(question)
                .ok_or_else(|| DomainError::MissingAnswer(question.to_string()))?;
            score += answer.points();
        }
        entries.push(CategoryScore {
            category: category.name.to_string(),
            score,
        });
    }

    Ok(ScoreTable { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::answer::Answer;
    use proptest::prelude::*;

    #[test]
    fn test_all_yes_scores_eight_everywhere() {
        let survey = Survey::growth_index();
        let table = calculate_scores(&survey, &ResponseSet::uniform(&survey, Answer::Yes)).unwrap();
        assert!(table.values().iter().all(|&s| s == 8));
        assert_eq!(table.total(), 80);
        assert_eq!(table.max_total(), 80);
    }

    #[test]
    fn test_all_no_scores_zero_everywhere() {
        let survey = Survey::growth_index();
        let table = calculate_scores(&survey, &ResponseSet::with_defaults(&survey)).unwrap();
        assert_eq!(table.len(), 10);
        assert!(table.values().iter().all(|&s| s == 0));
    }

    #[test]
    fn test_business_development_only() {
        let survey = Survey::growth_index();
        let category = survey.category("Business Development").unwrap();
        let mut responses = ResponseSet::with_defaults(&survey);
        responses
            .answer_category(category, &[Answer::Yes; 4])
            .unwrap();

        let table = calculate_scores(&survey, &responses).unwrap();
        assert_eq!(table.get("Business Development"), Some(8));
        for entry in table.iter().skip(1) {
            assert_eq!(entry.score, 0, "{} should be 0", entry.category);
        }
    }

    #[test]
    fn test_labels_follow_category_order() {
        let survey = Survey::growth_index();
        let table = calculate_scores(&survey, &ResponseSet::with_defaults(&survey)).unwrap();
        let expected: Vec<String> = survey.category_names().map(String::from).collect();
        assert_eq!(table.labels(), expected);
    }

    #[test]
    fn test_missing_answer_fails_fast() {
        let survey = Survey::growth_index();
        let first = survey.questions().next().unwrap();
        let mut responses = ResponseSet::new();
        for q in survey.questions().skip(1) {
            responses.answer(q, Answer::Yes);
        }

        let err = calculate_scores(&survey, &responses).unwrap_err();
        assert_eq!(err, DomainError::MissingAnswer(first.to_string()));
    }

    #[test]
    fn test_display_score() {
        let entry = CategoryScore {
            category: "Market & Channel".to_string(),
            score: 6,
        };
        assert_eq!(entry.display_score(), "6/8");
    }

    fn arb_responses() -> impl Strategy<Value = ResponseSet> {
        let survey = Survey::growth_index();
        proptest::collection::vec(any::<bool>(), survey.question_count()).prop_map(move |flags| {
            let mut responses = ResponseSet::new();
            for (question, yes) in survey.questions().zip(flags) {
                responses.answer(question, Answer::from(yes));
            }
            responses
        })
    }

    proptest! {
        #[test]
        fn prop_scores_are_even_and_bounded(responses in arb_responses()) {
            let survey = Survey::growth_index();
            let table = calculate_scores(&survey, &responses).unwrap();
            prop_assert_eq!(table.len(), 10);
            for entry in table.iter() {
                prop_assert!(entry.score <= MAX_CATEGORY_SCORE);
                prop_assert_eq!(entry.score % 2, 0);
            }
            prop_assert_eq!(table.total() as usize, responses.yes_count() * 2);
        }

        #[test]
        fn prop_scoring_is_deterministic(responses in arb_responses()) {
            let survey = Survey::growth_index();
            let first = calculate_scores(&survey, &responses).unwrap();
            let second = calculate_scores(&survey, &responses).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
