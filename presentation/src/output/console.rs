//! Console output formatter for survey results

use colored::Colorize;
use growth_index_application::{DeliveryAttempt, SubmissionOutcome};
use growth_index_domain::{MAX_CATEGORY_SCORE, ScoreTable, Survey};
use std::path::Path;

const BAR_WIDTH: usize = 24;

/// Formats scores and submission outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Score table with one bar per category
    pub fn format_scores(scores: &ScoreTable) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Growth Index Results"));
        output.push('\n');

        let width = scores
            .iter()
            .map(|entry| entry.category.chars().count())
            .max()
            .unwrap_or(0);

        for entry in scores.iter() {
            output.push_str(&format!(
                "{:<width$}  {}  {}\n",
                entry.category,
                Self::bar(entry.score),
                entry.display_score().bold(),
                width = width
            ));
        }

        output.push_str(&format!(
            "\n{} {}/{}\n",
            "Total:".cyan().bold(),
            scores.total(),
            scores.max_total()
        ));
        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(scores: &ScoreTable) -> String {
        serde_json::to_string_pretty(scores).unwrap_or_else(|_| "{}".to_string())
    }

    /// Delivery and artifact summary of a submission
    pub fn format_outcome(outcome: &SubmissionOutcome, artifacts: Option<&Path>) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Report"));
        output.push_str(&format!(
            "{} {} bytes\n",
            "PDF:".cyan().bold(),
            outcome.report.len()
        ));
        if let Some(dir) = artifacts {
            output.push_str(&format!("{} {}\n", "Saved to:".cyan().bold(), dir.display()));
        }

        if outcome.deliveries.is_empty() {
            output.push_str(&format!("{}\n", "No emails sent".dimmed()));
            return output;
        }

        output.push_str(&Self::section_header("Delivery"));
        for attempt in &outcome.deliveries {
            output.push_str(&Self::delivery_line(attempt));
        }

        output
    }

    /// The full questionnaire, grouped by category
    pub fn format_questionnaire(survey: &Survey) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Growth Index Questionnaire"));
        output.push('\n');

        for category in survey.categories() {
            output.push_str(&format!("\n{}\n", category.name.yellow().bold()));
            for (i, question) in category.questions.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, question));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    fn delivery_line(attempt: &DeliveryAttempt) -> String {
        match &attempt.error {
            None => format!(
                "  {} {} ({})\n",
                "v".green(),
                attempt.address,
                attempt.recipient.as_str()
            ),
            Some(err) => format!(
                "  {} {} ({}): {}\n",
                "x".red(),
                attempt.address,
                attempt.recipient.as_str(),
                err
            ),
        }
    }

    fn bar(score: u8) -> String {
        let filled = BAR_WIDTH * score as usize / MAX_CATEGORY_SCORE as usize;
        format!(
            "{}{}",
            "#".repeat(filled).red(),
            "-".repeat(BAR_WIDTH - filled).dimmed()
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
