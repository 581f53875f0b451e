//! Progress reporting for survey submission

use colored::Colorize;
use growth_index_application::{SubmissionProgress, SubmissionStep};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress during a submission with a spinner per step
pub struct ProgressReporter {
    current: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionProgress for ProgressReporter {
    fn on_step_start(&self, step: SubmissionStep) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(step.display_name());
        pb.set_message("...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut current) = self.current.lock() {
            *current = Some(pb);
        }
    }

    fn on_step_complete(&self, _step: SubmissionStep, success: bool) {
        let Ok(mut current) = self.current.lock() else {
            return;
        };
        if let Some(pb) = current.take() {
            if success {
                pb.finish_with_message(format!("{}", "done".green()));
            } else {
                pb.abandon_with_message(format!("{}", "failed".red()));
            }
        }
    }

    fn on_delivery(&self, recipient: &str, success: bool) {
        if let Ok(current) = self.current.lock()
            && let Some(pb) = current.as_ref()
        {
            let status = if success {
                format!("{} {}", "v".green(), recipient)
            } else {
                format!("{} {}", "x".red(), recipient)
            };
            pb.set_message(status);
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl SubmissionProgress for SimpleProgress {
    fn on_step_start(&self, step: SubmissionStep) {
        eprintln!("{} {}", "->".cyan(), step.display_name().bold());
    }

    fn on_step_complete(&self, step: SubmissionStep, success: bool) {
        if !success {
            eprintln!("  {} {} failed", "x".red(), step.as_str());
        }
    }

    fn on_delivery(&self, recipient: &str, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), recipient);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), recipient);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reporter_tracks_one_step_at_a_time() {
        let reporter = ProgressReporter::new();

        reporter.on_step_start(SubmissionStep::Chart);
        assert!(reporter.current.lock().unwrap().is_some());

        reporter.on_step_complete(SubmissionStep::Chart, true);
        assert!(reporter.current.lock().unwrap().is_none());
    }

    #[test]
    fn test_delivery_without_step_is_ignored() {
        let reporter = ProgressReporter::default();
        reporter.on_delivery("jane@acme.test", false);
        reporter.on_step_complete(SubmissionStep::Deliver, false);
        assert!(reporter.current.lock().unwrap().is_none());
    }
}
