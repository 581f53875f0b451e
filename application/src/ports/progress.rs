//! Progress notification port
//!
//! Defines the interface for reporting progress while a submission is
//! turned into a delivered report.

/// A step of the submission flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionStep {
    Validate,
    Score,
    Chart,
    Report,
    Deliver,
}

impl SubmissionStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStep::Validate => "validate",
            SubmissionStep::Score => "score",
            SubmissionStep::Chart => "chart",
            SubmissionStep::Report => "report",
            SubmissionStep::Deliver => "deliver",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SubmissionStep::Validate => "Checking submission",
            SubmissionStep::Score => "Calculating scores",
            SubmissionStep::Chart => "Rendering chart",
            SubmissionStep::Report => "Building PDF report",
            SubmissionStep::Deliver => "Sending emails",
        }
    }
}

/// Callback for progress updates during a submission
///
/// Implementations live in the presentation layer.
pub trait SubmissionProgress: Send + Sync {
    /// Called when a step starts
    fn on_step_start(&self, step: SubmissionStep);

    /// Called when a step finishes
    fn on_step_complete(&self, step: SubmissionStep, success: bool);

    /// Called after each delivery attempt
    fn on_delivery(&self, _recipient: &str, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl SubmissionProgress for NoProgress {
    fn on_step_start(&self, _step: SubmissionStep) {}
    fn on_step_complete(&self, _step: SubmissionStep, _success: bool) {}
}
