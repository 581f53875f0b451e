//! Report writer port
//!
//! Lays out the final PDF from the submission, chart and score table.

use super::chart_renderer::RenderError;
use growth_index_domain::{RadialChart, ScoreTable, SubmissionRecord};

/// Everything the report writer needs for one document
///
/// The chart arrives as layout geometry so writers can draw it natively
/// instead of re-parsing the rendered image.
#[derive(Debug, Clone, Copy)]
pub struct ReportDocument<'a> {
    pub title: &'a str,
    pub intro: &'a str,
    pub table_heading: &'a str,
    pub submission: &'a SubmissionRecord,
    pub chart: &'a RadialChart,
    pub scores: &'a ScoreTable,
}

/// Produces the PDF bytes of a report
pub trait ReportWriter: Send + Sync {
    fn write(&self, document: &ReportDocument<'_>) -> Result<Vec<u8>, RenderError>;
}
