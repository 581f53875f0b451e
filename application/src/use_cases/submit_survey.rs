//! Submit Survey use case
//!
//! Turns one survey submission into a delivered report: validate, score,
//! render the chart, build the PDF, then email it to the respondent and the
//! administrative address.

use crate::config::ReportSettings;
use crate::ports::chart_renderer::{ChartImage, ChartRenderer, RenderError};
use crate::ports::email_sender::{DeliveryError, EmailAttachment, EmailSender, OutgoingEmail};
use crate::ports::progress::{NoProgress, SubmissionProgress, SubmissionStep};
use crate::ports::report_writer::{ReportDocument, ReportWriter};
use growth_index_domain::{
    DomainError, REPORT_FILE_NAME, RadialChart, ReportTemplate, ResponseSet, ScoreTable,
    SubmissionRecord, Survey, ValidationError, calculate_scores,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while submitting a survey
#[derive(Error, Debug)]
pub enum SubmitSurveyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Incomplete responses: {0}")]
    IncompleteResponses(#[from] DomainError),

    #[error(transparent)]
    Render(#[from] RenderError),

    /// Every delivery failed; the generated report is still returned
    #[error("No report email could be delivered ({} attempted)", .outcome.deliveries.len())]
    Delivery { outcome: Box<SubmissionOutcome> },
}

impl SubmitSurveyError {
    /// `true` for problems the respondent can fix by editing the form
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            SubmitSurveyError::Validation(_) | SubmitSurveyError::IncompleteResponses(_)
        )
    }
}

/// Who a report email is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient {
    Respondent,
    Admin,
}

impl Recipient {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recipient::Respondent => "respondent",
            Recipient::Admin => "admin",
        }
    }
}

/// Result of one delivery attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryAttempt {
    pub recipient: Recipient,
    pub address: String,
    pub error: Option<DeliveryError>,
}

impl DeliveryAttempt {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Input for the SubmitSurvey use case
#[derive(Debug, Clone)]
pub struct SubmitSurveyInput {
    pub submission: SubmissionRecord,
    pub responses: ResponseSet,
    /// When `false`, chart and PDF are produced but no email is sent
    pub deliver: bool,
}

impl SubmitSurveyInput {
    pub fn new(submission: SubmissionRecord, responses: ResponseSet) -> Self {
        Self {
            submission,
            responses,
            deliver: true,
        }
    }

    pub fn without_delivery(mut self) -> Self {
        self.deliver = false;
        self
    }
}

/// Everything produced by a successful submission
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub scores: ScoreTable,
    pub chart: ChartImage,
    pub report: Vec<u8>,
    pub deliveries: Vec<DeliveryAttempt>,
}

impl SubmissionOutcome {
    pub fn failed_deliveries(&self) -> impl Iterator<Item = &DeliveryAttempt> {
        self.deliveries.iter().filter(|d| !d.is_success())
    }

    pub fn is_fully_delivered(&self) -> bool {
        self.deliveries.iter().all(DeliveryAttempt::is_success)
    }
}

/// Use case for submitting a completed survey
pub struct SubmitSurveyUseCase<C, W, E>
where
    C: ChartRenderer,
    W: ReportWriter,
    E: EmailSender,
{
    survey: Survey,
    settings: ReportSettings,
    chart_renderer: Arc<C>,
    report_writer: Arc<W>,
    email_sender: Arc<E>,
}

impl<C, W, E> SubmitSurveyUseCase<C, W, E>
where
    C: ChartRenderer,
    W: ReportWriter,
    E: EmailSender,
{
    pub fn new(
        settings: ReportSettings,
        chart_renderer: Arc<C>,
        report_writer: Arc<W>,
        email_sender: Arc<E>,
    ) -> Self {
        Self {
            survey: Survey::growth_index(),
            settings,
            chart_renderer,
            report_writer,
            email_sender,
        }
    }

    pub fn with_survey(mut self, survey: Survey) -> Self {
        self.survey = survey;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: SubmitSurveyInput,
    ) -> Result<SubmissionOutcome, SubmitSurveyError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: SubmitSurveyInput,
        progress: &dyn SubmissionProgress,
    ) -> Result<SubmissionOutcome, SubmitSurveyError> {
        let SubmitSurveyInput {
            submission,
            responses,
            deliver,
        } = input;

        // Step 1: Validation gates everything else
        progress.on_step_start(SubmissionStep::Validate);
        let validation = submission.validate();
        progress.on_step_complete(SubmissionStep::Validate, validation.is_ok());
        validation?;

        info!("Processing submission for {}", submission.company_name);

        // Step 2: Scores
        progress.on_step_start(SubmissionStep::Score);
        let scores = calculate_scores(&self.survey, &responses);
        progress.on_step_complete(SubmissionStep::Score, scores.is_ok());
        let scores = scores?;
        debug!("Total score {}/{}", scores.total(), scores.max_total());

        // Step 3: Chart
        progress.on_step_start(SubmissionStep::Chart);
        let (labels, values) = (scores.labels(), scores.values());
        let chart = self.chart_renderer.render(&labels, &values);
        progress.on_step_complete(SubmissionStep::Chart, chart.is_ok());
        let chart = chart?;

        // Step 4: PDF
        progress.on_step_start(SubmissionStep::Report);
        let intro = self.settings.intro_text();
        let layout = RadialChart::new(&labels, &values);
        let document = ReportDocument {
            title: &self.settings.title,
            intro: &intro,
            table_heading: ReportTemplate::table_heading(),
            submission: &submission,
            chart: &layout,
            scores: &scores,
        };
        let report = self.report_writer.write(&document);
        progress.on_step_complete(SubmissionStep::Report, report.is_ok());
        let report = report?;
        info!("Report generated ({} bytes)", report.len());

        if !deliver {
            info!("Delivery disabled, skipping emails");
            return Ok(SubmissionOutcome {
                scores,
                chart,
                report,
                deliveries: Vec::new(),
            });
        }

        // Step 5: Emails, respondent first, admin copy always attempted
        progress.on_step_start(SubmissionStep::Deliver);
        let deliveries = self.deliver(&submission, &report, progress).await;
        let all_failed = deliveries.iter().all(|d| !d.is_success());
        progress.on_step_complete(SubmissionStep::Deliver, !all_failed);

        if all_failed {
            return Err(SubmitSurveyError::Delivery {
                outcome: Box::new(SubmissionOutcome {
                    scores,
                    chart,
                    report,
                    deliveries,
                }),
            });
        }

        Ok(SubmissionOutcome {
            scores,
            chart,
            report,
            deliveries,
        })
    }

    async fn deliver(
        &self,
        submission: &SubmissionRecord,
        report: &[u8],
        progress: &dyn SubmissionProgress,
    ) -> Vec<DeliveryAttempt> {
        let html_body = ReportTemplate::email_html(&submission.first_name, &self.settings.organization);

        let mut recipients = Vec::with_capacity(2);
        if let Some(address) = submission.respondent_email() {
            recipients.push((Recipient::Respondent, address.to_string()));
        }
        recipients.push((Recipient::Admin, self.settings.admin_email.clone()));

        let mut attempts = Vec::with_capacity(recipients.len());
        for (recipient, address) in recipients {
            let email = OutgoingEmail {
                from: self.settings.sender_email.clone(),
                to: address.clone(),
                subject: self.settings.subject.clone(),
                html_body: html_body.clone(),
                attachment: EmailAttachment::pdf(REPORT_FILE_NAME, report.to_vec()),
            };

            let error = match self.email_sender.send(&email).await {
                Ok(()) => {
                    info!(
                        "Report sent to {} ({}) via {}",
                        address,
                        recipient.as_str(),
                        self.email_sender.transport_name()
                    );
                    None
                }
                Err(e) => {
                    warn!("Error sending report to {}: {}", address, e);
                    Some(e)
                }
            };

            progress.on_delivery(&address, error.is_none());
            attempts.push(DeliveryAttempt {
                recipient,
                address,
                error,
            });
        }

        attempts
    }
}
