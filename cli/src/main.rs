//! CLI entrypoint for Growth Index
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use growth_index_application::{SubmitSurveyError, SubmitSurveyInput, SubmitSurveyUseCase};
use growth_index_domain::{OutputFormat, ScoreTable, SubmissionRecord, Survey, calculate_scores};
use growth_index_infrastructure::{
    ArtifactStore, ConfigLoader, ConfiguredEmailSender, FileConfig, PlottersChartRenderer,
    PrintPdfReportWriter,
};
use growth_index_presentation::{
    AnswersFile, Cli, Command, ConsoleFormatter, ProgressReporter, SimpleProgress, SubmitArgs,
    answers_template,
};
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Growth Index");

    // Load configuration
    let config = if cli.no_config {
        info!("Configuration files disabled (--no-config)");
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let survey = Survey::growth_index();

    match &cli.command {
        Command::Questions { template } => {
            if *template {
                print!("{}", answers_template(&survey));
            } else {
                println!("{}", ConsoleFormatter::format_questionnaire(&survey));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Score { answers, output } => {
            let responses = AnswersFile::load(answers)?.to_response_set(&survey)?;
            let scores = calculate_scores(&survey, &responses)?;
            let format = output.map(Into::into).or(config.output.format);
            println!("{}", render_scores(&scores, format));
            Ok(ExitCode::SUCCESS)
        }
        Command::Submit(args) => Ok(submit(&cli, args, &config, survey).await?.into()),
        Command::Config => {
            for line in ConfigLoader::describe_sources(cli.config.as_ref()) {
                println!("{}", line);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// How a `submit` run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitStatus {
    /// Report generated, at least one email delivered (or delivery skipped)
    Completed,
    /// Form rejected before anything was generated
    Invalid,
    /// Report generated and kept, but no email could be delivered
    Undelivered,
}

impl From<SubmitStatus> for ExitCode {
    fn from(status: SubmitStatus) -> Self {
        match status {
            SubmitStatus::Completed => ExitCode::SUCCESS,
            SubmitStatus::Invalid => ExitCode::from(2),
            SubmitStatus::Undelivered => ExitCode::FAILURE,
        }
    }
}

async fn submit(
    cli: &Cli,
    args: &SubmitArgs,
    config: &FileConfig,
    survey: Survey,
) -> Result<SubmitStatus> {
    let answers = AnswersFile::load(&args.answers)?;
    let responses = answers.to_response_set(&survey)?;
    let submission = merge_respondent(answers.respondent.unwrap_or_default(), args);

    // === Dependency Injection ===
    let email_sender = match &args.outbox {
        Some(dir) => ConfiguredEmailSender::outbox(dir.clone()),
        None if args.no_send => ConfiguredEmailSender::outbox(config.email.outbox.dir.clone()),
        None => ConfiguredEmailSender::from_config(&config.email),
    };

    let use_case = SubmitSurveyUseCase::new(
        config.report.clone(),
        Arc::new(PlottersChartRenderer::new()),
        Arc::new(PrintPdfReportWriter::new()),
        Arc::new(email_sender),
    )
    .with_survey(survey);

    let mut input = SubmitSurveyInput::new(submission.clone(), responses);
    if args.no_send {
        input = input.without_delivery();
    }

    let result = if cli.quiet {
        use_case.execute(input).await
    } else if !std::io::stderr().is_terminal() {
        use_case.execute_with_progress(input, &SimpleProgress).await
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await
    };

    // A failed delivery still leaves a report worth keeping
    let (outcome, status) = match result {
        Ok(outcome) => (outcome, SubmitStatus::Completed),
        Err(e) if e.is_user_error() => {
            eprintln!("{}", e);
            return Ok(SubmitStatus::Invalid);
        }
        Err(SubmitSurveyError::Delivery { outcome }) => (*outcome, SubmitStatus::Undelivered),
        Err(e) => return Err(e.into()),
    };

    for attempt in outcome.failed_deliveries() {
        if let Some(err) = &attempt.error {
            warn!("Report email to {} failed: {}", attempt.address, err);
        }
    }

    let stored = if config.output.write_artifacts && !args.no_artifacts {
        let root = args.output_dir.clone().unwrap_or_else(|| config.output.dir.clone());
        let stored = ArtifactStore::new(root)
            .store(&submission.company_name, &outcome.chart, &outcome.report)
            .context("Failed to write report artifacts")?;
        Some(stored)
    } else {
        None
    };

    let format = args.output.map(Into::into).or(config.output.format);
    println!("{}", render_scores(&outcome.scores, format));
    if format != Some(OutputFormat::Json) {
        println!(
            "{}",
            ConsoleFormatter::format_outcome(&outcome, stored.as_ref().map(|s| s.dir.as_path()))
        );
    }

    if status == SubmitStatus::Undelivered {
        eprintln!("No report email could be delivered");
    }
    Ok(status)
}

/// Command-line values win over the answers file's `[respondent]` table.
fn merge_respondent(mut record: SubmissionRecord, args: &SubmitArgs) -> SubmissionRecord {
    let overrides = [
        (&mut record.company_name, &args.company),
        (&mut record.first_name, &args.first_name),
        (&mut record.last_name, &args.last_name),
        (&mut record.position, &args.position),
        (&mut record.email, &args.email),
    ];
    for (field, value) in overrides {
        if !value.trim().is_empty() {
            *field = value.clone();
        }
    }
    record
}

fn render_scores(scores: &ScoreTable, format: Option<OutputFormat>) -> String {
    match format.unwrap_or_default() {
        OutputFormat::Table => ConsoleFormatter::format_scores(scores),
        OutputFormat::Json => ConsoleFormatter::format_json(scores),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use growth_index_infrastructure::EmailTransportKind;
    use std::path::{Path, PathBuf};

    fn parse(argv: &[&str]) -> (Cli, SubmitArgs) {
        let cli = Cli::parse_from(argv);
        let args = match &cli.command {
            Command::Submit(args) => args.clone(),
            other => panic!("unexpected command: {:?}", other),
        };
        (cli, args)
    }

    fn args(company: &str, email: &str) -> SubmitArgs {
        parse(&[
            "growth-index",
            "submit",
            "--answers",
            "a.toml",
            "--company",
            company,
            "--email",
            email,
        ])
        .1
    }

    fn answers_file(dir: &Path) -> PathBuf {
        let path = dir.join("answers.toml");
        let content = "[answers]\n\"Sales Forecasting\" = [\"Yes\", \"Yes\"]\n";
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Config whose SendGrid key variable is never set
    fn config_without_secret(dir: &Path) -> FileConfig {
        let mut config = FileConfig::default();
        config.email.transport = EmailTransportKind::SendGrid;
        config.email.sendgrid.api_key_env = "GROWTH_INDEX_TEST_UNSET_SENDGRID_KEY".to_string();
        config.output.dir = dir.join("reports");
        config
    }

    fn stored_reports(root: &Path) -> Vec<PathBuf> {
        match std::fs::read_dir(root) {
            Ok(entries) => entries
                .map(|e| e.unwrap().path().join("survey_report.pdf"))
                .filter(|p| p.exists())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    #[test]
    fn test_flags_override_answers_file() {
        let from_file = SubmissionRecord::new("File Co").with_email("file@acme.test");
        let merged = merge_respondent(from_file, &args("Flag Co", ""));

        assert_eq!(merged.company_name, "Flag Co");
        assert_eq!(merged.email, "file@acme.test");
    }

    #[test]
    fn test_blank_everywhere_stays_blank() {
        let merged = merge_respondent(SubmissionRecord::default(), &args(" ", ""));
        assert!(merged.validate().is_err());
    }

    #[tokio::test]
    async fn test_missing_transport_secret_still_keeps_report() {
        let dir = tempfile::tempdir().unwrap();
        let answers = answers_file(dir.path());
        let config = config_without_secret(dir.path());
        let (cli, args) = parse(&[
            "growth-index",
            "-q",
            "submit",
            "--answers",
            answers.to_str().unwrap(),
            "--company",
            "Acme",
            "--email",
            "jane@acme.test",
        ]);

        let status = submit(&cli, &args, &config, Survey::growth_index())
            .await
            .unwrap();

        assert_eq!(status, SubmitStatus::Undelivered);
        let reports = stored_reports(&config.output.dir);
        assert_eq!(reports.len(), 1);
        assert!(std::fs::read(&reports[0]).unwrap().starts_with(b"%PDF"));
        let chart = reports[0].with_file_name("radar_chart.svg");
        assert!(std::fs::read_to_string(chart).unwrap().contains("<svg"));
    }

    #[tokio::test]
    async fn test_unwritable_outbox_still_keeps_report() {
        let dir = tempfile::tempdir().unwrap();
        let answers = answers_file(dir.path());
        let blocker = dir.path().join("not-a-directory");
        std::fs::write(&blocker, b"").unwrap();
        let config = config_without_secret(dir.path());
        let (cli, args) = parse(&[
            "growth-index",
            "-q",
            "submit",
            "--answers",
            answers.to_str().unwrap(),
            "--company",
            "Acme",
            "--outbox",
            blocker.to_str().unwrap(),
        ]);

        let status = submit(&cli, &args, &config, Survey::growth_index())
            .await
            .unwrap();

        assert_eq!(status, SubmitStatus::Undelivered);
        assert_eq!(stored_reports(&config.output.dir).len(), 1);
    }

    #[tokio::test]
    async fn test_outbox_delivery_completes() {
        let dir = tempfile::tempdir().unwrap();
        let answers = answers_file(dir.path());
        let outbox = dir.path().join("outbox");
        let config = config_without_secret(dir.path());
        let (cli, args) = parse(&[
            "growth-index",
            "-q",
            "submit",
            "--answers",
            answers.to_str().unwrap(),
            "--company",
            "Acme",
            "--email",
            "jane@acme.test",
            "--outbox",
            outbox.to_str().unwrap(),
        ]);

        let status = submit(&cli, &args, &config, Survey::growth_index())
            .await
            .unwrap();

        assert_eq!(status, SubmitStatus::Completed);
        let envelopes = std::fs::read_dir(&outbox)
            .unwrap()
            .filter(|e| {
                e.as_ref()
                    .unwrap()
                    .path()
                    .extension()
                    .is_some_and(|x| x == "json")
            })
            .count();
        assert_eq!(envelopes, 2);
    }

    #[tokio::test]
    async fn test_missing_company_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let answers = answers_file(dir.path());
        let config = config_without_secret(dir.path());
        let (cli, args) = parse(&[
            "growth-index",
            "-q",
            "submit",
            "--answers",
            answers.to_str().unwrap(),
        ]);

        let status = submit(&cli, &args, &config, Survey::growth_index())
            .await
            .unwrap();

        assert_eq!(status, SubmitStatus::Invalid);
        assert!(stored_reports(&config.output.dir).is_empty());
    }
}
