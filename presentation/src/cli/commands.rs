//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for score results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Table with a bar per category
    Table,
    /// JSON output
    Json,
}

impl From<OutputFormat> for growth_index_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => growth_index_domain::OutputFormat::Table,
            OutputFormat::Json => growth_index_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for growth-index
#[derive(Parser, Debug)]
#[command(name = "growth-index")]
#[command(author, version, about = "Growth Index survey - score, report and email results")]
#[command(long_about = r#"
Growth Index scores a 40-question yes/no sales assessment across ten focus
areas, renders a radial chart, builds a PDF report and emails it to the
respondent and the administrative address.

Answers are read from a TOML file. Generate a template with:
  growth-index questions --template > answers.toml

Configuration files are loaded from (in priority order):
1. GROWTH_INDEX_* environment variables
2. --config <path>           Explicit config file
3. ./growth-index.toml       Project-level config
4. ~/.config/growth-index/config.toml   Global config

Example:
  growth-index score --answers answers.toml
  growth-index submit --answers answers.toml --company "Acme" --first-name Jane --email jane@acme.test
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the questionnaire
    Questions {
        /// Print an answers-file template instead
        #[arg(long)]
        template: bool,
    },

    /// Score an answers file without generating a report
    Score {
        /// Answers file (TOML)
        #[arg(short, long, value_name = "FILE")]
        answers: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },

    /// Score, build the PDF report and email it
    Submit(SubmitArgs),

    /// Show configuration file locations
    Config,
}

/// Arguments of the `submit` command
#[derive(Args, Debug, Clone)]
pub struct SubmitArgs {
    /// Answers file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub answers: PathBuf,

    /// Company name (required)
    #[arg(long, default_value = "")]
    pub company: String,

    /// Respondent first name
    #[arg(long, default_value = "")]
    pub first_name: String,

    /// Respondent last name
    #[arg(long, default_value = "")]
    pub last_name: String,

    /// Respondent position
    #[arg(long, default_value = "")]
    pub position: String,

    /// Respondent email; a copy of the report is sent here
    #[arg(long, default_value = "")]
    pub email: String,

    /// Build chart and PDF only, send nothing
    #[arg(long)]
    pub no_send: bool,

    /// Store emails in this directory instead of using the configured transport
    #[arg(long, value_name = "DIR")]
    pub outbox: Option<PathBuf>,

    /// Directory for generated chart and PDF (overrides config)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Do not keep the chart and PDF on disk
    #[arg(long)]
    pub no_artifacts: bool,

    /// Output format for the score summary
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_submit() {
        let cli = Cli::parse_from([
            "growth-index",
            "-v",
            "submit",
            "--answers",
            "answers.toml",
            "--company",
            "Acme",
            "--email",
            "jane@acme.test",
            "--no-send",
        ]);

        assert_eq!(cli.verbose, 1);
        match cli.command {
            Command::Submit(args) => {
                assert_eq!(args.company, "Acme");
                assert_eq!(args.email, "jane@acme.test");
                assert!(args.no_send);
                assert!(args.first_name.is_empty());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_company_defaults_to_empty() {
        let cli = Cli::parse_from(["growth-index", "submit", "--answers", "a.toml"]);
        match cli.command {
            Command::Submit(args) => assert!(args.company.is_empty()),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_score_json() {
        let cli = Cli::parse_from(["growth-index", "score", "-a", "a.toml", "-o", "json"]);
        match cli.command {
            Command::Score { output, .. } => assert_eq!(output, Some(OutputFormat::Json)),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
