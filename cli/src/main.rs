//! `ballot`: deploy a single election and drive it from the command line.

mod config;
mod error;
mod script;

use std::path::PathBuf;

use anyhow::Context;
use ballot_ledger::SharedBallot;
use ballot_types::VoterAddress;
use ballot_utils::LogFormat;
use clap::Parser;
use serde::Serialize;

use crate::config::BallotConfig;
use crate::script::{run_script, RunReport, Script};

#[derive(Parser)]
#[command(name = "ballot", about = "Single-election voting ledger")]
struct Cli {
    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "BALLOT_CONFIG")]
    config: Option<PathBuf>,

    /// Chairperson address (0x-prefixed, 20 bytes of hex).
    #[arg(long, env = "BALLOT_CHAIRPERSON")]
    chairperson: Option<String>,

    /// Proposal names (comma-separated: "Proposal 1,Proposal 2").
    #[arg(long, env = "BALLOT_PROPOSALS", value_delimiter = ',')]
    proposals: Vec<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "BALLOT_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "BALLOT_LOG_LEVEL")]
    log_level: Option<String>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Print the effective configuration as TOML.
    Config,
    /// Deploy the ballot and print its initial state.
    Deploy,
    /// Deploy the ballot, replay an action script, and print the result.
    Run {
        /// Path to a TOML action script.
        #[arg(long)]
        script: PathBuf,
    },
}

#[derive(Serialize)]
struct RunOutput {
    #[serde(flatten)]
    report: RunReport,
    ballot: ballot_ledger::BallotSnapshot,
}

impl Cli {
    /// Layer CLI flags and env vars over the file (or default) configuration.
    fn resolve_config(&self) -> anyhow::Result<BallotConfig> {
        let base = match &self.config {
            Some(path) => BallotConfig::from_toml_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => BallotConfig::default(),
        };

        Ok(BallotConfig {
            chairperson: self
                .chairperson
                .as_deref()
                .map(VoterAddress::new)
                .unwrap_or(base.chairperson),
            proposals: if self.proposals.is_empty() {
                base.proposals
            } else {
                self.proposals.clone()
            },
            log_format: self.log_format.unwrap_or(base.log_format),
            log_level: self.log_level.clone().unwrap_or(base.log_level),
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    if let Command::Config = cli.command {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    ballot_utils::init_logging(config.log_format, &config.log_level);
    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let ballot = config.deploy().context("deploying ballot")?;
    tracing::info!(
        "Deployed ballot with {} proposals, chairperson {}",
        ballot.proposal_count(),
        ballot.chairperson()
    );

    match cli.command {
        Command::Config => {}
        Command::Deploy => {
            println!("{}", serde_json::to_string_pretty(&ballot.snapshot())?);
        }
        Command::Run { script } => {
            let actions = Script::from_toml_file(&script)
                .with_context(|| format!("loading script from {}", script.display()))?;
            let shared = SharedBallot::new(ballot);
            let report = run_script(&shared, &actions).await;
            let output = RunOutput {
                report,
                ballot: shared.snapshot().await,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn flags_override_file_settings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "proposals = [\"A\", \"B\"]\nlog_level = \"debug\"").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let cli = Cli::parse_from([
            "ballot",
            "--config",
            path.as_str(),
            "--proposals",
            "Yes,No,Maybe",
            "deploy",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.proposals, vec!["Yes", "No", "Maybe"]);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Human);
    }

    #[test]
    fn run_requires_script_path() {
        assert!(Cli::try_parse_from(["ballot", "run"]).is_err());
        let cli = Cli::try_parse_from(["ballot", "run", "--script", "actions.toml"]).unwrap();
        assert!(matches!(cli.command, Command::Run { .. }));
    }

    #[test]
    fn unreadable_config_is_an_error() {
        let cli = Cli::parse_from(["ballot", "--config", "/nonexistent/ballot.toml", "deploy"]);
        assert!(cli.resolve_config().is_err());
    }
}
