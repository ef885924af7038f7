//! Election configuration with TOML file support.

use std::path::Path;

use ballot_ledger::Ballot;
use ballot_types::VoterAddress;
use ballot_utils::LogFormat;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Configuration for deploying a ballot.
///
/// Can be loaded from a TOML file via [`BallotConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BallotConfig {
    /// Address that deploys the ballot and grants voting rights.
    #[serde(default = "default_chairperson")]
    pub chairperson: VoterAddress,

    /// Proposal names, in index order.
    #[serde(default = "default_proposals")]
    pub proposals: Vec<String>,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_chairperson() -> VoterAddress {
    VoterAddress::new("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
}

fn default_proposals() -> Vec<String> {
    vec![
        "Proposal 1".to_string(),
        "Proposal 2".to_string(),
        "Proposal 3".to_string(),
    ]
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl BallotConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, CliError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| CliError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, CliError> {
        toml::from_str(s).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, CliError> {
        toml::to_string_pretty(self).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Reject settings the ledger would refuse or that name no real account.
    pub fn validate(&self) -> Result<(), CliError> {
        if !self.chairperson.is_valid() {
            return Err(CliError::Config(format!(
                "chairperson {} is not a 0x-prefixed 20-byte hex address",
                self.chairperson
            )));
        }
        if self.proposals.is_empty() {
            return Err(CliError::Config("at least one proposal is required".into()));
        }
        Ok(())
    }

    /// Deploy a fresh ballot from this configuration.
    pub fn deploy(&self) -> Result<Ballot, CliError> {
        self.validate()?;
        Ok(Ballot::from_names(self.chairperson.clone(), self.proposals.as_slice())?)
    }
}

impl Default for BallotConfig {
    fn default() -> Self {
        Self {
            chairperson: default_chairperson(),
            proposals: default_proposals(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = BallotConfig::default();
        let toml_str = config.to_toml_string().unwrap();
        let parsed = BallotConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed.chairperson, config.chairperson);
        assert_eq!(parsed.proposals, config.proposals);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = BallotConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.proposals.len(), 3);
        assert_eq!(config.log_format, LogFormat::Human);
        assert_eq!(config.log_level, "info");
        assert!(config.chairperson.is_valid());
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            proposals = ["Yes", "No"]
            log_format = "json"
        "#;
        let config = BallotConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.proposals, vec!["Yes", "No"]);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn log_format_is_case_insensitive_in_toml() {
        let config = BallotConfig::from_toml_str(r#"log_format = "JSON""#).expect("should parse");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn deploy_builds_ballot_with_configured_chairperson() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"chairperson = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8""#
        )
        .unwrap();

        let config = BallotConfig::from_toml_file(file.path()).unwrap();
        let ballot = config.deploy().unwrap();
        assert_eq!(
            ballot.chairperson().as_str(),
            "0x70997970c51812dc3a010c7d01b50e0d17dc79c8"
        );
        assert_eq!(ballot.winner_name(), "Proposal 1");
    }

    #[test]
    fn invalid_chairperson_fails_validation() {
        let config = BallotConfig::from_toml_str(r#"chairperson = "alice""#).unwrap();
        assert!(matches!(config.deploy(), Err(CliError::Config(_))));
    }

    #[test]
    fn empty_proposal_list_fails_validation() {
        let config = BallotConfig::from_toml_str("proposals = []").unwrap();
        assert!(matches!(config.validate(), Err(CliError::Config(_))));
    }

    #[test]
    fn oversized_proposal_name_surfaces_ballot_error() {
        let config = BallotConfig {
            proposals: vec!["n".repeat(64)],
            ..BallotConfig::default()
        };
        assert!(matches!(config.deploy(), Err(CliError::Ballot(_))));
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = BallotConfig::from_toml_file("/nonexistent/ballot.toml");
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
