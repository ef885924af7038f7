use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("config error: {0}")]
    Config(String),

    #[error("script error: {0}")]
    Script(String),

    #[error("ballot error: {0}")]
    Ballot(#[from] ballot_ledger::BallotError),
}
