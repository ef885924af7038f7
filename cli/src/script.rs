//! Action scripts: an ordered list of ledger calls replayed against a ballot.
//!
//! ```toml
//! [[actions]]
//! op = "give_right_to_vote"
//! caller = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
//! voter = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8"
//!
//! [[actions]]
//! op = "vote"
//! caller = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8"
//! proposal = 2
//! ```

use std::path::Path;

use ballot_ledger::{BallotError, SharedBallot};
use ballot_types::VoterAddress;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// One call made on behalf of `caller`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Action {
    GiveRightToVote {
        caller: VoterAddress,
        voter: VoterAddress,
    },
    Delegate {
        caller: VoterAddress,
        to: VoterAddress,
    },
    Vote {
        caller: VoterAddress,
        proposal: usize,
    },
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub actions: Vec<Action>,
}

/// An action the ledger refused.
#[derive(Clone, Debug, Serialize)]
pub struct Rejection {
    /// Position of the action in the script.
    pub index: usize,
    pub action: Action,
    pub error: String,
}

/// Outcome of replaying a script.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RunReport {
    pub applied: usize,
    pub rejected: Vec<Rejection>,
}

impl Script {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, CliError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| CliError::Script(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, CliError> {
        toml::from_str(s).map_err(|e| CliError::Script(e.to_string()))
    }
}

async fn apply(ballot: &SharedBallot, action: &Action) -> Result<(), BallotError> {
    match action {
        Action::GiveRightToVote { caller, voter } => ballot.give_right_to_vote(caller, voter).await,
        Action::Delegate { caller, to } => ballot.delegate(caller, to).await,
        Action::Vote { caller, proposal } => ballot.vote(caller, *proposal).await,
    }
}

/// Replay every action in order.
///
/// A rejected action is logged and recorded; the run carries on with the next
/// one, since a rejection leaves the ballot untouched.
pub async fn run_script(ballot: &SharedBallot, script: &Script) -> RunReport {
    let mut report = RunReport::default();
    for (index, action) in script.actions.iter().enumerate() {
        match apply(ballot, action).await {
            Ok(()) => report.applied += 1,
            Err(e) => {
                tracing::warn!(index, ?action, error = %e, "action rejected");
                report.rejected.push(Rejection {
                    index,
                    action: action.clone(),
                    error: e.to_string(),
                });
            }
        }
    }
    tracing::info!(
        applied = report.applied,
        rejected = report.rejected.len(),
        "script finished"
    );
    report
}
