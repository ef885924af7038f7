//! Ballot proposals.

use ballot_types::ProposalName;
use serde::{Deserialize, Serialize};

/// A proposal registered when the ballot was created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// Fixed at construction.
    pub name: ProposalName,
    /// Accumulated weight of the ballots credited to this proposal.
    pub vote_count: u64,
}

impl Proposal {
    pub fn new(name: ProposalName) -> Self {
        Self {
            name,
            vote_count: 0,
        }
    }
}
