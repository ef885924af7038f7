//! Serializable point-in-time view of a ballot.

use ballot_types::{ProposalName, VoterAddress};
use serde::Serialize;

use crate::ballot::Ballot;

/// One row of the tally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProposalTally {
    pub index: usize,
    pub name: ProposalName,
    pub vote_count: u64,
}

/// The state of a ballot as seen by a single reader.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BallotSnapshot {
    pub chairperson: VoterAddress,
    pub proposals: Vec<ProposalTally>,
    pub total_votes: u64,
    pub winning_proposal: usize,
    pub winner_name: ProposalName,
}

impl Ballot {
    pub fn snapshot(&self) -> BallotSnapshot {
        BallotSnapshot {
            chairperson: self.chairperson().clone(),
            proposals: self
                .proposals()
                .iter()
                .enumerate()
                .map(|(index, p)| ProposalTally {
                    index,
                    name: p.name,
                    vote_count: p.vote_count,
                })
                .collect(),
            total_votes: self.total_votes(),
            winning_proposal: self.winning_proposal(),
            winner_name: self.winner_name(),
        }
    }
}
