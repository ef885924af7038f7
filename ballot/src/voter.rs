//! Voter registry entries.

use ballot_types::VoterAddress;
use serde::{Deserialize, Serialize};

/// A voter's standing in the election.
///
/// Entries are created lazily; an address the ledger has never seen reads as
/// `Voter::default()` (no weight, not voted).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    /// Tally units this voter's ballot carries. Zero until rights are granted.
    pub weight: u64,
    /// Set once the ballot is cast, directly or by delegation. Terminal.
    pub voted: bool,
    /// Proposal this voter's weight was credited to, if any.
    pub vote: Option<usize>,
    /// Immediate target of this voter's delegation.
    pub delegate_to: Option<VoterAddress>,
}
