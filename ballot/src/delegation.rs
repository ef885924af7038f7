//! Delegation-chain resolution.
//!
//! A delegating voter records only its immediate target. Following those
//! records from a requested target leads to the voter who will actually carry
//! the weight: the first voter on the chain with no delegation of its own.
//!
//! Resolution walks address keys in the registry, never references, and is
//! bounded by the registry size: a revisited key is a cycle.

use crate::error::BallotError;
use crate::voter::Voter;
use ballot_types::VoterAddress;
use std::collections::{HashMap, HashSet};

/// Resolve the final delegate for a delegation from `origin` to `to`.
///
/// Fails with [`BallotError::DelegationCycle`] if the chain leads back to
/// `origin`, or revisits any voter on the way.
pub fn resolve_delegate(
    voters: &HashMap<VoterAddress, Voter>,
    origin: &VoterAddress,
    to: &VoterAddress,
) -> Result<VoterAddress, BallotError> {
    let mut current = to;
    let mut visited = HashSet::new();
    // Every hop lands on a registry entry, so a chain has at most `voters.len()` hops.
    for _ in 0..=voters.len() {
        if current == origin || !visited.insert(current) {
            return Err(BallotError::DelegationCycle);
        }
        match voters.get(current).and_then(|v| v.delegate_to.as_ref()) {
            Some(next) => current = next,
            None => return Ok(current.clone()),
        }
    }
    Err(BallotError::DelegationCycle)
}
