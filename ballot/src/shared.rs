//! Shared, serialized access to a ballot for concurrent hosts.
//!
//! The whole ballot sits behind one lock. Writers hold it for the full
//! operation; readers share it and never see a half-applied mutation.

use std::sync::Arc;

use ballot_types::{ProposalName, VoterAddress};
use tokio::sync::RwLock;

use crate::ballot::Ballot;
use crate::error::BallotError;
use crate::snapshot::BallotSnapshot;
use crate::voter::Voter;

/// A cloneable handle to a ballot shared between tasks.
#[derive(Clone, Debug)]
pub struct SharedBallot {
    inner: Arc<RwLock<Ballot>>,
}

impl SharedBallot {
    pub fn new(ballot: Ballot) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ballot)),
        }
    }

    pub async fn give_right_to_vote(
        &self,
        caller: &VoterAddress,
        voter: &VoterAddress,
    ) -> Result<(), BallotError> {
        self.inner.write().await.give_right_to_vote(caller, voter)
    }

    pub async fn delegate(&self, caller: &VoterAddress, to: &VoterAddress) -> Result<(), BallotError> {
        self.inner.write().await.delegate(caller, to)
    }

    pub async fn vote(&self, caller: &VoterAddress, proposal: usize) -> Result<(), BallotError> {
        self.inner.write().await.vote(caller, proposal)
    }

    pub async fn winning_proposal(&self) -> usize {
        self.inner.read().await.winning_proposal()
    }

    pub async fn winner_name(&self) -> ProposalName {
        self.inner.read().await.winner_name()
    }

    pub async fn voter(&self, address: &VoterAddress) -> Voter {
        self.inner.read().await.voter(address)
    }

    /// A read-consistent view of the whole ballot.
    pub async fn snapshot(&self) -> BallotSnapshot {
        self.inner.read().await.snapshot()
    }

    /// Run `f` against the ballot under the read lock.
    pub async fn read<R>(&self, f: impl FnOnce(&Ballot) -> R) -> R {
        let guard = self.inner.read().await;
        f(&*guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(name: &str) -> VoterAddress {
        VoterAddress::new(name)
    }

    #[tokio::test]
    async fn concurrent_voters_are_all_counted() {
        let ballot = Ballot::from_names(addr("chair"), &["Proposal 1", "Proposal 2", "Proposal 3"])
            .unwrap();
        let shared = SharedBallot::new(ballot);

        let voters: Vec<VoterAddress> = (0..32).map(|i| addr(&format!("voter{i}"))).collect();
        for voter in &voters {
            shared.give_right_to_vote(&addr("chair"), voter).await.unwrap();
        }

        let mut handles = Vec::new();
        for (i, voter) in voters.into_iter().enumerate() {
            let shared = shared.clone();
            handles.push(tokio::spawn(async move {
                shared.vote(&voter, i % 3).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let snapshot = shared.snapshot().await;
        assert_eq!(snapshot.total_votes, 32);
        assert_eq!(snapshot.proposals[0].vote_count, 11);
        assert_eq!(snapshot.winning_proposal, 0);
        assert_eq!(shared.winner_name().await, "Proposal 1");
        assert!(shared.voter(&addr("voter7")).await.voted);
        assert!(shared.read(|b| b.is_consistent()).await);
    }

    #[tokio::test]
    async fn read_runs_closure_against_current_state() {
        let ballot = Ballot::from_names(addr("chair"), &["A", "B"]).unwrap();
        let shared = SharedBallot::new(ballot);
        shared.vote(&addr("chair"), 1).await.unwrap();

        let (total, winner) = shared.read(|b| (b.total_votes(), b.winning_proposal())).await;
        assert_eq!(total, 1);
        assert_eq!(winner, 1);
    }

    #[tokio::test]
    async fn racing_double_vote_succeeds_once() {
        let ballot = Ballot::from_names(addr("chair"), &["A", "B"]).unwrap();
        let shared = SharedBallot::new(ballot);

        let first = {
            let shared = shared.clone();
            tokio::spawn(async move { shared.vote(&addr("chair"), 0).await })
        };
        let second = {
            let shared = shared.clone();
            tokio::spawn(async move { shared.vote(&addr("chair"), 1).await })
        };
        let results = [first.await.unwrap(), second.await.unwrap()];

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results.contains(&Err(BallotError::AlreadyVoted)));
        assert_eq!(shared.snapshot().await.total_votes, 1);
    }
}
