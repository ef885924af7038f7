//! The election ledger: proposals, voter registry, and the voting state machine.
//!
//! A voter moves through `NoRights → CanVote → Voted`. Rights come from the
//! chairperson; `vote` and `delegate` both end in `Voted`, which is terminal.
//!
//! Each mutating operation runs in two phases. The check phase reads the
//! ledger and either rejects the call or returns everything the write needs;
//! the apply phase cannot fail. A rejected call therefore never leaves a
//! partial weight transfer or tally increment behind.

use std::collections::HashMap;

use ballot_types::{ProposalName, VoterAddress};
use tracing::{debug, info};

use crate::delegation::resolve_delegate;
use crate::error::BallotError;
use crate::proposal::Proposal;
use crate::voter::Voter;

/// Where a delegated ballot's weight ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DelegationOutcome {
    /// The resolved delegate already voted: credit its proposal now.
    Credited { proposal: usize },
    /// The resolved delegate has not voted: it will vote with the added weight.
    Transferred { delegate: VoterAddress },
}

/// A single election.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ballot {
    chairperson: VoterAddress,
    proposals: Vec<Proposal>,
    voters: HashMap<VoterAddress, Voter>,
}

impl Ballot {
    /// Create a ballot with `chairperson` as the rights-granting authority.
    ///
    /// The chairperson starts with a weight of 1. Duplicate names are allowed;
    /// proposals are told apart by index.
    pub fn new(
        chairperson: VoterAddress,
        proposal_names: impl IntoIterator<Item = ProposalName>,
    ) -> Result<Self, BallotError> {
        let proposals: Vec<Proposal> = proposal_names.into_iter().map(Proposal::new).collect();
        if proposals.is_empty() {
            return Err(BallotError::NoProposals);
        }

        let mut voters = HashMap::new();
        voters.insert(
            chairperson.clone(),
            Voter {
                weight: 1,
                ..Voter::default()
            },
        );

        info!(
            chairperson = %chairperson,
            proposals = proposals.len(),
            "ballot created"
        );
        Ok(Self {
            chairperson,
            proposals,
            voters,
        })
    }

    /// Create a ballot from plain strings, packing each into a name slot.
    pub fn from_names<S: AsRef<str>>(
        chairperson: VoterAddress,
        names: &[S],
    ) -> Result<Self, BallotError> {
        let names = names
            .iter()
            .map(|n| ProposalName::encode(n.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(chairperson, names)
    }

    // ── Mutations ──────────────────────────────────────────────────────

    /// Give `voter` the right to vote. Only the chairperson may call this.
    pub fn give_right_to_vote(
        &mut self,
        caller: &VoterAddress,
        voter: &VoterAddress,
    ) -> Result<(), BallotError> {
        self.check_give_right_to_vote(caller, voter).inspect_err(|e| {
            debug!(caller = %caller, voter = %voter, error = %e, "give_right_to_vote rejected")
        })?;

        self.voters.entry(voter.clone()).or_default().weight = 1;
        info!(voter = %voter, "voting right granted");
        Ok(())
    }

    /// Delegate the caller's ballot to `to`.
    ///
    /// The caller records `to` as its delegate. The weight itself goes to the
    /// end of the delegation chain starting at `to`: straight into that voter's
    /// proposal if it already voted, otherwise onto that voter's weight.
    pub fn delegate(&mut self, caller: &VoterAddress, to: &VoterAddress) -> Result<(), BallotError> {
        let (weight, outcome) = self
            .check_delegate(caller, to)
            .inspect_err(|e| debug!(caller = %caller, to = %to, error = %e, "delegate rejected"))?;

        let credited = match &outcome {
            DelegationOutcome::Credited { proposal } => Some(*proposal),
            DelegationOutcome::Transferred { .. } => None,
        };
        let sender = self.voters.entry(caller.clone()).or_default();
        sender.voted = true;
        sender.delegate_to = Some(to.clone());
        sender.vote = credited;

        match outcome {
            DelegationOutcome::Credited { proposal } => {
                self.proposals[proposal].vote_count += weight;
                info!(voter = %caller, to = %to, proposal, weight, "delegated ballot credited");
            }
            DelegationOutcome::Transferred { delegate } => {
                self.voters.entry(delegate.clone()).or_default().weight += weight;
                info!(voter = %caller, to = %to, delegate = %delegate, weight, "delegated weight transferred");
            }
        }
        Ok(())
    }

    /// Cast the caller's ballot, with its full weight, for `proposal`.
    pub fn vote(&mut self, caller: &VoterAddress, proposal: usize) -> Result<(), BallotError> {
        let weight = self
            .check_vote(caller, proposal)
            .inspect_err(|e| debug!(caller = %caller, proposal, error = %e, "vote rejected"))?;

        let sender = self.voters.entry(caller.clone()).or_default();
        sender.voted = true;
        sender.vote = Some(proposal);
        self.proposals[proposal].vote_count += weight;
        info!(voter = %caller, proposal, weight, "vote cast");
        Ok(())
    }

    fn check_give_right_to_vote(
        &self,
        caller: &VoterAddress,
        voter: &VoterAddress,
    ) -> Result<(), BallotError> {
        if caller != &self.chairperson {
            return Err(BallotError::Unauthorized);
        }
        let target = self.voters.get(voter);
        if target.is_some_and(|v| v.voted) {
            return Err(BallotError::AlreadyVoted);
        }
        if target.is_some_and(|v| v.weight != 0) {
            return Err(BallotError::AlreadyHasRights);
        }
        Ok(())
    }

    fn check_delegate(
        &self,
        caller: &VoterAddress,
        to: &VoterAddress,
    ) -> Result<(u64, DelegationOutcome), BallotError> {
        let sender = self.voters.get(caller).ok_or(BallotError::NoRightToVote)?;
        if sender.weight == 0 {
            return Err(BallotError::NoRightToVote);
        }
        if sender.voted {
            return Err(BallotError::AlreadyVoted);
        }
        if to == caller {
            return Err(BallotError::SelfDelegation);
        }

        let delegate = resolve_delegate(&self.voters, caller, to)?;
        let outcome = match self.voters.get(&delegate) {
            Some(Voter {
                voted: true,
                vote: Some(proposal),
                ..
            }) => DelegationOutcome::Credited {
                proposal: *proposal,
            },
            _ => DelegationOutcome::Transferred { delegate },
        };
        Ok((sender.weight, outcome))
    }

    fn check_vote(&self, caller: &VoterAddress, proposal: usize) -> Result<u64, BallotError> {
        let sender = self.voters.get(caller).ok_or(BallotError::NoRightToVote)?;
        if sender.weight == 0 {
            return Err(BallotError::NoRightToVote);
        }
        if sender.voted {
            return Err(BallotError::AlreadyVoted);
        }
        if proposal >= self.proposals.len() {
            return Err(BallotError::InvalidProposal {
                index: proposal,
                count: self.proposals.len(),
            });
        }
        Ok(sender.weight)
    }

    // ── Queries ────────────────────────────────────────────────────────

    /// Index of the proposal with the most votes.
    ///
    /// Ties go to the lowest index. With no votes cast this is 0.
    pub fn winning_proposal(&self) -> usize {
        let mut winning = 0;
        let mut winning_count = 0;
        for (index, proposal) in self.proposals.iter().enumerate() {
            if proposal.vote_count > winning_count {
                winning_count = proposal.vote_count;
                winning = index;
            }
        }
        winning
    }

    /// Name of the proposal at [`Ballot::winning_proposal`].
    pub fn winner_name(&self) -> ProposalName {
        self.proposals[self.winning_proposal()].name
    }

    pub fn chairperson(&self) -> &VoterAddress {
        &self.chairperson
    }

    pub fn proposals(&self) -> &[Proposal] {
        &self.proposals
    }

    pub fn proposal(&self, index: usize) -> Option<&Proposal> {
        self.proposals.get(index)
    }

    pub fn proposal_count(&self) -> usize {
        self.proposals.len()
    }

    /// The registry entry for `address`; unknown addresses read as a default voter.
    pub fn voter(&self, address: &VoterAddress) -> Voter {
        self.voters.get(address).cloned().unwrap_or_default()
    }

    /// Number of addresses the registry has an entry for.
    pub fn voter_count(&self) -> usize {
        self.voters.len()
    }

    /// Sum of all proposal vote counts.
    pub fn total_votes(&self) -> u64 {
        self.proposals.iter().map(|p| p.vote_count).sum()
    }

    /// Check the ledger invariants.
    ///
    /// The tally equals the weight of every credited ballot, the chairperson
    /// keeps a non-zero weight, recorded votes point at real proposals, and no
    /// delegation chain loops.
    pub fn is_consistent(&self) -> bool {
        let credited: u64 = self
            .voters
            .values()
            .filter(|v| v.vote.is_some())
            .map(|v| v.weight)
            .sum();
        if credited != self.total_votes() {
            return false;
        }
        if self.voters.get(&self.chairperson).map_or(0, |v| v.weight) == 0 {
            return false;
        }
        if self
            .voters
            .values()
            .any(|v| v.vote.is_some_and(|p| p >= self.proposals.len()) || (v.vote.is_some() && !v.voted))
        {
            return false;
        }
        self.voters.iter().all(|(address, voter)| match &voter.delegate_to {
            Some(to) => resolve_delegate(&self.voters, address, to).is_ok(),
            None => true,
        })
    }
}
