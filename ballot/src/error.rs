use ballot_types::TypesError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BallotError {
    #[error("Only chairperson can give right to vote.")]
    Unauthorized,

    #[error("The voter already voted.")]
    AlreadyVoted,

    #[error("The voter already has the right to vote.")]
    AlreadyHasRights,

    #[error("Has no right to vote")]
    NoRightToVote,

    #[error("Self-delegation is disallowed.")]
    SelfDelegation,

    #[error("Found loop in delegation.")]
    DelegationCycle,

    #[error("proposal index {index} out of range ({count} proposals)")]
    InvalidProposal { index: usize, count: usize },

    #[error("a ballot needs at least one proposal")]
    NoProposals,

    #[error("invalid proposal name: {0}")]
    InvalidName(#[from] TypesError),
}
