//! Single-election voting ledger.
//!
//! A fixed set of proposals is registered when the ballot is created. The
//! chairperson grants voting rights; rights-holders either vote directly or
//! delegate their weight to another voter, transitively. The leading proposal
//! can be queried at any time.
//!
//! Every mutating operation validates before it writes, so a rejected call
//! leaves the ledger exactly as it was.

pub mod ballot;
pub mod delegation;
pub mod error;
pub mod proposal;
pub mod shared;
pub mod snapshot;
pub mod voter;

pub use ballot::Ballot;
pub use delegation::resolve_delegate;
pub use error::BallotError;
pub use proposal::Proposal;
pub use shared::SharedBallot;
pub use snapshot::{BallotSnapshot, ProposalTally};
pub use voter::Voter;
