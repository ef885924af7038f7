//! Fundamental types for the ballot ledger.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! the opaque voter identity and the fixed-length proposal name.

pub mod address;
pub mod error;
pub mod name;

pub use address::VoterAddress;
pub use error::TypesError;
pub use name::ProposalName;
