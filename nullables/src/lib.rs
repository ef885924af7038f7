//! Nullable infrastructure for deterministic testing.
//!
//! Tests never generate identities at random. They draw them from a fixed,
//! ordered account list, the same one a local development chain hands out, so
//! "account 0 deploys, account 1 votes" reads the same everywhere.

pub mod accounts;

pub use accounts::NullAccounts;
