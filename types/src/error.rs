//! Error type for constructing the fundamental types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    #[error("invalid voter address: {0}")]
    InvalidAddress(String),

    #[error("proposal name is {len} bytes, at most {max} fit in a bytes32 slot")]
    NameTooLong { len: usize, max: usize },
}
