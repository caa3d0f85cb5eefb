//! Error types for branch construction and the repository contract.

use thiserror::Error;

/// Error raised synchronously when a record fails validation at the point
/// of construction. Never retried automatically.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "invalid branch name {name:?}: must be 2-100 characters of letters, \
         digits, spaces, hyphens or underscores"
    )]
    InvalidBranchName { name: String },

    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("message index {found} at position {position} breaks the contiguous 0..n-1 run")]
    NonContiguousIndex { position: usize, found: usize },
}

/// Error type for the `BranchStore` repository contract.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("branch not found: {0}")]
    BranchNotFound(String),

    #[error("corrupt branch record: {0}")]
    CorruptRecord(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
