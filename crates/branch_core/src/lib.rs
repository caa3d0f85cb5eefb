//! branch_core - Core types and traits for conversation branching
//!
//! This crate provides the foundational types used across the branching crates:
//! - `branch` - Branch and BranchMessage records
//! - `error` - Validation and store error types
//! - `store` - BranchStore repository contract

pub mod branch;
pub mod error;
pub mod store;

// Re-export commonly used types
pub use branch::{
    check_message_order, Branch, BranchMessage, MessageMetadata, MessageRole, MAX_BRANCH_NAME_LEN,
    MIN_BRANCH_NAME_LEN,
};
pub use error::{StoreError, ValidationError};
pub use store::BranchStore;
