//! Branch module - Branch and BranchMessage records
//!
//! Defines the versioned conversation timeline entities and their invariants.

mod message;
mod record;

pub use message::{check_message_order, BranchMessage, MessageMetadata, MessageRole};
pub use record::{Branch, MAX_BRANCH_NAME_LEN, MIN_BRANCH_NAME_LEN};
