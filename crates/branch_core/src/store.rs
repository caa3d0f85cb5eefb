//! BranchStore - Repository contract for durable branch storage
//!
//! The core never fetches from storage itself; callers load branch lists
//! and message sequences up front and hand them to the engine. This trait
//! is the narrow contract a durable store must satisfy. No implementation
//! ships with this crate.

use crate::branch::{Branch, BranchMessage};
use crate::error::StoreError;

/// Durable storage and lookup of branches and messages by conversation.
#[async_trait::async_trait]
pub trait BranchStore: Send + Sync {
    /// All branches belonging to a conversation.
    async fn list_branches(&self, conversation_id: &str) -> Result<Vec<Branch>, StoreError>;

    /// Messages of one branch, ordered by ascending `message_index`.
    async fn load_messages(&self, branch_id: &str) -> Result<Vec<BranchMessage>, StoreError>;

    /// Persist a new or updated branch record.
    async fn save_branch(&self, branch: &Branch) -> Result<(), StoreError>;

    /// Persist one appended message.
    async fn append_message(&self, message: &BranchMessage) -> Result<(), StoreError>;

    /// Persist a merge outcome: the freshly allocated merged-branch id on
    /// success, or the conflicting indices on rejection.
    async fn record_merge(
        &self,
        conversation_id: &str,
        source_branch_id: &str,
        target_branch_id: &str,
        merged_branch_id: Option<&str>,
        conflict_indices: &[usize],
    ) -> Result<(), StoreError>;
}
