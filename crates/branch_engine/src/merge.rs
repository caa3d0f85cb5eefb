//! Merge engine - Conflict detection and merge authorization
//!
//! Merging is a validation step, not a text-merge algorithm: the engine
//! scans for conflicts and, when clean, allocates an id for the merged
//! branch. It never constructs the merged message sequence and never
//! mutates storage; materialization is the caller's policy.

use branch_core::{BranchMessage, ValidationError};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::compare::build_diff;

/// Outcome of a merge attempt. Conflicts are data, not errors, so UI layers
/// can present them without exception handling.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MergeResult {
    pub success: bool,

    /// Freshly allocated id for the merged branch (set only on success).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merged_branch_id: Option<String>,

    pub conflict_count: usize,

    /// Message positions where the two branches assign different roles.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conflict_indices: Vec<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MergeResult {
    fn merged() -> Self {
        Self {
            success: true,
            merged_branch_id: Some(Uuid::new_v4().to_string()),
            conflict_count: 0,
            conflict_indices: Vec::new(),
            error: None,
        }
    }

    fn conflict(conflict_indices: Vec<usize>) -> Self {
        let count = conflict_indices.len();
        Self {
            success: false,
            merged_branch_id: None,
            conflict_count: count,
            conflict_indices,
            error: Some(format!(
                "Merge conflict: {count} conflicting messages found"
            )),
        }
    }
}

/// Merge the source branch into the target branch.
///
/// Scans every overlapping position beyond the divergence point; a role
/// mismatch there is a conflict. Content differences alone are NOT — two
/// same-role messages with different text at one slot count as compatible
/// rewrites. Any conflict rejects the merge outright; no partial merge is
/// ever applied. An empty overlap (including two empty sequences) merges
/// successfully.
pub fn merge(
    source_messages: &[BranchMessage],
    target_messages: &[BranchMessage],
    source_branch_id: &str,
    target_branch_id: &str,
) -> Result<MergeResult, ValidationError> {
    if source_branch_id.is_empty() {
        return Err(ValidationError::EmptyField {
            field: "source branch id",
        });
    }
    if target_branch_id.is_empty() {
        return Err(ValidationError::EmptyField {
            field: "target branch id",
        });
    }

    // Diff in the target -> source direction: what the source would add.
    let diff = build_diff(
        target_messages,
        source_messages,
        target_branch_id,
        source_branch_id,
    );

    let overlap = source_messages.len().min(target_messages.len());
    let conflict_indices: Vec<usize> = (diff.divergence_point..overlap)
        .filter(|&i| source_messages[i].role != target_messages[i].role)
        .collect();

    if !conflict_indices.is_empty() {
        debug!(
            source = %source_branch_id,
            target = %target_branch_id,
            conflicts = conflict_indices.len(),
            "merge rejected"
        );
        return Ok(MergeResult::conflict(conflict_indices));
    }

    let result = MergeResult::merged();
    debug!(
        source = %source_branch_id,
        target = %target_branch_id,
        merged_branch_id = result.merged_branch_id.as_deref().unwrap_or_default(),
        "merge authorized"
    );
    Ok(result)
}
