//! Diff builder - Structured added/removed diff between two branches

use branch_core::BranchMessage;
use serde::{Deserialize, Serialize};

use super::ancestor::{divergence_point, find_common_ancestor};

/// Structured diff between two branches, for display or pre-merge review.
///
/// Direction matters: the diff describes transforming the `from` sequence
/// into the `to` sequence. Reversing the argument order of [`build_diff`]
/// swaps `added_messages` and `removed_messages`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BranchDiff {
    pub from_branch_id: String,
    pub to_branch_id: String,

    /// Last index at which both sequences agree (None if they never do).
    pub common_ancestor_index: Option<usize>,

    /// First index at which the sequences differ.
    pub divergence_point: usize,

    /// Tail of `to` beyond the divergence point.
    pub added_messages: Vec<BranchMessage>,

    /// Tail of `from` beyond the divergence point.
    pub removed_messages: Vec<BranchMessage>,
}

/// Build the diff that transforms `from` into `to`.
///
/// Pure function over its inputs; both sequences must be ordered by
/// ascending `message_index`.
pub fn build_diff(
    from: &[BranchMessage],
    to: &[BranchMessage],
    from_branch_id: &str,
    to_branch_id: &str,
) -> BranchDiff {
    let common_ancestor_index = find_common_ancestor(from, to).map(|(index, _)| index);
    let dp = divergence_point(common_ancestor_index);

    BranchDiff {
        from_branch_id: from_branch_id.to_string(),
        to_branch_id: to_branch_id.to_string(),
        common_ancestor_index,
        divergence_point: dp,
        added_messages: to.get(dp..).unwrap_or_default().to_vec(),
        removed_messages: from.get(dp..).unwrap_or_default().to_vec(),
    }
}
