//! Common-ancestor scan and divergence counting
//!
//! Both sequences must already be ordered by ascending `message_index`;
//! the scan is positional and trusts that contract.

use branch_core::BranchMessage;

/// Find the last position at which two message sequences still agree.
///
/// Scans from position 0 and advances while content AND role match, stopping
/// at the first mismatch or at the shorter sequence's end. Returns the last
/// matching index together with the message at that index, or `None` when
/// the sequences disagree from the very start.
///
/// Agreement is content+role equality, not lineage: two unrelated branches
/// that happen to open with identical text will be reported as sharing an
/// ancestor. Callers that need structural ancestry should use the parent
/// pointers via `crate::tree` instead.
pub fn find_common_ancestor<'a>(
    a: &'a [BranchMessage],
    b: &[BranchMessage],
) -> Option<(usize, &'a BranchMessage)> {
    let mut last_match = None;
    for (index, (ma, mb)) in a.iter().zip(b.iter()).enumerate() {
        if ma.content != mb.content || ma.role != mb.role {
            break;
        }
        last_match = Some((index, ma));
    }
    last_match
}

/// First index at which two sequences differ: one past the common ancestor,
/// or 0 when there is no common prefix.
pub fn divergence_point(common_ancestor_index: Option<usize>) -> usize {
    common_ancestor_index.map_or(0, |index| index + 1)
}

/// Total number of messages unique to either side beyond the common prefix.
///
/// Display-only measure of "how different are these branches"; it has no
/// effect on merge correctness. O(min(len)) per call, no caching.
pub fn calculate_divergence(a: &[BranchMessage], b: &[BranchMessage]) -> usize {
    let dp = divergence_point(find_common_ancestor(a, b).map(|(index, _)| index));
    (a.len() - dp) + (b.len() - dp)
}
