//! branch_engine - Divergence analysis, diffing and merging for conversation branches
//!
//! A pure, synchronous computation layer over the `branch_core` records.
//! Callers load branch collections and message sequences into memory
//! (through a `branch_core::BranchStore`), then invoke:
//! - `compare` - common-ancestor scan, divergence counts, structured diffs
//! - `tree` - hierarchy views over a flat branch collection
//! - `merge` - conflict detection and merge authorization
//!
//! Nothing here holds mutable shared state, so concurrent calls need no
//! synchronization; serializing merge attempts against one target branch
//! is the caller's job.

pub mod compare;
pub mod merge;
pub mod tree;

// Re-export commonly used types
pub use compare::{
    build_diff, calculate_divergence, divergence_point, find_common_ancestor, BranchDiff,
};
pub use merge::{merge, MergeResult};
pub use tree::{build_tree, depth, descendants, BranchTree};
