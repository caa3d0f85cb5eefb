//! Compare module - Ancestor detection, divergence counting and diffs
//!
//! Positional comparison of two ordered message sequences.

mod ancestor;
mod diff;

pub use ancestor::{calculate_divergence, divergence_point, find_common_ancestor};
pub use diff::{build_diff, BranchDiff};
