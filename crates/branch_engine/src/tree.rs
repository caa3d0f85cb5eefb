//! Branch tree builder - Hierarchy views over a flat branch collection
//!
//! Reconstructs parent/child relationships from `parent_branch_id` links.
//! A conversation's branches form a forest; dangling parent references are
//! tolerated (the affected branch is treated as reachable only by id).

use std::collections::{HashMap, VecDeque};

use branch_core::Branch;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Parent/child view over a flat collection of branches.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct BranchTree {
    /// Branches with no parent.
    pub roots: Vec<Branch>,

    /// Direct children keyed by their parent's branch id.
    pub children_by_parent: HashMap<String, Vec<Branch>>,
}

/// Partition branches into roots and a children-by-parent map. Single O(n)
/// pass; child order within a parent follows input order.
pub fn build_tree(branches: &[Branch]) -> BranchTree {
    let mut tree = BranchTree::default();
    for branch in branches {
        match &branch.parent_branch_id {
            Some(parent_id) => tree
                .children_by_parent
                .entry(parent_id.clone())
                .or_default()
                .push(branch.clone()),
            None => tree.roots.push(branch.clone()),
        }
    }
    tree
}

/// Nesting depth of a branch: 1 for a root, counting hops up the
/// `parent_branch_id` chain.
///
/// Terminates on a dangling parent reference (returns the depth accumulated
/// so far) and is bounded by the collection size, so a corrupt cycle cannot
/// loop forever.
pub fn depth(branch: &Branch, all_branches: &[Branch]) -> usize {
    let mut hops = 1;
    let mut current = branch;

    while let Some(parent_id) = &current.parent_branch_id {
        match all_branches.iter().find(|b| b.id == *parent_id) {
            Some(parent) => {
                hops += 1;
                current = parent;
                if hops > all_branches.len() {
                    warn!(branch_id = %branch.id, "parent chain exceeds branch count, assuming a cycle");
                    break;
                }
            }
            None => {
                warn!(branch_id = %current.id, parent_id = %parent_id, "dangling parent reference");
                break;
            }
        }
    }
    hops
}

/// All transitive children of a branch, breadth-first. Never includes the
/// starting branch itself; order within one level follows input order.
pub fn descendants(branch: &Branch, all_branches: &[Branch]) -> Vec<Branch> {
    let tree = build_tree(all_branches);
    let mut found = Vec::new();
    let mut queue = VecDeque::from([branch.id.clone()]);

    while let Some(id) = queue.pop_front() {
        if let Some(children) = tree.children_by_parent.get(&id) {
            for child in children {
                queue.push_back(child.id.clone());
                found.push(child.clone());
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn branch(name: &str, parent: Option<&Branch>) -> Branch {
        Branch::new(
            "conv-1",
            name,
            "",
            None,
            parent.map(|p| p.id.clone()),
        )
        .unwrap()
    }

    fn chain() -> Vec<Branch> {
        let root = branch("root", None);
        let b1 = branch("b1", Some(&root));
        let b2 = branch("b2", Some(&b1));
        let b3 = branch("b3", Some(&b2));
        vec![root, b1, b2, b3]
    }

    #[test]
    fn build_tree_partitions_roots_and_children() {
        let root = branch("root", None);
        let child_a = branch("child-a", Some(&root));
        let child_b = branch("child-b", Some(&root));
        let other_root = branch("other", None);
        let all = vec![root.clone(), child_a, child_b, other_root];

        let tree = build_tree(&all);
        assert_eq!(tree.roots.len(), 2);
        assert_eq!(tree.children_by_parent[&root.id].len(), 2);
    }

    #[test]
    fn depth_counts_hops_from_root() {
        let all = chain();
        assert_eq!(depth(&all[0], &all), 1);
        assert_eq!(depth(&all[1], &all), 2);
        assert_eq!(depth(&all[3], &all), 4);
    }

    #[test]
    fn depth_stops_at_dangling_parent() {
        let mut orphan = branch("orphan", None);
        orphan.parent_branch_id = Some("no-such-branch".to_string());
        let all = vec![orphan.clone()];
        assert_eq!(depth(&orphan, &all), 1);
    }

    #[test]
    fn depth_terminates_on_a_cycle() {
        let mut a = branch("cycle-a", None);
        let mut b = branch("cycle-b", None);
        a.parent_branch_id = Some(b.id.clone());
        b.parent_branch_id = Some(a.id.clone());
        let all = vec![a.clone(), b];
        // Exact depth is meaningless for corrupt data; it only has to return.
        assert!(depth(&a, &all) <= all.len() + 1);
    }

    #[test]
    fn descendants_returns_all_transitive_children() {
        let all = chain();
        let names: HashSet<String> = descendants(&all[0], &all)
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(
            names,
            HashSet::from(["b1".to_string(), "b2".to_string(), "b3".to_string()])
        );
    }

    #[test]
    fn descendants_excludes_self_and_siblings() {
        let all = chain();
        let of_b2: Vec<String> = descendants(&all[2], &all)
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(of_b2, vec!["b3".to_string()]);
        assert!(descendants(&all[3], &all).is_empty());
    }
}
