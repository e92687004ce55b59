//! Structural reconciliation of a target tree against the reference tree.
//!
//! The reference is ground truth for shape. Reconciliation is split into two
//! single-purpose traversals: [`prune`] removes what does not belong to the
//! target, [`missing_leaves`] lists what the fill step must add. Keeping them
//! separate makes the order (prune before translate) deterministic and
//! guarantees translation is only requested for genuinely missing leaves,
//! never to overwrite a stale-but-present value.

use crate::error::SyncError;
use crate::tree::LocaleTree;
use indexmap::IndexMap;

/// A translation job: a reference leaf with no counterpart in the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingLeaf {
    /// Key path from the document root.
    pub path: Vec<String>,
    /// The reference-locale text to translate.
    pub value: String,
}

impl MissingLeaf {
    /// Dotted rendering of the key path, for log messages.
    pub fn dotted_path(&self) -> String {
        self.path.join(".")
    }
}

/// Remove from `target`, in place, every key that is stale (absent from the
/// reference) or kind-mismatched (branch on one side, leaf on the other).
/// Matching branches are pruned recursively; matching leaves are kept as-is.
/// Keys the target is missing are not added here.
///
/// Both roots must be branches; a leaf root fails with
/// [`SyncError::InvalidRootShape`].
pub fn prune(reference: &LocaleTree, target: &mut LocaleTree) -> Result<(), SyncError> {
    match (reference, target) {
        (LocaleTree::Branch(reference), LocaleTree::Branch(target)) => {
            prune_branch(reference, target);
            Ok(())
        }
        _ => Err(SyncError::InvalidRootShape),
    }
}

fn prune_branch(
    reference: &IndexMap<String, LocaleTree>,
    target: &mut IndexMap<String, LocaleTree>,
) {
    target.retain(|key, node| match reference.get(key) {
        Some(reference_node) => reference_node.is_branch() == node.is_branch(),
        None => false,
    });

    for (key, node) in target.iter_mut() {
        if let (Some(LocaleTree::Branch(reference_child)), LocaleTree::Branch(child)) =
            (reference.get(key), node)
        {
            prune_branch(reference_child, child);
        }
    }
}

/// Walk the reference tree and list every leaf the target does not hold, in
/// reference iteration order. A branch absent from the target is treated as
/// empty and recursed into. The list is re-derived from current tree state on
/// every call.
///
/// Both roots must be branches, as for [`prune`].
pub fn missing_leaves(
    reference: &LocaleTree,
    target: &LocaleTree,
) -> Result<Vec<MissingLeaf>, SyncError> {
    match (reference, target) {
        (LocaleTree::Branch(reference), LocaleTree::Branch(target)) => {
            let mut jobs = Vec::new();
            collect_missing(reference, Some(target), &mut Vec::new(), &mut jobs);
            Ok(jobs)
        }
        _ => Err(SyncError::InvalidRootShape),
    }
}

fn collect_missing(
    reference: &IndexMap<String, LocaleTree>,
    target: Option<&IndexMap<String, LocaleTree>>,
    prefix: &mut Vec<String>,
    jobs: &mut Vec<MissingLeaf>,
) {
    for (key, reference_node) in reference {
        let target_node = target.and_then(|map| map.get(key));
        match reference_node {
            LocaleTree::Branch(reference_child) => {
                let target_child = match target_node {
                    Some(LocaleTree::Branch(map)) => Some(map),
                    _ => None,
                };
                prefix.push(key.clone());
                collect_missing(reference_child, target_child, prefix, jobs);
                prefix.pop();
            }
            LocaleTree::Leaf(value) => {
                if !matches!(target_node, Some(LocaleTree::Leaf(_))) {
                    let mut path = prefix.clone();
                    path.push(key.clone());
                    jobs.push(MissingLeaf {
                        path,
                        value: value.clone(),
                    });
                }
            }
        }
    }
}
