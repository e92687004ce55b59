//! The locale document data model.
//!
//! A document is a recursively nested tree where every node is either a
//! mapping from string keys to further nodes (a branch) or a translatable
//! string (a leaf). The branch/leaf distinction is decided once, when the
//! tree is built, rather than re-inspected at every traversal step.
//!
//! Key order is insertion order. It is irrelevant for comparison (two
//! branches with the same entries in different orders are equal) but is
//! preserved on serialization so written files stay readable.

use indexmap::IndexMap;
use serde::Serialize;

/// A node in a locale document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocaleTree {
    /// Nested mapping holding further keys.
    Branch(IndexMap<String, LocaleTree>),
    /// A translatable string at the end of a key path.
    Leaf(String),
}

impl LocaleTree {
    /// A branch with no entries, the starting point for a target locale that
    /// has no file on disk yet.
    pub fn empty_branch() -> Self {
        LocaleTree::Branch(IndexMap::new())
    }

    pub fn is_branch(&self) -> bool {
        matches!(self, LocaleTree::Branch(_))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, LocaleTree::Leaf(_))
    }

    pub fn as_branch(&self) -> Option<&IndexMap<String, LocaleTree>> {
        match self {
            LocaleTree::Branch(map) => Some(map),
            LocaleTree::Leaf(_) => None,
        }
    }

    pub fn as_branch_mut(&mut self) -> Option<&mut IndexMap<String, LocaleTree>> {
        match self {
            LocaleTree::Branch(map) => Some(map),
            LocaleTree::Leaf(_) => None,
        }
    }

    /// Look up the node at `path`, if every step of the path exists.
    pub fn get(&self, path: &[String]) -> Option<&LocaleTree> {
        let mut node = self;
        for key in path {
            node = node.as_branch()?.get(key)?;
        }
        Some(node)
    }

    /// Insert `value` as a leaf at `path`, creating intermediate branches as
    /// needed. A non-branch node standing where the path needs a branch is
    /// replaced, which is how a pruned kind mismatch gets regenerated with
    /// the correct shape.
    pub fn set_leaf(&mut self, path: &[String], value: String) {
        let Some((last, parents)) = path.split_last() else {
            return;
        };
        let mut map = ensure_branch(self);
        for key in parents {
            let child = map
                .entry(key.clone())
                .or_insert_with(LocaleTree::empty_branch);
            map = ensure_branch(child);
        }
        map.insert(last.clone(), LocaleTree::Leaf(value));
    }
}

fn ensure_branch(node: &mut LocaleTree) -> &mut IndexMap<String, LocaleTree> {
    if node.is_leaf() {
        *node = LocaleTree::empty_branch();
    }
    match node {
        LocaleTree::Branch(map) => map,
        LocaleTree::Leaf(_) => unreachable!("node was just normalized to a branch"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    fn leaf(value: &str) -> LocaleTree {
        LocaleTree::Leaf(value.to_string())
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_get_root() {
        let tree = leaf("hello");
        assert_eq!(tree.get(&[]), Some(&leaf("hello")));
    }

    #[test]
    fn test_get_nested_leaf() {
        let mut tree = LocaleTree::empty_branch();
        tree.set_leaf(&path(&["a", "b", "c"]), "deep".to_string());

        assert_eq!(tree.get(&path(&["a", "b", "c"])), Some(&leaf("deep")));
        assert!(tree.get(&path(&["a", "b"])).unwrap().is_branch());
    }

    #[test]
    fn test_get_missing_path() {
        let mut tree = LocaleTree::empty_branch();
        tree.set_leaf(&path(&["a"]), "x".to_string());

        assert_eq!(tree.get(&path(&["b"])), None);
        assert_eq!(tree.get(&path(&["a", "b"])), None);
    }

    // ==================== Insertion Tests ====================

    #[test]
    fn test_set_leaf_creates_intermediate_branches() {
        let mut tree = LocaleTree::empty_branch();
        tree.set_leaf(&path(&["menu", "file", "open"]), "Open".to_string());

        assert_eq!(tree.get(&path(&["menu", "file", "open"])), Some(&leaf("Open")));
    }

    #[test]
    fn test_set_leaf_replaces_leaf_on_the_way() {
        let mut tree = LocaleTree::empty_branch();
        tree.set_leaf(&path(&["a"]), "flat".to_string());
        tree.set_leaf(&path(&["a", "b"]), "nested".to_string());

        assert_eq!(tree.get(&path(&["a", "b"])), Some(&leaf("nested")));
    }

    #[test]
    fn test_set_leaf_overwrites_existing_value() {
        let mut tree = LocaleTree::empty_branch();
        tree.set_leaf(&path(&["a"]), "old".to_string());
        tree.set_leaf(&path(&["a"]), "new".to_string());

        assert_eq!(tree.get(&path(&["a"])), Some(&leaf("new")));
    }

    #[test]
    fn test_set_leaf_empty_path_is_noop() {
        let mut tree = LocaleTree::empty_branch();
        tree.set_leaf(&[], "ignored".to_string());

        assert_eq!(tree, LocaleTree::empty_branch());
    }

    // ==================== Order and Equality Tests ====================

    #[test]
    fn test_insertion_order_is_kept() {
        let mut tree = LocaleTree::empty_branch();
        tree.set_leaf(&path(&["zebra"]), "z".to_string());
        tree.set_leaf(&path(&["apple"]), "a".to_string());
        tree.set_leaf(&path(&["mango"]), "m".to_string());

        let keys: Vec<&String> = tree.as_branch().unwrap().keys().collect();
        assert_eq!(keys, ["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_equality_ignores_key_order() {
        let mut first = LocaleTree::empty_branch();
        first.set_leaf(&path(&["a"]), "1".to_string());
        first.set_leaf(&path(&["b"]), "2".to_string());

        let mut second = LocaleTree::empty_branch();
        second.set_leaf(&path(&["b"]), "2".to_string());
        second.set_leaf(&path(&["a"]), "1".to_string());

        assert_eq!(first, second);
    }
}
