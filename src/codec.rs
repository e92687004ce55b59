//! YAML reading and writing of locale trees.
//!
//! Documents are UTF-8 YAML. Key order is kept as found; serialization never
//! wraps long lines, so translated sentences stay on one line. An empty or
//! null document loads as an empty branch.

use crate::tree::LocaleTree;
use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use serde_yaml::Value;
use std::path::Path;

/// Load and parse a locale document from disk.
pub fn load_tree(path: &Path) -> Result<LocaleTree> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_tree(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Parse a locale document from YAML text.
pub fn parse_tree(text: &str) -> Result<LocaleTree> {
    if text.trim().is_empty() {
        return Ok(LocaleTree::empty_branch());
    }
    let value: Value = serde_yaml::from_str(text).context("invalid YAML")?;
    tree_from_value(value)
}

fn tree_from_value(value: Value) -> Result<LocaleTree> {
    match value {
        Value::Mapping(mapping) => {
            let mut entries = IndexMap::new();
            for (key, value) in mapping {
                let Value::String(key) = key else {
                    bail!("mapping keys must be strings, got {key:?}");
                };
                entries.insert(key, tree_from_value(value)?);
            }
            Ok(LocaleTree::Branch(entries))
        }
        Value::String(text) => Ok(LocaleTree::Leaf(text)),
        // scalars like `count: 5` are leaves with their literal spelling
        Value::Number(number) => Ok(LocaleTree::Leaf(number.to_string())),
        Value::Bool(flag) => Ok(LocaleTree::Leaf(flag.to_string())),
        Value::Null => Ok(LocaleTree::empty_branch()),
        Value::Sequence(_) | Value::Tagged(_) => {
            bail!("unsupported YAML node, expected a mapping or a string")
        }
    }
}

/// Serialize a locale tree and write it to `path`, replacing any existing
/// file.
pub fn write_tree(path: &Path, tree: &LocaleTree) -> Result<()> {
    let text = serde_yaml::to_string(tree).context("failed to serialize document")?;
    std::fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
}
