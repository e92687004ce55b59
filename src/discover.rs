//! Reference-file discovery.
//!
//! Walks the configured root and matches root-relative paths against a glob
//! (default: any `<reference-locale>.yml` or `.yaml` at any depth). Finding
//! nothing is a successful, empty result.

use anyhow::{Context, Result};
use globset::GlobBuilder;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Find every file under `root` whose root-relative path matches `pattern`.
/// Returned paths are relative to `root` and sorted for a stable processing
/// order.
pub fn find_reference_files(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .with_context(|| format!("invalid glob pattern '{pattern}'"))?
        .compile_matcher();

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable directory entry: {e}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if matcher.is_match(rel) {
            files.push(rel.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}
