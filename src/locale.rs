//! Locale identifier handling.
//!
//! Locale files are named after BCP-47-style tags (`en-us.yml`), but the
//! translation provider wants bare language codes (`en`). Only the primary
//! language subtag is extracted here; the rest of the tag is passed through
//! untouched for file naming.

use anyhow::{bail, Result};

/// Extract the primary language subtag from a BCP-47-style tag, lowercased.
///
/// Fails when the tag does not start with a plausible language subtag
/// (1 to 8 ASCII letters).
pub fn language_subtag(tag: &str) -> Result<String> {
    let primary = tag.split(['-', '_']).next().unwrap_or_default();
    if primary.is_empty()
        || primary.len() > 8
        || !primary.chars().all(|c| c.is_ascii_alphabetic())
    {
        bail!("'{tag}' is not a valid locale identifier");
    }
    Ok(primary.to_ascii_lowercase())
}
