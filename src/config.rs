//! Run configuration and credential loading.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_REFERENCE_LOCALE: &str = "en-us";
pub const DEFAULT_TARGET_LOCALE: &str = "fr-fr";
pub const DEFAULT_KEY_FILE: &str = "key.json";

/// Environment variable that overrides the key file when set.
pub const API_KEY_ENV_VAR: &str = "TRANSLATE_API_KEY";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory under which reference files are discovered.
    pub root: PathBuf,
    /// BCP-47-style identifier of the reference locale.
    pub reference_locale: String,
    /// BCP-47-style identifiers of the locales to keep in sync.
    pub target_locales: Vec<String>,
    /// Glob matched against root-relative paths.
    pub glob: String,
}

impl Config {
    /// The discovery pattern used when none is given explicitly: any
    /// `<reference>.yml` or `<reference>.yaml` at any depth.
    pub fn default_glob(reference_locale: &str) -> String {
        format!("**/{reference_locale}.{{yml,yaml}}")
    }
}

#[derive(Debug, Deserialize)]
struct KeyFile {
    key: String,
}

/// Read the translation API key: the environment variable wins, the JSON key
/// file (`{"key": "..."}`) is the fallback. A missing or malformed key file
/// is an unrecoverable setup failure.
pub fn load_api_key(key_file: &Path) -> Result<String> {
    if let Ok(key) = std::env::var(API_KEY_ENV_VAR) {
        if !key.trim().is_empty() {
            return Ok(key);
        }
    }

    let text = std::fs::read_to_string(key_file)
        .with_context(|| format!("failed to read key file {}", key_file.display()))?;
    let parsed: KeyFile = serde_json::from_str(&text).with_context(|| {
        format!(
            "key file {} must be JSON with a \"key\" field",
            key_file.display()
        )
    })?;
    if parsed.key.trim().is_empty() {
        bail!("key file {} holds an empty key", key_file.display());
    }
    Ok(parsed.key)
}
