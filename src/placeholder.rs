//! Placeholder-safe tokenization of leaf strings.
//!
//! Leaf values may embed brace-delimited placeholders ("Hello, {name}!").
//! Sending those to a translation provider verbatim risks the placeholder
//! names being translated or reworded. A [`PlaceholderToken`] collapses each
//! placeholder to a bare `{}` position marker before translation and
//! reinserts the original placeholder text, in order, afterwards.

use crate::error::SyncError;
use tracing::warn;

/// One leaf string split into a translation-safe form plus the ordered list
/// of raw placeholder substrings (braces included). Built per translation
/// attempt and discarded after use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderToken {
    source: String,
    translation_safe: String,
    placeholders: Vec<String>,
}

impl PlaceholderToken {
    /// Scan `source` with a brace-nesting counter. Text outside placeholders
    /// goes to the translation-safe string; each outermost `{...}` run is
    /// collected whole (nested braces stay inside one placeholder) and leaves
    /// an empty `{}` pair behind as a position marker.
    ///
    /// An unterminated `{` swallows the rest of the string: the buffered text
    /// reaches neither the safe string nor the placeholder list. A stray `}`
    /// drives the counter negative and suppresses output until a later `{`
    /// rebalances it. Both are long-standing quirks of this scanner that
    /// callers rely on being stable; the first is reported as a warning.
    pub fn tokenize(source: &str) -> Self {
        let mut placeholders = Vec::new();
        let mut translation_safe = String::with_capacity(source.len());
        let mut current = String::new();
        let mut nesting: i32 = 0;

        for ch in source.chars() {
            if nesting == 0 {
                translation_safe.push(ch);
            }
            if ch == '{' {
                nesting += 1;
            }
            if nesting > 0 {
                current.push(ch);
            }
            if ch == '}' {
                nesting -= 1;
                if nesting == 0 {
                    placeholders.push(std::mem::take(&mut current));
                    translation_safe.push(ch);
                }
            }
        }

        if !current.is_empty() {
            warn!(
                "Dropping unterminated placeholder {:?} while tokenizing {:?}",
                current, source
            );
        }

        Self {
            source: source.to_string(),
            translation_safe,
            placeholders,
        }
    }

    /// The original leaf string.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The string to hand to the translation provider, placeholders collapsed
    /// to `{}` markers.
    pub fn translation_safe(&self) -> &str {
        &self.translation_safe
    }

    /// The raw placeholder substrings in the order they appeared.
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Fill each `{}` marker in `translated`, left to right, with the
    /// corresponding placeholder (positional, not by name).
    ///
    /// Markers beyond the placeholder count are left verbatim. Fails with
    /// [`SyncError::PlaceholderCountMismatch`] when the provider dropped or
    /// reworded markers, leaving fewer `{}` pairs than there are
    /// placeholders; the caller decides how to degrade.
    pub fn rebuild(&self, translated: &str) -> Result<String, SyncError> {
        let mut out = String::with_capacity(translated.len() + self.source.len());
        let mut rest = translated;
        let mut filled = 0;

        while let Some(idx) = rest.find("{}") {
            out.push_str(&rest[..idx]);
            match self.placeholders.get(filled) {
                Some(placeholder) => {
                    out.push_str(placeholder);
                    filled += 1;
                }
                None => out.push_str("{}"),
            }
            rest = &rest[idx + 2..];
        }
        out.push_str(rest);

        if filled < self.placeholders.len() {
            return Err(SyncError::PlaceholderCountMismatch {
                expected: self.placeholders.len(),
                found: filled,
            });
        }
        Ok(out)
    }
}
