//! Keep per-locale YAML translation files in sync with a reference locale.
//!
//! The reference locale is ground truth for the key structure: target files
//! are pruned to its shape, and every leaf missing from a target is filled by
//! machine translation with `{placeholder}` segments preserved verbatim.

pub mod codec;
pub mod config;
pub mod discover;
pub mod error;
pub mod locale;
pub mod placeholder;
pub mod reconcile;
pub mod retry;
pub mod sync;
pub mod translate;
pub mod tree;
