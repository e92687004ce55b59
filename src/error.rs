//! Error kinds for the reconciliation and fill engine.
//!
//! These cover the recoverable, per-pair and per-leaf conditions. Setup-level
//! failures (bad credentials, invalid glob) use `anyhow` at the application
//! boundary instead and are the only ones that affect the exit status.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyncError {
    /// Reconciliation was invoked on a document whose root is not a mapping.
    /// Fatal for that file/locale pair only.
    #[error("document root must be a mapping")]
    InvalidRootShape,

    /// The translated text carries fewer `{}` markers than the source had
    /// placeholders. Recovered by keeping the provider text untouched.
    #[error("translated text has {found} placeholder markers, expected {expected}")]
    PlaceholderCountMismatch { expected: usize, found: usize },
}
