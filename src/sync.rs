//! The sync orchestrator.
//!
//! For every reference file and every target locale: load or initialize the
//! target tree, prune it to the reference shape, translate each missing leaf
//! in reference order, then write the file. Translation calls run strictly
//! one at a time and the write happens only after every fill attempt for the
//! pair has settled, so a half-translated file is never left racing its own
//! pending translations.
//!
//! Per-leaf and per-pair failures are reported where they occur and never
//! abort sibling leaves, locales, or reference files.

use crate::codec;
use crate::config::Config;
use crate::discover;
use crate::error::SyncError;
use crate::locale;
use crate::placeholder::PlaceholderToken;
use crate::reconcile::{missing_leaves, prune};
use crate::translate::Translator;
use crate::tree::LocaleTree;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Counters for one whole run, across all reference files and locales.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Target files serialized to disk.
    pub files_written: usize,
    /// Leaves filled with a provider translation.
    pub leaves_translated: usize,
    /// Leaves left unset because the provider call failed.
    pub leaves_failed: usize,
    /// (file, locale) pairs skipped whole, e.g. for a non-mapping root.
    pub pairs_skipped: usize,
}

/// Run a full sync pass over every reference file under the configured root.
///
/// Returns an error only for setup-level problems (invalid glob, invalid
/// reference locale). An empty discovery result is a successful no-op.
pub async fn run<T: Translator>(config: &Config, translator: &T) -> Result<SyncReport> {
    info!(
        "Looking for YAML files under {} with glob {}",
        config.root.display(),
        config.glob
    );

    let reference_files = discover::find_reference_files(&config.root, &config.glob)?;
    if reference_files.is_empty() {
        info!("No YAML files were found");
        return Ok(SyncReport::default());
    }
    info!("Found {} reference files", reference_files.len());

    let reference_language = locale::language_subtag(&config.reference_locale)?;
    let mut report = SyncReport::default();

    for rel_path in &reference_files {
        let reference_path = config.root.join(rel_path);
        let reference = match codec::load_tree(&reference_path) {
            Ok(tree) => tree,
            Err(e) => {
                error!("Skipping {}: {e:#}", reference_path.display());
                report.pairs_skipped += config.target_locales.len();
                continue;
            }
        };

        for target_locale in &config.target_locales {
            let target_language = locale::language_subtag(target_locale)?;
            let target_path = sibling_locale_path(&reference_path, target_locale);

            if let Err(e) = sync_pair(
                &reference,
                &target_path,
                &reference_language,
                &target_language,
                translator,
                &mut report,
            )
            .await
            {
                error!(
                    "Skipping {} for locale {}: {e:#}",
                    reference_path.display(),
                    target_locale
                );
                report.pairs_skipped += 1;
            }
        }
    }

    Ok(report)
}

/// Resolve the target file path for a locale: same directory and extension
/// as the reference file, named `<locale>.<ext>`.
fn sibling_locale_path(reference_path: &Path, target_locale: &str) -> PathBuf {
    let ext = reference_path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("yml");
    reference_path.with_file_name(format!("{target_locale}.{ext}"))
}

async fn sync_pair<T: Translator>(
    reference: &LocaleTree,
    target_path: &Path,
    from: &str,
    to: &str,
    translator: &T,
    report: &mut SyncReport,
) -> Result<()> {
    let mut target = if target_path.exists() {
        codec::load_tree(target_path)?
    } else {
        LocaleTree::empty_branch()
    };

    prune(reference, &mut target)?;

    for job in missing_leaves(reference, &target)? {
        let token = PlaceholderToken::tokenize(&job.value);
        match translator.translate(token.translation_safe(), from, to).await {
            Ok(translated) => {
                let filled = match token.rebuild(&translated) {
                    Ok(text) => text,
                    Err(e @ SyncError::PlaceholderCountMismatch { .. }) => {
                        warn!(
                            "{} at {}: keeping provider text untouched",
                            e,
                            job.dotted_path()
                        );
                        translated
                    }
                    Err(e) => return Err(e.into()),
                };
                target.set_leaf(&job.path, filled);
                report.leaves_translated += 1;
            }
            Err(e) => {
                error!(
                    "Failed to translate {:?} at {}: {e:#}",
                    job.value,
                    job.dotted_path()
                );
                report.leaves_failed += 1;
            }
        }
    }

    codec::write_tree(target_path, &target)?;
    report.files_written += 1;
    info!("Wrote {}", target_path.display());
    Ok(())
}
