//! Normalize every candidate file under a set of paths.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{BatchPosition, CleanupContext, DocumentKind, NormalizeOutcome, normalize_file};
use crate::error::{DocsError, fs as fs_error};
use crate::workspace::is_excluded;

/// Per-sweep tally.
#[derive(Debug, Default)]
pub struct SweepReport {
    pub rewritten: Vec<PathBuf>,
    pub would_rewrite: Vec<(PathBuf, String)>,
    pub unchanged: usize,
    pub skipped: usize,
    pub failures: Vec<(PathBuf, DocsError)>,
}

impl SweepReport {
    pub fn processed(&self) -> usize {
        self.rewritten.len()
            + self.would_rewrite.len()
            + self.unchanged
            + self.skipped
            + self.failures.len()
    }
}

/// Files found by [`collect_files`], plus the entries that could not be read.
#[derive(Debug, Default)]
pub struct CollectedFiles {
    pub files: Vec<PathBuf>,
    pub errors: Vec<(PathBuf, DocsError)>,
}

/// Expand `paths` into the sorted list of `.yml` / `.md` files to process.
///
/// Files named explicitly are kept whatever their extension; directories are
/// walked recursively, skipping directories whose name is in `exclude`.
/// Entries the walk cannot read are returned as errors.
pub fn collect_files(paths: &[PathBuf], exclude: &[String]) -> CollectedFiles {
    let mut collected = CollectedFiles::default();

    for path in paths {
        if !path.is_dir() {
            collected.files.push(path.clone());
            continue;
        }

        let mut found = Vec::new();
        for entry in WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| !is_excluded(entry, exclude))
        {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    let file = entry.into_path();
                    if DocumentKind::from_path(&file) != DocumentKind::Plain {
                        found.push(file);
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    let failed = err.path().map_or_else(|| path.clone(), Path::to_path_buf);
                    tracing::warn!(path = %failed.display(), error = %err, "cannot walk entry");
                    let error = fs_error::read_failed(failed.display().to_string(), err.to_string());
                    collected.errors.push((failed, error));
                }
            }
        }
        found.sort();
        collected.files.extend(found);
    }

    collected
}

/// Normalize each file in turn.
///
/// A failure is handed to `on_failure` and recorded, then the sweep moves on
/// to the next file. Files already rewritten stay rewritten.
pub fn normalize_all(
    files: &[PathBuf],
    ctx: &CleanupContext<'_>,
    mut on_failure: impl FnMut(&Path, &DocsError),
) -> SweepReport {
    let mut report = SweepReport::default();
    let total = files.len();

    for (index, path) in files.iter().enumerate() {
        match normalize_file(path, ctx, BatchPosition { index, total }) {
            Ok(NormalizeOutcome::Rewritten) => report.rewritten.push(path.clone()),
            Ok(NormalizeOutcome::WouldRewrite(diff)) => {
                report.would_rewrite.push((path.clone(), diff));
            }
            Ok(NormalizeOutcome::Unchanged) => report.unchanged += 1,
            Ok(NormalizeOutcome::Skipped) => report.skipped += 1,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "cleanup failed");
                on_failure(path, &err);
                report.failures.push((path.clone(), err));
            }
        }
    }

    report
}
