//! Workspace root resolution and file discovery

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::error::{DocsError, Result, fs as fs_error};
use crate::ui::PickItem;

/// Resolve the workspace root from the CLI argument or the current directory.
pub fn resolve_root(workspace: Option<PathBuf>) -> Result<PathBuf> {
    let path = match workspace {
        Some(path) => path,
        None => std::env::current_dir().map_err(|e| DocsError::IoError {
            message: format!("Failed to get current directory: {e}"),
        })?,
    };

    if !path.is_dir() {
        return Err(fs_error::not_found(path.display().to_string()));
    }

    dunce::canonicalize(&path).map_err(|e| fs_error::io_error(format!("{}: {e}", path.display())))
}

/// Whether a walked directory should be pruned.
pub(crate) fn is_excluded(entry: &DirEntry, exclude: &[String]) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| exclude.iter().any(|e| e == name))
}

/// Keep a walked entry, logging and skipping the ones that could not be read.
pub(crate) fn skip_walk_error(entry: walkdir::Result<DirEntry>) -> Option<DirEntry> {
    match entry {
        Ok(entry) => Some(entry),
        Err(err) => {
            tracing::warn!(
                path = %err.path().map(|p| p.display().to_string()).unwrap_or_default(),
                error = %err,
                "skipping unreadable entry"
            );
            None
        }
    }
}

/// Markdown files under `root` as picker items, sorted by display name.
pub fn markdown_pick_items(root: &Path, exclude: &[String]) -> Vec<PickItem> {
    let mut items: Vec<PickItem> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry, exclude))
        .filter_map(skip_walk_error)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
        })
        .map(|entry| PickItem::from_path(entry.path()))
        .collect();

    items.sort();
    items
}
