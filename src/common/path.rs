//! Cross-platform path utilities
//!
//! TOC links are always written with forward slashes, regardless of the
//! platform the workspace lives on.

use normpath::PathExt;
use std::path::{Component, Path, PathBuf};

/// Convert a path to a string with forward slashes.
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Normalize a path if it exists, otherwise return it unchanged.
pub fn normalize(path: &Path) -> PathBuf {
    match path.normalize() {
        Ok(norm) => norm.into_path_buf(),
        Err(_) => path.to_path_buf(),
    }
}

/// Relative path from `from` to `to`, treating `from` itself as a directory.
///
/// A file path passed as `from` therefore yields one extra leading `..`
/// segment; [`toc_href`] removes it.
pub fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from = normalize(from);
    let to = normalize(to);

    let from_components: Vec<Component<'_>> = from.components().collect();
    let to_components: Vec<Component<'_>> = to.components().collect();

    let common = from_components
        .iter()
        .zip(&to_components)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..from_components.len() {
        relative.push("..");
    }
    for component in &to_components[common..] {
        relative.push(component.as_os_str());
    }
    relative
}

/// Link target written into a TOC entry for `target`, as seen from the
/// navigation file `active_file`.
pub fn toc_href(active_file: &Path, target: &Path) -> String {
    let href = to_forward_slashes(&relative_path(active_file, target));
    match href.strip_prefix("../") {
        Some(stripped) => stripped.to_string(),
        None => href,
    }
}
