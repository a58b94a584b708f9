//! Common file system operations with unified error handling

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, fs as fs_error};

/// Read a whole file as UTF-8 text.
pub fn read_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(fs_error::not_found(path.display().to_string()));
    }

    std::fs::read_to_string(path)
        .map_err(|e| fs_error::read_failed(path.display().to_string(), e.to_string()))
}

/// Replace the content of `path` atomically.
///
/// The content goes to a temporary file in the same directory which is then
/// persisted over the target, so readers never observe a partial write.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let write_failed = |reason: String| fs_error::write_failed(path.display().to_string(), reason);

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| write_failed(e.to_string()))?;
    temp.write_all(content.as_bytes())
        .map_err(|e| write_failed(e.to_string()))?;
    temp.flush().map_err(|e| write_failed(e.to_string()))?;

    // Keep the permissions of the file being replaced.
    if let Ok(metadata) = std::fs::metadata(path) {
        if let Err(err) = std::fs::set_permissions(temp.path(), metadata.permissions()) {
            tracing::debug!(path = %path.display(), error = %err, "could not copy permissions");
        }
    }

    temp.persist(path)
        .map_err(|e| write_failed(e.error.to_string()))?;

    Ok(())
}
