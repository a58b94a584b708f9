//! TOC insertion errors

use super::DocsError;

/// Creates a no heading found error
pub fn no_heading(path: impl Into<String>) -> DocsError {
    DocsError::NoHeadingFound { path: path.into() }
}

/// Creates an invalid insert position error
pub fn invalid_position(line: usize, column: usize) -> DocsError {
    DocsError::InvalidInsertPosition { line, column }
}
