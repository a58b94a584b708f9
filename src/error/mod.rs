//! Error types and handling for docs-authoring
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: File system errors
//! - [`toc`]: TOC insertion errors
//! - [`config`]: Configuration errors

pub mod config;
pub mod fs;
pub mod toc;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for docs-authoring operations
#[derive(Error, Diagnostic, Debug)]
pub enum DocsError {
    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(docs_authoring::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(docs_authoring::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(
        code(docs_authoring::fs::write_failed),
        help("The original file was left untouched")
    )]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(docs_authoring::fs::io_error))]
    IoError { message: String },

    // TOC errors
    #[error("No level-one heading found in {path}")]
    #[diagnostic(
        code(docs_authoring::toc::no_heading),
        help("Add a '# Title' line to the selected file")
    )]
    NoHeadingFound { path: String },

    #[error("Invalid TOC entry position (line {line}, column {column})")]
    #[diagnostic(
        code(docs_authoring::toc::invalid_position),
        help(
            "Place the cursor at the start of a line, or align it with the '- name:' key of an entry above"
        )
    )]
    InvalidInsertPosition { line: usize, column: usize },

    #[error("No active document")]
    #[diagnostic(code(docs_authoring::toc::no_active_editor))]
    NoActiveEditor,

    // Configuration errors
    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(docs_authoring::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(docs_authoring::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // Interactive prompt errors
    #[error("Prompt failed: {message}")]
    #[diagnostic(code(docs_authoring::ui::prompt_failed))]
    PromptFailed { message: String },

    // Cleanup sweep summary
    #[error("Cleanup failed for {failed} file(s)")]
    #[diagnostic(
        code(docs_authoring::cleanup::failed),
        help("Files that were already rewritten are not rolled back")
    )]
    CleanupFailed { failed: usize },
}

impl DocsError {
    /// Whether this error aborts the command without any user-visible output.
    pub fn is_silent(&self) -> bool {
        matches!(self, DocsError::NoActiveEditor)
    }
}

impl From<std::io::Error> for DocsError {
    fn from(err: std::io::Error) -> Self {
        DocsError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DocsError {
    fn from(err: serde_yaml::Error) -> Self {
        DocsError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for DocsError {
    fn from(err: inquire::InquireError) -> Self {
        DocsError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DocsError>;
