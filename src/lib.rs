//! Docs authoring
//!
//! Editor commands for Markdown/YAML documentation, usable as a library or
//! through the `docs-authoring` binary:
//! - [`metadata`]: collapse single-valued metadata arrays into scalars
//! - [`toc`]: insert entries into YAML table-of-contents files
//! - [`templates`]: list local authoring templates

pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod logging;
pub mod metadata;
pub mod progress;
pub mod telemetry;
pub mod templates;
pub mod toc;
pub mod ui;
pub mod workspace;
