//! Command implementations for the docs-authoring CLI

pub mod cleanup;
pub mod completions;
pub mod templates;
pub mod toc;
pub mod version;
