//! Level-one headings of a Markdown file.

use std::path::Path;

use crate::common::fs::read_text;
use crate::common::lines::body;
use crate::error::{Result, toc as toc_error};

/// Text of every `# ` heading, in document order.
pub fn extract_headings(content: &str) -> Vec<String> {
    content
        .split('\n')
        .filter_map(|line| body(line).strip_prefix("# "))
        .map(str::to_string)
        .collect()
}

/// First level-one heading of the file at `path`.
pub fn first_heading(path: &Path) -> Result<String> {
    let content = read_text(path)?;
    extract_headings(&content)
        .into_iter()
        .next()
        .ok_or_else(|| toc_error::no_heading(path.display().to_string()))
}
