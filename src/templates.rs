//! Local authoring templates
//!
//! Templates are Markdown files; each is listed under the name found in its
//! front matter, falling back to the file name.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use walkdir::WalkDir;

use crate::common::fs::read_text;
use crate::common::lines::{body, split_lines};
use crate::error::Result;
use crate::metadata::frontmatter;
use crate::workspace::skip_walk_error;

/// A listed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub label: String,
    pub path: PathBuf,
}

/// Parse the front matter of a template into a YAML value.
///
/// The `{@date}` placeholder is not valid YAML, so its first occurrence is
/// rewritten to `{date}` before parsing.
fn front_matter(content: &str) -> Option<Value> {
    let content = content.replacen("{@date}", "{date}", 1);
    let range = frontmatter::locate(&content)?;
    match serde_yaml::from_str::<Value>(&content[range]) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!(error = %err, "ignoring unparsable template front matter");
            None
        }
    }
}

fn template_name(content: &str, name_key: &str) -> Option<String> {
    let value = front_matter(content)?;
    match value.as_mapping()?.get(name_key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn is_template_file(path: &Path) -> bool {
    let is_markdown = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
    let is_readme = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.eq_ignore_ascii_case("readme.md"));
    is_markdown && !is_readme
}

/// List templates under `dir`, sorted case-insensitively by label.
///
/// When two templates share a label the one found last wins.
pub fn list_templates(dir: &Path, name_key: &str) -> Result<Vec<Template>> {
    let mut by_label: BTreeMap<String, Template> = BTreeMap::new();

    let mut paths: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(skip_walk_error)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|path| is_template_file(path))
        .collect();
    paths.sort();

    for path in paths {
        let content = read_text(&path)?;
        let label = template_name(&content, name_key).unwrap_or_else(|| {
            path.file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default()
        });
        by_label.insert(label.clone(), Template { label, path });
    }

    let mut templates: Vec<Template> = by_label.into_values().collect();
    templates.sort_by_key(|t| t.label.to_uppercase());
    Ok(templates)
}

/// First non-empty body line of a template, used as a short description.
pub fn summary(content: &str) -> Option<String> {
    let start = frontmatter::locate(content)
        .map(|range| {
            // Skip the closing delimiter line as well.
            let rest = &content[range.end..];
            range.end + split_lines(rest).first().map_or(0, |line| line.len())
        })
        .unwrap_or(0);

    split_lines(&content[start..])
        .into_iter()
        .map(|line| body(line).trim())
        .find(|text| !text.is_empty())
        .map(|text| text.trim_start_matches('#').trim().to_string())
}
