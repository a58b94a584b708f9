//! YAML snippets inserted into TOC navigation files.
//!
//! Continuation lines sit two spaces in from the `- ` marker, plus one space
//! for every column the cursor is indented by. The first line carries no
//! indentation of its own because it is inserted at the cursor.

/// Shape of a generated snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TocSnippet {
    /// `name` and `href`.
    Entry { name: String, href: String },
    /// `name` and `href` plus placeholder optional fields.
    EntryWithOptions { name: String, href: String },
    /// Empty parent node with one nested child.
    ParentNode,
}

impl TocSnippet {
    /// Render the snippet for a cursor at `column`.
    pub fn render(&self, column: usize) -> String {
        let pad = " ".repeat(column);
        match self {
            TocSnippet::Entry { name, href } => {
                format!("- name: {name}\n  {pad}href: {href}")
            }
            TocSnippet::EntryWithOptions { name, href } => format!(
                "- name: {name}\n  \
                 {pad}displayname: #optional string for searching TOC\n  \
                 {pad}href: {href}\n  \
                 {pad}uid: #optional string\n  \
                 {pad}expanded: #true or false, false is default"
            ),
            TocSnippet::ParentNode => {
                let child_pad = " ".repeat(column + 2);
                format!("- name:\n  {pad}items:\n  {pad}- name:\n  {child_pad}href:")
            }
        }
    }
}

/// Entry text for `name` linking to `href`.
pub fn build_entry(name: &str, href: &str, with_options: bool, column: usize) -> String {
    let snippet = if with_options {
        TocSnippet::EntryWithOptions {
            name: name.to_string(),
            href: href.to_string(),
        }
    } else {
        TocSnippet::Entry {
            name: name.to_string(),
            href: href.to_string(),
        }
    };
    snippet.render(column)
}

/// Parent/child skeleton text.
pub fn build_parent_node(column: usize) -> String {
    TocSnippet::ParentNode.render(column)
}
