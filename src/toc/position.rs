//! Where a TOC entry may be inserted.
//!
//! The cursor is valid at the very start of the document, at the start of
//! any line, or indented exactly under the `- name:` key of an indented entry
//! above it.

use crate::common::lines::indent_width;
use crate::error::{Result, toc as toc_error};

/// Zero-based cursor position; `column` counts characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub line: usize,
    pub column: usize,
}

impl Cursor {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Accepted insertion positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Line 0, column 0: root of the document.
    LineZero,
    /// Column 0 of a later line: top-level list item.
    ColumnZero,
    /// Aligned under the entry found on `sibling_line`.
    Indented { sibling_line: usize },
}

/// An indented `- name:` line (`^\s+-\sname:`).
fn is_list_item_name(text: &str) -> bool {
    let rest = text.trim_start();
    if rest.len() == text.len() {
        return false;
    }
    let mut chars = rest.chars();
    chars.next() == Some('-')
        && chars.next().is_some_and(char::is_whitespace)
        && chars.as_str().starts_with("name:")
}

/// Validate `cursor` against the document `lines` (terminators stripped).
pub fn check_for_previous_entry(lines: &[&str], cursor: Cursor) -> Result<InsertPosition> {
    let invalid = || toc_error::invalid_position(cursor.line, cursor.column);

    if cursor.line == 0 {
        return if cursor.column == 0 {
            Ok(InsertPosition::LineZero)
        } else {
            Err(invalid())
        };
    }

    if cursor.column == 0 {
        return Ok(InsertPosition::ColumnZero);
    }

    // Line 0 is never inspected. Misaligned entries are skipped.
    for index in (1..=cursor.line).rev() {
        let Some(text) = lines.get(index) else {
            continue;
        };
        if is_list_item_name(text) && indent_width(text) == cursor.column {
            return Ok(InsertPosition::Indented {
                sibling_line: index,
            });
        }
    }

    Err(invalid())
}
