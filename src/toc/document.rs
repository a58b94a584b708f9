//! The navigation file being edited.

use std::path::{Path, PathBuf};

use super::position::Cursor;
use crate::common::fs::{read_text, write_atomic};
use crate::common::lines::body;
use crate::error::{DocsError, Result, toc as toc_error};

/// An opened text document with an insertion point.
#[derive(Debug, Clone)]
pub struct EditorDocument {
    path: PathBuf,
    text: String,
}

impl EditorDocument {
    /// Open the active document. No path means there is no active document.
    pub fn open(path: Option<&Path>) -> Result<Self> {
        let path = path.ok_or(DocsError::NoActiveEditor)?;
        let text = read_text(path)?;
        Ok(Self::from_text(path, text))
    }

    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Line contents without terminators. A trailing newline opens one more,
    /// empty, line.
    pub fn lines(&self) -> Vec<&str> {
        self.text.split('\n').map(body).collect()
    }

    /// Byte offset of `cursor`, if it lies inside the document.
    fn offset(&self, cursor: Cursor) -> Option<usize> {
        let mut line_start = 0;
        for (index, raw) in self.text.split('\n').enumerate() {
            if index == cursor.line {
                let line = body(raw);
                if cursor.column == line.chars().count() {
                    return Some(line_start + line.len());
                }
                return line
                    .char_indices()
                    .nth(cursor.column)
                    .map(|(byte, _)| line_start + byte);
            }
            line_start += raw.len() + 1;
        }
        None
    }

    /// Line ending of the document, taken from its first line.
    pub fn line_ending(&self) -> &'static str {
        match self.text.find('\n') {
            Some(end) if self.text[..end].ends_with('\r') => "\r\n",
            _ => "\n",
        }
    }

    /// Insert `snippet` at `cursor`, converting its `\n` line breaks to the
    /// document's line ending.
    pub fn insert(&mut self, cursor: Cursor, snippet: &str) -> Result<()> {
        let offset = self
            .offset(cursor)
            .ok_or_else(|| toc_error::invalid_position(cursor.line, cursor.column))?;
        let ending = self.line_ending();
        if ending == "\n" {
            self.text.insert_str(offset, snippet);
        } else {
            self.text.insert_str(offset, &snippet.replace('\n', ending));
        }
        Ok(())
    }

    /// Write the document back to its path.
    pub fn save(&self) -> Result<()> {
        write_atomic(&self.path, &self.text)
    }
}
