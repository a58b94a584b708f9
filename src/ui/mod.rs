//! User interaction layer
//!
//! Commands talk to the user only through the [`Prompter`] trait:
//! - a filterable selection list
//! - a text input pre-filled with a default value
//! - error and information messages
//!
//! [`terminal::TerminalPrompter`] implements it with `inquire`; tests use
//! `scripted::ScriptedPrompter`.

#[cfg(test)]
pub mod scripted;
pub mod terminal;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// One selectable entry: a file name and the directory holding it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PickItem {
    pub label: String,
    pub description: String,
}

impl PickItem {
    pub fn from_path(path: &Path) -> Self {
        Self {
            label: path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_default(),
            description: path
                .parent()
                .map(|dir| dir.display().to_string())
                .unwrap_or_default(),
        }
    }

    /// Full path of the file this item stands for.
    pub fn path(&self) -> PathBuf {
        Path::new(&self.description).join(&self.label)
    }
}

impl fmt::Display for PickItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "{}", self.label)
        } else {
            write!(f, "{}  {}", self.label, self.description)
        }
    }
}

/// UI capabilities consumed by the commands.
pub trait Prompter {
    /// Let the user choose one item. `None` when the selection was dismissed.
    fn pick(&self, prompt: &str, items: Vec<PickItem>) -> Result<Option<PickItem>>;

    /// Ask for a line of text pre-filled with `default`. `None` when dismissed.
    fn input(&self, prompt: &str, default: &str) -> Result<Option<String>>;

    fn show_error(&self, message: &str);

    fn show_info(&self, message: &str);
}
