//! Prompter that replays canned answers

use std::cell::RefCell;

use super::{PickItem, Prompter};
use crate::error::Result;

/// Answers prompts from preset values and records every message shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    /// Label of the item to pick; `None` dismisses the list.
    pub pick_label: Option<String>,
    /// Text typed into the input box; `None` dismisses it.
    pub input: Option<String>,
    offered: RefCell<Vec<PickItem>>,
    defaults: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
    infos: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(pick_label: Option<&str>, input: Option<&str>) -> Self {
        Self {
            pick_label: pick_label.map(str::to_string),
            input: input.map(str::to_string),
            ..Self::default()
        }
    }

    /// Items offered by the last `pick` call.
    pub fn offered(&self) -> Vec<PickItem> {
        self.offered.borrow().clone()
    }

    /// Default values offered by `input` calls.
    pub fn defaults(&self) -> Vec<String> {
        self.defaults.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn pick(&self, _prompt: &str, items: Vec<PickItem>) -> Result<Option<PickItem>> {
        let chosen = self
            .pick_label
            .as_ref()
            .and_then(|label| items.iter().find(|item| &item.label == label).cloned());
        *self.offered.borrow_mut() = items;
        Ok(chosen)
    }

    fn input(&self, _prompt: &str, default: &str) -> Result<Option<String>> {
        self.defaults.borrow_mut().push(default.to_string());
        Ok(self.input.clone())
    }

    fn show_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn show_info(&self, message: &str) {
        self.infos.borrow_mut().push(message.to_string());
    }
}
