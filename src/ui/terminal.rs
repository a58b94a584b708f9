//! Interactive prompts on the terminal

use console::Style;
use inquire::{Select, Text};

use super::{PickItem, Prompter};
use crate::error::Result;

/// Prompter backed by `inquire`, messages styled with `console`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn pick(&self, prompt: &str, items: Vec<PickItem>) -> Result<Option<PickItem>> {
        if items.is_empty() {
            return Ok(None);
        }
        Ok(Select::new(prompt, items)
            .with_help_message("↑↓ to move, type to filter, ENTER to select, ESC to cancel")
            .prompt_skippable()?)
    }

    fn input(&self, prompt: &str, default: &str) -> Result<Option<String>> {
        Ok(Text::new(prompt)
            .with_initial_value(default)
            .prompt_skippable()?)
    }

    fn show_error(&self, message: &str) {
        eprintln!("{} {}", Style::new().bold().red().apply_to("Error:"), message);
    }

    fn show_info(&self, message: &str) {
        println!("{}", Style::new().green().apply_to(message));
    }
}
