//! Templates command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::{TemplatesArgs, TemplatesSubcommand};
use crate::common::fs::read_text;
use crate::config::DocsConfig;
use crate::error::Result;
use crate::templates::{list_templates, summary};
use crate::workspace::resolve_root;

/// Run templates command
pub fn run(workspace: Option<PathBuf>, args: TemplatesArgs) -> Result<()> {
    match args.command {
        TemplatesSubcommand::List { dir } => list(workspace, dir),
    }
}

fn list(workspace: Option<PathBuf>, dir: Option<PathBuf>) -> Result<()> {
    let root = resolve_root(workspace)?;
    let config = DocsConfig::load(&root)?;
    let dir = dir.unwrap_or_else(|| config.template_dir(&root));

    if !dir.is_dir() {
        println!("No template directory at {}", dir.display());
        return Ok(());
    }

    let templates = list_templates(&dir, &config.templates.name_key)?;
    if templates.is_empty() {
        println!("No templates found.");
        return Ok(());
    }

    println!("Templates ({}):", templates.len());
    println!();
    for template in &templates {
        println!("  {}", Style::new().bold().yellow().apply_to(&template.label));
        let relative = template.path.strip_prefix(&dir).unwrap_or(&template.path);
        println!("    {}", Style::new().dim().apply_to(relative.display()));
        if let Some(line) = summary(&read_text(&template.path)?) {
            println!("    {line}");
        }
    }

    Ok(())
}
