//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - cleanup: Cleanup command arguments
//! - toc: TOC command arguments
//! - templates: Templates command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod cleanup;
pub mod completions;
pub mod templates;
pub mod toc;

pub use cleanup::CleanupArgs;
pub use completions::CompletionsArgs;
pub use templates::{TemplatesArgs, TemplatesSubcommand};
pub use toc::{CursorArgs, TocArgs, TocEntryArgs, TocSubcommand};

/// Docs authoring - editor commands for Markdown/YAML documentation
#[derive(Parser, Debug)]
#[command(
    name = "docs-authoring",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Authoring helpers for Markdown and YAML documentation",
    long_about = "Normalizes single-valued metadata in YAML files and Markdown front matter, \
                  and inserts table-of-contents entries into YAML navigation files.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  docs-authoring cleanup                          \x1b[90m# Normalize metadata in the workspace\x1b[0m\n   \
                  docs-authoring cleanup docs/toc.yml --dry-run   \x1b[90m# Preview changes to one file\x1b[0m\n   \
                  docs-authoring toc entry docs/toc.yml -l 4      \x1b[90m# Pick a file and insert an entry\x1b[0m\n   \
                  docs-authoring toc parent docs/toc.yml -l 4     \x1b[90m# Insert a parent node skeleton\x1b[0m\n   \
                  docs-authoring templates list                   \x1b[90m# List local templates\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "DOCS_AUTHORING_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collapse single-valued metadata arrays into scalars
    Cleanup(CleanupArgs),

    /// Insert entries into a TOC navigation file
    Toc(TocArgs),

    /// Work with local authoring templates
    Templates(TemplatesArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_cleanup_defaults() {
        let cli = Cli::try_parse_from(["docs-authoring", "cleanup"]).unwrap();
        match cli.command {
            Commands::Cleanup(args) => {
                assert!(args.paths.is_empty());
                assert!(!args.dry_run);
            }
            _ => panic!("Expected Cleanup command"),
        }
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["docs-authoring", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli =
            Cli::try_parse_from(["docs-authoring", "-v", "-w", "/tmp/workspace", "cleanup"])
                .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.workspace, Some(PathBuf::from("/tmp/workspace")));
    }

    #[test]
    fn test_cli_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "docs-authoring",
            "toc",
            "check",
            "toc.yml",
            "--line",
            "1",
            "-w",
            "/tmp/workspace",
        ])
        .unwrap();
        assert_eq!(cli.workspace, Some(PathBuf::from("/tmp/workspace")));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["docs-authoring", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, clap_complete::Shell::Bash);
            }
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_shell() {
        assert!(Cli::try_parse_from(["docs-authoring", "completions", "tcsh"]).is_err());
    }
}
