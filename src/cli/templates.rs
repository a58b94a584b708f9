use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Arguments for the templates command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   List templates from the configured directory:\n    docs-authoring templates list\n\n\
                   List templates from another directory:\n    docs-authoring templates list --dir ~/templates")]
pub struct TemplatesArgs {
    #[command(subcommand)]
    pub command: TemplatesSubcommand,
}

/// Templates subcommands
#[derive(Subcommand, Debug)]
pub enum TemplatesSubcommand {
    /// List templates by name
    List {
        /// Template directory (overrides the configured one)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}
