use clap::Parser;
use std::path::PathBuf;

/// Arguments for the cleanup command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Normalize every .yml and .md file in the workspace:\n    docs-authoring cleanup\n\n\
                   Normalize selected files and directories:\n    docs-authoring cleanup docs/toc.yml articles/\n\n\
                   Preview the changes as a diff:\n    docs-authoring cleanup --dry-run")]
pub struct CleanupArgs {
    /// Files or directories to process (defaults to the workspace root)
    pub paths: Vec<PathBuf>,

    /// Print a diff of what would change without writing
    #[arg(long)]
    pub dry_run: bool,
}
