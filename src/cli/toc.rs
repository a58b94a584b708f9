use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Arguments for the toc command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Pick a file and insert an entry at line 4:\n    docs-authoring toc entry docs/toc.yml --line 4\n\n\
                   Insert a nested entry with optional fields:\n    docs-authoring toc entry docs/toc.yml -l 6 -c 2 --with-options\n\n\
                   Insert without prompting:\n    docs-authoring toc entry docs/toc.yml -l 4 --target docs/intro.md --name Intro\n\n\
                   Insert a parent node skeleton:\n    docs-authoring toc parent docs/toc.yml -l 4")]
pub struct TocArgs {
    #[command(subcommand)]
    pub command: TocSubcommand,
}

/// TOC subcommands
#[derive(Subcommand, Debug)]
pub enum TocSubcommand {
    /// Insert a link to a Markdown file
    Entry(TocEntryArgs),

    /// Insert an expandable parent node with one child
    Parent(CursorArgs),

    /// Check whether an entry may be inserted at the cursor
    Check(CursorArgs),
}

/// Navigation file and cursor position
#[derive(Args, Debug)]
pub struct CursorArgs {
    /// TOC file being edited
    pub toc_file: Option<PathBuf>,

    /// Zero-based cursor line
    #[arg(long, short = 'l', default_value_t = 0)]
    pub line: usize,

    /// Zero-based cursor column
    #[arg(long, short = 'c', default_value_t = 0)]
    pub column: usize,
}

/// Arguments for toc entry
#[derive(Args, Debug)]
pub struct TocEntryArgs {
    #[command(flatten)]
    pub cursor: CursorArgs,

    /// Add displayname, uid and expanded placeholders
    #[arg(long)]
    pub with_options: bool,

    /// File to link to (skips the file picker)
    #[arg(long)]
    pub target: Option<PathBuf>,

    /// Entry name (skips the heading prompt)
    #[arg(long)]
    pub name: Option<String>,
}
