//! TOC command implementation
//!
//! The TOC file argument stands in for the active editor document: without
//! it the command does nothing.

use std::path::PathBuf;

use console::Style;

use crate::cli::{CursorArgs, TocArgs, TocEntryArgs, TocSubcommand};
use crate::common::path::normalize;
use crate::config::DocsConfig;
use crate::error::Result;
use crate::telemetry::TracingTelemetry;
use crate::toc::{
    Cursor, EditorDocument, EntryOutcome, InsertPosition, TocCommand, TocRequest,
    check_for_previous_entry, insert_parent_node, insert_toc_entry,
};
use crate::ui::Prompter;
use crate::ui::terminal::TerminalPrompter;
use crate::workspace::resolve_root;

/// Run toc command
pub fn run(workspace: Option<PathBuf>, args: TocArgs) -> Result<()> {
    match args.command {
        TocSubcommand::Entry(entry) => run_entry(workspace, entry, &TerminalPrompter),
        TocSubcommand::Parent(cursor) => run_parent(&cursor),
        TocSubcommand::Check(cursor) => run_check(&cursor),
    }
}

fn open_document(args: &CursorArgs) -> Result<(EditorDocument, Cursor)> {
    let path = args.toc_file.as_deref().map(normalize);
    let doc = EditorDocument::open(path.as_deref())?;
    Ok((doc, Cursor::new(args.line, args.column)))
}

fn run_entry(
    workspace: Option<PathBuf>,
    args: TocEntryArgs,
    prompter: &dyn Prompter,
) -> Result<()> {
    let (mut doc, cursor) = open_document(&args.cursor)?;
    let workspace_root = resolve_root(workspace)?;
    let config = DocsConfig::load(&workspace_root)?;

    let command = if args.with_options {
        TocCommand::TocEntryWithOptions
    } else {
        TocCommand::TocEntry
    };
    let request = TocRequest {
        command,
        cursor,
        workspace_root,
        exclude: config.exclude,
        target: args.target.as_deref().map(normalize),
        name: args.name,
    };

    match insert_toc_entry(&mut doc, &request, prompter, &TracingTelemetry)? {
        EntryOutcome::Inserted(_) => prompter.show_info(&format!(
            "Inserted TOC entry into {}",
            doc.path().display()
        )),
        EntryOutcome::Cancelled => tracing::debug!("no file selected"),
    }
    Ok(())
}

fn run_parent(args: &CursorArgs) -> Result<()> {
    let (mut doc, cursor) = open_document(args)?;
    insert_parent_node(&mut doc, cursor)?;
    println!(
        "Inserted parent node into {}",
        Style::new().bold().apply_to(doc.path().display())
    );
    Ok(())
}

fn run_check(args: &CursorArgs) -> Result<()> {
    let (doc, cursor) = open_document(args)?;
    let position = check_for_previous_entry(&doc.lines(), cursor)?;
    let description = match position {
        InsertPosition::LineZero => "start of document".to_string(),
        InsertPosition::ColumnZero => "top-level entry".to_string(),
        InsertPosition::Indented { sibling_line } => {
            format!("aligned with the entry on line {sibling_line}")
        }
    };
    println!(
        "{} line {}, column {}: {}",
        Style::new().green().apply_to("Valid position:"),
        cursor.line,
        cursor.column,
        description
    );
    Ok(())
}
