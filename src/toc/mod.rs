//! TOC entry builder
//!
//! Inserts YAML snippets into a navigation file at a cursor position. The
//! entry flow picks a Markdown file, offers its first level-one heading as
//! the entry name and links to it relative to the navigation file.

pub mod document;
pub mod heading;
pub mod position;
pub mod snippet;

use std::path::{Path, PathBuf};

use crate::common::path::toc_href;
use crate::error::Result;
use crate::telemetry::{TOC_COMMAND, Telemetry};
use crate::ui::Prompter;
use crate::workspace::markdown_pick_items;

pub use document::EditorDocument;
pub use position::{Cursor, InsertPosition, check_for_previous_entry};
pub use snippet::{TocSnippet, build_entry, build_parent_node};

/// Shown when the heading input was left empty.
pub const NO_HEADING_SELECTED: &str = "No heading selected; using the first heading";

/// The TOC command being run, used to label telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TocCommand {
    TocEntry,
    TocEntryWithOptions,
    ExpandableParentNode,
}

impl TocCommand {
    pub fn option(self) -> &'static str {
        match self {
            TocCommand::TocEntry => "tocEntry",
            TocCommand::TocEntryWithOptions => "tocEntryWithOptions",
            TocCommand::ExpandableParentNode => "expandableParentNode",
        }
    }

    pub fn with_options(self) -> bool {
        self == TocCommand::TocEntryWithOptions
    }
}

/// Inputs of one entry insertion.
#[derive(Debug, Clone)]
pub struct TocRequest {
    pub command: TocCommand,
    pub cursor: Cursor,
    /// Root scanned for Markdown files when no target is given.
    pub workspace_root: PathBuf,
    pub exclude: Vec<String>,
    /// File to link to; skips the picker.
    pub target: Option<PathBuf>,
    /// Entry name; skips the heading input.
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// The snippet that was inserted.
    Inserted(String),
    /// The file picker was dismissed; nothing changed.
    Cancelled,
}

fn choose_target(request: &TocRequest, prompter: &dyn Prompter) -> Result<Option<PathBuf>> {
    if let Some(target) = &request.target {
        return Ok(Some(target.clone()));
    }

    let items = markdown_pick_items(&request.workspace_root, &request.exclude);
    tracing::debug!(count = items.len(), "offering markdown files");
    Ok(prompter
        .pick("Select a file to link", items)?
        .map(|item| item.path()))
}

fn choose_name(target: &Path, request: &TocRequest, prompter: &dyn Prompter) -> Result<String> {
    let default = heading::first_heading(target)?;
    if let Some(name) = &request.name {
        return Ok(name.clone());
    }

    match prompter.input("Entry name", &default)? {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => {
            prompter.show_info(NO_HEADING_SELECTED);
            Ok(default)
        }
    }
}

/// Validate the cursor, gather target and name, then insert and save.
pub fn insert_toc_entry(
    doc: &mut EditorDocument,
    request: &TocRequest,
    prompter: &dyn Prompter,
    telemetry: &dyn Telemetry,
) -> Result<EntryOutcome> {
    check_for_previous_entry(&doc.lines(), request.cursor)?;

    let Some(target) = choose_target(request, prompter)? else {
        tracing::debug!("file selection dismissed");
        return Ok(EntryOutcome::Cancelled);
    };

    let name = choose_name(&target, request, prompter)?;
    let href = toc_href(doc.path(), &target);
    let entry = build_entry(
        &name,
        &href,
        request.command.with_options(),
        request.cursor.column,
    );

    doc.insert(request.cursor, &entry)?;
    doc.save()?;
    tracing::info!(path = %doc.path().display(), href = %href, "inserted TOC entry");

    telemetry.send_event(TOC_COMMAND, Some(request.command.option()));
    Ok(EntryOutcome::Inserted(entry))
}

/// Insert the parent/child skeleton at `cursor` and save.
pub fn insert_parent_node(doc: &mut EditorDocument, cursor: Cursor) -> Result<String> {
    let node = build_parent_node(cursor.column);
    doc.insert(cursor, &node)?;
    doc.save()?;
    tracing::info!(path = %doc.path().display(), "inserted parent node");
    Ok(node)
}
