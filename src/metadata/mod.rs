//! Single-valued metadata normalization
//!
//! A document's metadata block is scanned for fields whose value is a
//! one-element sequence and those fields are rewritten as plain scalars:
//!
//! - `.yml` documents are scanned as a whole
//! - `.md` documents are scanned inside their `---` front matter only
//! - every other document is left alone
//!
//! A file is written back only when the transformation changed something.

pub mod change;
pub mod frontmatter;
pub mod single_valued;
pub mod sweep;

use std::path::Path;

use crate::common::fs::{read_text, write_atomic};
use crate::error::Result;
use crate::progress::{ProgressReporter, SINGLE_VALUED_LABEL};
use crate::telemetry::{CLEANUP_COMMAND, Telemetry};

pub use change::ChangeDecision;
pub use single_valued::collapse_single_valued;

/// How a document's metadata is located, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Yaml,
    MarkdownWithFrontMatter,
    Plain,
}

impl DocumentKind {
    pub fn from_path(path: &Path) -> Self {
        // Extension matching is case-sensitive.
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml") => DocumentKind::Yaml,
            Some("md") => DocumentKind::MarkdownWithFrontMatter,
            _ => DocumentKind::Plain,
        }
    }
}

/// Apply the normalization to a document's text.
pub fn normalize_content(kind: DocumentKind, content: &str) -> String {
    match kind {
        DocumentKind::Yaml => collapse_single_valued(content),
        DocumentKind::MarkdownWithFrontMatter => match frontmatter::locate(content) {
            Some(range) => {
                let mut out = String::with_capacity(content.len());
                out.push_str(&content[..range.start]);
                out.push_str(&collapse_single_valued(&content[range.clone()]));
                out.push_str(&content[range.end..]);
                out
            }
            None => content.to_string(),
        },
        DocumentKind::Plain => content.to_string(),
    }
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeOutcome {
    /// The extension is neither `.yml` nor `.md`.
    Skipped,
    /// Nothing to rewrite.
    Unchanged,
    /// The file was rewritten.
    Rewritten,
    /// The file would be rewritten; carries the unified diff.
    WouldRewrite(String),
}

/// Collaborators and flags for a normalization run.
pub struct CleanupContext<'a> {
    pub telemetry: &'a dyn Telemetry,
    pub progress: &'a dyn ProgressReporter,
    pub dry_run: bool,
}

/// Position of a file inside the batch being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchPosition {
    pub index: usize,
    pub total: usize,
}

impl BatchPosition {
    pub fn single() -> Self {
        Self { index: 0, total: 1 }
    }
}

/// Normalize one file in place.
///
/// Read and write failures abort this file only; the caller decides whether
/// to continue with the rest of its batch.
pub fn normalize_file(
    path: &Path,
    ctx: &CleanupContext<'_>,
    position: BatchPosition,
) -> Result<NormalizeOutcome> {
    ctx.telemetry.send_event(CLEANUP_COMMAND, None);

    let kind = DocumentKind::from_path(path);
    if kind == DocumentKind::Plain {
        return Ok(NormalizeOutcome::Skipped);
    }

    let original = read_text(path)?;
    let transformed = normalize_content(kind, &original);

    if !ChangeDecision::between(&original, &transformed).is_changed() {
        tracing::debug!(path = %path.display(), "metadata already normalized");
        return Ok(NormalizeOutcome::Unchanged);
    }

    if ctx.dry_run {
        let name = crate::common::path::to_forward_slashes(path);
        return Ok(NormalizeOutcome::WouldRewrite(change::unified_diff(
            &name,
            &original,
            &transformed,
        )));
    }

    write_atomic(path, &transformed)?;
    tracing::info!(path = %path.display(), "rewrote single-valued metadata");
    ctx.progress
        .file_rewritten(position.index, position.total, SINGLE_VALUED_LABEL);

    Ok(NormalizeOutcome::Rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocsError;
    use crate::progress::{NoProgress, RecordingProgress};
    use crate::telemetry::RecordingTelemetry;
    use tempfile::TempDir;

    fn context<'a>(
        telemetry: &'a dyn Telemetry,
        progress: &'a dyn ProgressReporter,
    ) -> CleanupContext<'a> {
        CleanupContext {
            telemetry,
            progress,
            dry_run: false,
        }
    }

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(DocumentKind::from_path(Path::new("toc.yml")), DocumentKind::Yaml);
        assert_eq!(
            DocumentKind::from_path(Path::new("docs/a.md")),
            DocumentKind::MarkdownWithFrontMatter
        );
        assert_eq!(DocumentKind::from_path(Path::new("a.yaml")), DocumentKind::Plain);
        assert_eq!(DocumentKind::from_path(Path::new("A.MD")), DocumentKind::Plain);
        assert_eq!(DocumentKind::from_path(Path::new("README")), DocumentKind::Plain);
    }

    #[test]
    fn test_markdown_without_front_matter_unchanged() {
        let content = "# Title\n\nauthor: [me]\n";
        assert_eq!(
            normalize_content(DocumentKind::MarkdownWithFrontMatter, content),
            content
        );
    }

    #[test]
    fn test_markdown_body_is_not_touched() {
        let content = "---\nms.author: [me]\n---\n\ntags: [x]\n";
        assert_eq!(
            normalize_content(DocumentKind::MarkdownWithFrontMatter, content),
            "---\nms.author: me\n---\n\ntags: [x]\n"
        );
    }

    #[test]
    fn test_markdown_without_closer_unchanged() {
        let content = "---\nms.author: [me]\n# Title\n";
        assert_eq!(
            normalize_content(DocumentKind::MarkdownWithFrontMatter, content),
            content
        );
    }

    #[test]
    fn test_yaml_scanned_without_delimiter() {
        assert_eq!(
            normalize_content(DocumentKind::Yaml, "title: x\nauthor:\n  - me\n"),
            "title: x\nauthor: me\n"
        );
    }

    #[test]
    fn test_plain_untouched() {
        assert_eq!(normalize_content(DocumentKind::Plain, "a: [x]\n"), "a: [x]\n");
    }

    #[test]
    fn test_normalize_file_rewrites_and_reports() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.yml");
        std::fs::write(&path, "title: Index\nms.topic: [landing-page]\n").unwrap();

        let telemetry = RecordingTelemetry::new();
        let progress = RecordingProgress::new();
        let outcome = normalize_file(
            &path,
            &context(&telemetry, &progress),
            BatchPosition { index: 2, total: 5 },
        )
        .unwrap();

        assert_eq!(outcome, NormalizeOutcome::Rewritten);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "title: Index\nms.topic: landing-page\n"
        );
        assert_eq!(
            progress.notifications(),
            vec![(2, 5, SINGLE_VALUED_LABEL.to_string())]
        );
        assert_eq!(telemetry.events(), vec![(CLEANUP_COMMAND.to_string(), None)]);
    }

    #[test]
    fn test_normalize_file_second_pass_is_noop() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.md");
        std::fs::write(&path, "---\nauthor:\n- me\n---\nbody\n").unwrap();

        let telemetry = RecordingTelemetry::new();
        let progress = RecordingProgress::new();
        let ctx = context(&telemetry, &progress);

        assert_eq!(
            normalize_file(&path, &ctx, BatchPosition::single()).unwrap(),
            NormalizeOutcome::Rewritten
        );
        assert_eq!(
            normalize_file(&path, &ctx, BatchPosition::single()).unwrap(),
            NormalizeOutcome::Unchanged
        );
        assert_eq!(progress.notifications().len(), 1);
        assert_eq!(telemetry.events().len(), 2);
    }

    #[test]
    fn test_normalize_file_other_extension_has_no_side_effect() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");
        std::fs::write(&path, "a: [x]\n").unwrap();

        let telemetry = RecordingTelemetry::new();
        let outcome = normalize_file(
            &path,
            &context(&telemetry, &NoProgress),
            BatchPosition::single(),
        )
        .unwrap();

        assert_eq!(outcome, NormalizeOutcome::Skipped);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a: [x]\n");
        assert_eq!(telemetry.events().len(), 1);
    }

    #[test]
    fn test_normalize_file_dry_run_does_not_write() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a.yml");
        std::fs::write(&path, "a: [x]\n").unwrap();

        let telemetry = RecordingTelemetry::new();
        let progress = RecordingProgress::new();
        let ctx = CleanupContext {
            telemetry: &telemetry,
            progress: &progress,
            dry_run: true,
        };
        let outcome = normalize_file(&path, &ctx, BatchPosition::single()).unwrap();

        assert!(matches!(outcome, NormalizeOutcome::WouldRewrite(diff) if diff.contains("+a: x")));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a: [x]\n");
        assert!(progress.notifications().is_empty());
    }

    #[test]
    fn test_normalize_file_missing_file_errors() {
        let temp = TempDir::new().unwrap();
        let telemetry = RecordingTelemetry::new();
        let result = normalize_file(
            &temp.path().join("gone.md"),
            &context(&telemetry, &NoProgress),
            BatchPosition::single(),
        );
        assert!(matches!(result, Err(DocsError::FileNotFound { .. })));
    }
}
