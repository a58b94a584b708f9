//! Decide whether a transformed document differs from the original.

use diffy::{DiffOptions, Line, Patch};

/// Lines of context shown around each change in a rendered diff.
const DEFAULT_CONTEXT: usize = 3;

/// Outcome of comparing original and transformed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeDecision {
    Unchanged,
    Changed,
}

impl ChangeDecision {
    /// Compare `original` with `transformed`.
    ///
    /// The content counts as changed iff the diff holds at least one
    /// insertion or deletion.
    pub fn between(original: &str, transformed: &str) -> Self {
        let patch = build_patch(original, transformed);
        let edited = patch
            .hunks()
            .iter()
            .flat_map(|hunk| hunk.lines())
            .any(|line| matches!(line, Line::Insert(_) | Line::Delete(_)));

        if edited {
            ChangeDecision::Changed
        } else {
            ChangeDecision::Unchanged
        }
    }

    pub fn is_changed(self) -> bool {
        self == ChangeDecision::Changed
    }
}

/// Unified diff between `original` and `transformed`, labelled with `name`.
pub fn unified_diff(name: &str, original: &str, transformed: &str) -> String {
    let patch = build_patch(original, transformed);
    let body = patch.to_string();
    // Replace diffy's generic headers with the file name.
    let hunks = body
        .split_once("\n@@")
        .map(|(_, rest)| format!("@@{rest}"))
        .unwrap_or_default();
    format!("--- a/{name}\n+++ b/{name}\n{hunks}")
}

fn build_patch<'a>(original: &'a str, transformed: &'a str) -> Patch<'a, str> {
    let mut options = DiffOptions::new();
    options.set_context_len(DEFAULT_CONTEXT);
    options.create_patch(original, transformed)
}
