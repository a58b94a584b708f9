//! Cleanup command implementation
//!
//! Sweeps the given files and directories (the workspace root by default) and
//! collapses single-valued metadata arrays. Failures are reported per file;
//! the command fails at the end if any file could not be processed.

use std::path::PathBuf;

use console::{Style, Term};

use crate::cli::CleanupArgs;
use crate::config::DocsConfig;
use crate::error::{DocsError, Result};
use crate::metadata::CleanupContext;
use crate::metadata::sweep::{SweepReport, collect_files, normalize_all};
use crate::progress::ProgressDisplay;
use crate::telemetry::TracingTelemetry;
use crate::ui::Prompter;
use crate::ui::terminal::TerminalPrompter;
use crate::workspace::resolve_root;

/// Run cleanup command
pub fn run(workspace: Option<PathBuf>, args: CleanupArgs) -> Result<()> {
    let root = resolve_root(workspace)?;
    let config = DocsConfig::load(&root)?;

    // Relative paths are taken from the workspace root.
    let paths: Vec<PathBuf> = if args.paths.is_empty() {
        vec![root.clone()]
    } else {
        args.paths.iter().map(|path| root.join(path)).collect()
    };
    let collected = collect_files(&paths, &config.exclude);
    let files = collected.files;
    tracing::debug!(count = files.len(), root = %root.display(), "collected cleanup candidates");

    let display = if args.dry_run || !Term::stdout().is_term() {
        ProgressDisplay::hidden()
    } else {
        ProgressDisplay::new(files.len() as u64)
    };
    let prompter = TerminalPrompter;
    let ctx = CleanupContext {
        telemetry: &TracingTelemetry,
        progress: &display,
        dry_run: args.dry_run,
    };

    for (path, err) in &collected.errors {
        prompter.show_error(&format!("{}: {err}", path.display()));
    }

    let mut report = normalize_all(&files, &ctx, |path, err| {
        display.suspend(|| prompter.show_error(&format!("{}: {err}", path.display())));
    });
    display.finish();
    report.failures.extend(collected.errors);

    print_report(&report, args.dry_run);

    if report.failures.is_empty() {
        Ok(())
    } else {
        Err(DocsError::CleanupFailed {
            failed: report.failures.len(),
        })
    }
}

fn print_report(report: &SweepReport, dry_run: bool) {
    if dry_run {
        for (_, diff) in &report.would_rewrite {
            print!("{diff}");
        }
        println!(
            "{} file(s) would be rewritten, {} unchanged",
            Style::new().bold().apply_to(report.would_rewrite.len()),
            report.unchanged
        );
        return;
    }

    for path in &report.rewritten {
        println!("  {} {}", Style::new().green().apply_to("rewrote"), path.display());
    }
    println!(
        "{} file(s) rewritten, {} unchanged",
        Style::new().bold().apply_to(report.rewritten.len()),
        report.unchanged
    );
}
