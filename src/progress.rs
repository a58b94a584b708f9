//! Progress display for cleanup sweeps

#[cfg(test)]
use std::cell::RefCell;

use indicatif::{ProgressBar, ProgressStyle};

/// Label shown while single-valued metadata is being normalized.
pub const SINGLE_VALUED_LABEL: &str = "Single-Valued metadata";

/// Collaborator notified each time a file is actually rewritten.
pub trait ProgressReporter {
    fn file_rewritten(&self, index: usize, total: usize, label: &str);
}

/// Reporter that ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn file_rewritten(&self, _index: usize, _total: usize, _label: &str) {}
}

/// Progress bar over the files of a sweep
pub struct ProgressDisplay {
    pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total file count
    pub fn new(total_files: u64) -> Self {
        let pb = ProgressBar::new(total_files);
        if let Ok(style) = ProgressStyle::default_bar().template("[{bar:40.cyan/blue}] {pos}/{len} {msg}") {
            pb.set_style(style.progress_chars("#>-"));
        }
        Self { pb }
    }

    /// Hidden display, for non-interactive runs
    pub fn hidden() -> Self {
        Self {
            pb: ProgressBar::hidden(),
        }
    }

    /// Run `f` with the bar hidden, for output that must not interleave
    pub fn suspend<R>(&self, f: impl FnOnce() -> R) -> R {
        self.pb.suspend(f)
    }

    /// Finish the bar
    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}

impl ProgressReporter for ProgressDisplay {
    fn file_rewritten(&self, index: usize, total: usize, label: &str) {
        self.pb.set_position((index + 1) as u64);
        self.pb.set_message(format!("({}/{}) {}", index + 1, total, label));
    }
}

/// Keeps every notification in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingProgress {
    notifications: RefCell<Vec<(usize, usize, String)>>,
}

#[cfg(test)]
impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<(usize, usize, String)> {
        self.notifications.borrow().clone()
    }
}

#[cfg(test)]
impl ProgressReporter for RecordingProgress {
    fn file_rewritten(&self, index: usize, total: usize, label: &str) {
        self.notifications
            .borrow_mut()
            .push((index, total, label.to_string()));
    }
}
