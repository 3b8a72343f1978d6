//! Progress reporting for batch conversions
//!
//! Conversions report through the [`ProgressReporter`] trait so the command
//! can pick a visible bar for interactive runs and stay silent when output
//! is piped, verbose logging is on, or `--quiet` was given.

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter trait for a run over many documents
pub trait ProgressReporter {
    /// Start reporting for `total` documents
    fn start(&mut self, total: u64);

    /// Mark one document as processed
    fn advance(&mut self, relative_path: &str);

    /// Finish after every document was processed
    fn finish(&mut self);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Interactive progress reporter with a visual progress bar
#[derive(Default)]
pub struct InteractiveProgressReporter {
    file_pb: Option<ProgressBar>,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Truncate long paths for display
fn display_path(path: &str) -> String {
    let count = path.chars().count();
    if count > 50 {
        let tail: String = path.chars().skip(count - 47).collect();
        format!("...{tail}")
    } else {
        path.to_string()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start(&mut self, total: u64) {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let file_pb = ProgressBar::new(total);
        file_pb.set_style(style);
        self.file_pb = Some(file_pb);
    }

    fn advance(&mut self, relative_path: &str) {
        if let Some(ref file_pb) = self.file_pb {
            file_pb.set_message(display_path(relative_path));
            file_pb.inc(1);
        }
    }

    fn finish(&mut self) {
        if let Some(ref file_pb) = self.file_pb {
            file_pb.finish_and_clear();
        }
    }

    fn abandon(&mut self) {
        if let Some(ref file_pb) = self.file_pb {
            file_pb.abandon();
        }
    }
}

/// Silent progress reporter (no-op)
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start(&mut self, _total: u64) {}

    fn advance(&mut self, _relative_path: &str) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}
