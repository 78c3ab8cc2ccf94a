use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while the tree is walked.
///
/// Owned by the caller and passed into the scan; hidden when disabled or
/// when stderr is not a TTY.
pub struct ScanProgress {
    progress_bar: ProgressBar,
}

impl ScanProgress {
    /// Creates a spinner, hidden when `quiet` is set.
    ///
    /// The spinner draws on stderr to avoid interfering with stdout output.
    pub fn new(quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(quiet, is_tty)
    }

    /// A spinner that never draws
    pub fn hidden() -> Self {
        Self {
            progress_bar: ProgressBar::hidden(),
        }
    }

    fn new_with_visibility(quiet: bool, is_tty: bool) -> Self {
        if quiet || !is_tty {
            return Self::hidden();
        }

        let progress_bar = ProgressBar::new_spinner();
        if let Ok(style) =
            ProgressStyle::default_spinner().template("{spinner:.green} Scanning : {pos} entries")
        {
            progress_bar.set_style(style);
        }
        progress_bar.enable_steady_tick(Duration::from_millis(80));

        Self { progress_bar }
    }

    /// Count one more scanned entry
    pub fn tick(&self) {
        self.progress_bar.inc(1);
    }

    /// Clears the spinner from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}
