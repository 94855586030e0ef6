use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over the files handed to checkers.
///
/// Disabled in quiet mode or when stderr is not a TTY.
#[derive(Clone)]
pub struct CheckProgress {
    progress_bar: ProgressBar,
}

impl CheckProgress {
    /// Creates a new progress bar for `total` files, drawn on stderr.
    ///
    /// # Panics
    ///
    /// Panics if the progress bar template is invalid. The template is a
    /// compile-time constant.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, quiet, is_tty)
    }

    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar(total)
        };

        Self { progress_bar }
    }

    fn create_visible_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} Checking {msg} [{bar:40.cyan/blue}] {pos}/{len} files")
                // SAFETY: Template is a static string with valid format specifiers
                .expect("valid template")
                .progress_chars("█▓░"),
        );
        pb
    }

    /// Label the category currently being checked.
    pub fn set_category(&self, name: &'static str) {
        self.progress_bar.set_message(name);
    }

    /// Advance by `n` checked files. Thread-safe.
    pub fn inc_by(&self, n: u64) {
        self.progress_bar.inc(n);
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
