//! Terminal progress bar driven by engine progress updates.

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};

use picalc_core::observer::ProgressObserver;
use picalc_core::progress::ProgressUpdate;

/// Whether stderr is an interactive terminal (where a bar makes sense).
#[must_use]
pub fn stderr_is_interactive() -> bool {
    Term::stderr().is_term()
}

/// Progress-bar observer for interactive terminals.
///
/// Intended for the single-worker path; with several workers the bar would
/// interleave their positions.
pub struct ProgressBarObserver {
    bar: ProgressBar,
}

impl ProgressBarObserver {
    /// Create a bar that sizes itself from the first update it receives.
    #[must_use]
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        if let Ok(template) =
            ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} terms ({elapsed})")
        {
            bar.set_style(template.progress_chars("=> "));
        }
        Self { bar }
    }
}

impl Default for ProgressBarObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for ProgressBarObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        if update.done {
            self.bar.finish_and_clear();
            return;
        }
        if self.bar.length() != Some(update.total_terms) {
            self.bar.set_length(update.total_terms);
        }
        self.bar.set_position(update.current_term);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_updates_and_finishes() {
        let observer = ProgressBarObserver::new();
        observer.on_progress(&ProgressUpdate::new(0, "chudnovsky/series", 0.5, 5, 10));
        observer.on_progress(&ProgressUpdate::new(0, "chudnovsky/series", 0.8, 8, 10));
        observer.on_progress(&ProgressUpdate::done(0, "chudnovsky/series"));
    }
}
