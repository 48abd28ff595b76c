//! Terminal progress display for generation runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} cells"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks collapsed cells of one run
///
/// Hidden bars are used in quiet mode so callers never branch on it.
pub struct RunProgress {
    bar: ProgressBar,
}

impl RunProgress {
    /// Progress over `cells` collapses labelled with the run's seed
    pub fn new(cells: usize, seed: u64) -> Self {
        let bar = ProgressBar::new(cells as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        bar.set_message(format!("seed {seed}"));
        Self { bar }
    }

    /// Progress that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Report the number of collapsed cells
    pub fn update(&self, collapsed: usize) {
        self.bar.set_position(collapsed as u64);
    }

    /// Collapsed cells reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Finish with a success message
    pub fn complete(&self) {
        self.bar.finish_with_message("done");
    }

    /// Stop after a failed run, leaving the bar at its last position
    pub fn abandon(&self, reason: &str) {
        self.bar.abandon_with_message(reason.to_string());
    }
}
