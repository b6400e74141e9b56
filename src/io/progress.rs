//! Batch progress tracking for region evaluation

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_REFRESH_HZ};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;
use std::sync::atomic::{AtomicUsize, Ordering};

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Regions: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Shared progress display for one batch of regions
///
/// Workers report through a shared reference; the underlying bar is
/// thread-safe and hidden entirely when display is disabled.
pub struct RegionProgress {
    bar: ProgressBar,
    feasible: AtomicUsize,
}

impl RegionProgress {
    /// Create a progress display for `region_count` regions
    pub fn new(region_count: usize, visible: bool) -> Self {
        let bar = if visible {
            let bar = ProgressBar::with_draw_target(
                Some(region_count as u64),
                ProgressDrawTarget::stderr_with_hz(PROGRESS_REFRESH_HZ),
            );
            bar.set_style(BATCH_STYLE.clone());
            bar
        } else {
            ProgressBar::hidden()
        };

        Self {
            bar,
            feasible: AtomicUsize::new(0),
        }
    }

    /// Record one evaluated region
    pub fn record(&self, feasible: bool) {
        if feasible {
            let total = self.feasible.fetch_add(1, Ordering::Relaxed) + 1;
            self.bar.set_message(format!("feasible: {total}"));
        }
        self.bar.inc(1);
    }

    /// Number of regions recorded so far
    pub fn evaluated(&self) -> u64 {
        self.bar.position()
    }

    /// Number of recorded regions that were feasible
    pub fn feasible(&self) -> usize {
        self.feasible.load(Ordering::Relaxed)
    }

    /// Close the display, leaving the final tally on screen
    pub fn finish(&self) {
        self.bar
            .finish_with_message(format!("feasible: {}", self.feasible()));
    }
}
