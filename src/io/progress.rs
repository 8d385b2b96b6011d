//! Terminal progress display for cell acquisition

use crate::compose::AssemblyProgress;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::sync::atomic::{AtomicUsize, Ordering};

static CELL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Cells: [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar advanced once per acquired cell
///
/// Cells finish in whatever order their fetches complete, so the bar only
/// tracks how many are done and how many fell back to placeholders.
pub struct ProgressManager {
    bar: ProgressBar,
    degraded: AtomicUsize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a hidden bar; it becomes visible once the cell count is known
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(CELL_STYLE.clone());
        Self {
            bar,
            degraded: AtomicUsize::new(0),
        }
    }

    /// Number of cells reported as placeholders so far
    pub fn degraded(&self) -> usize {
        self.degraded.load(Ordering::Relaxed)
    }
}

impl AssemblyProgress for ProgressManager {
    fn begin(&self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(0);
    }

    fn cell_ready(&self, _index: usize, label: &str, degraded: bool) {
        if degraded {
            self.degraded.fetch_add(1, Ordering::Relaxed);
            self.bar.set_message(format!("placeholder: {label}"));
        } else {
            self.bar.set_message(label.to_string());
        }
        self.bar.inc(1);
    }

    fn finish(&self) {
        let degraded = self.degraded();
        if degraded == 0 {
            self.bar.finish_with_message("all images ready");
        } else {
            self.bar
                .finish_with_message(format!("{degraded} placeholder(s) used"));
        }
    }
}
