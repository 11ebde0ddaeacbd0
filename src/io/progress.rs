//! Terminal progress display for tile painting

use crate::algorithm::assignment::{TileAssignment, TileObserver, TileProgress};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static PIXEL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] Pixels colored: {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Shows how many pixels have been painted for the current image
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new(0))
    }

    /// Create a progress manager that tracks state without drawing
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::with_draw_target(
            Some(0),
            ProgressDrawTarget::hidden(),
        ))
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(PIXEL_STYLE.clone());
        Self { bar }
    }

    /// Reset the bar for a new image of `pixel_total` pixels
    pub fn start_file(&self, path: &Path, pixel_total: u64) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_prefix(display_name);
        self.bar.set_length(pixel_total);
        self.bar.set_position(0);
    }

    /// Pixels reported painted so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Pixel total the bar counts toward
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Leave the final count on screen
    pub fn finish(&self) {
        self.bar.finish();
    }
}

impl TileObserver for ProgressManager {
    fn tile_painted(&mut self, _assignment: &TileAssignment, progress: &TileProgress) {
        self.bar.set_length(progress.pixel_total);
        self.bar.set_position(progress.pixels_painted);
    }
}
