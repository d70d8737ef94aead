//! Per-run progress display for the tiling batch

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static SPLIT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("Splitting [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} img {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the images of one tiling run
///
/// A hidden manager keeps the same call sequence but draws nothing, which is
/// what `--quiet` runs and tests use.
pub struct ProgressManager {
    bar: ProgressBar,
    visible: bool,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager that draws to the terminal
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::new(0),
            visible: true,
        }
    }

    /// Create a manager that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
            visible: false,
        }
    }

    /// Check if the bar is drawn
    ///
    /// Also false when stderr is not a terminal.
    pub fn is_visible(&self) -> bool {
        self.visible && !self.bar.is_hidden()
    }

    /// Reset the bar for a run over `image_count` images
    pub fn initialize(&mut self, image_count: usize) {
        self.bar = if self.visible {
            ProgressBar::new(image_count as u64)
        } else {
            ProgressBar::hidden()
        };
        self.bar.set_style(SPLIT_STYLE.clone());
    }

    /// Show the image currently being processed
    pub fn start_image(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Count one image as done, whatever its outcome
    pub fn complete_image(&self) {
        self.bar.inc(1);
    }

    /// Number of images counted so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Print a line above the bar without corrupting it
    ///
    /// Falls back to plain stdout when the bar is not drawn, so messages
    /// reach the operator in quiet runs too.
    #[allow(clippy::print_stdout)]
    pub fn println(&self, message: impl AsRef<str>) {
        if self.is_visible() {
            self.bar.println(message);
        } else {
            println!("{}", message.as_ref());
        }
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
