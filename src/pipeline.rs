//! Stage composition: archive staging, tile extraction, cleanup
//!
//! Each stage sits behind a confirmation gate. Declining extraction halts the
//! run; declining tiling or cleanup only skips that stage. Nothing is rolled
//! back when a later stage fails.

use crate::io::archive::{require_archive, stage_archive};
use crate::io::configuration::Settings;
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::prompt::Confirm;
use crate::tiling::{ExtractionOutcome, TileExtractor};
use crate::workspace::{Cleaner, CleanupOutcome};
use indicatif::HumanCount;

/// How a pipeline run ended
#[derive(Debug)]
pub enum PipelineSummary {
    /// The operator declined extraction; no stage ran
    Halted,
    /// All stages were offered to the operator
    Completed {
        /// Files unpacked from the archive
        extracted: usize,
        /// Outcome of the tiling stage
        extraction: ExtractionOutcome,
        /// Outcome of the cleanup stage
        cleanup: CleanupOutcome,
    },
}

/// Runs the three stages over one workspace
pub struct Pipeline<C> {
    settings: Settings,
    confirm: C,
    progress: ProgressManager,
}

impl<C: Confirm> Pipeline<C> {
    /// Create a pipeline deciding each gate with `confirm`
    pub fn new(settings: Settings, confirm: C) -> Self {
        let progress = if settings.show_progress {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            settings,
            confirm,
            progress,
        }
    }

    /// Settings this pipeline runs with
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run every stage in order
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The archive does not exist in the workspace
    /// - The archive cannot be extracted
    ///
    /// Per-image and per-file failures are reported inside the summary instead.
    // Allow print for operator-facing stage messages
    #[allow(clippy::print_stdout)]
    pub fn run(&mut self) -> Result<PipelineSummary> {
        let root = self.settings.root.clone();
        let archive = require_archive(&root, &self.settings.archive)?;

        let prompt = format!(
            "Found {} - Extract contents?",
            self.settings.archive.display()
        );
        if !self.confirm.confirm(&prompt, true) {
            println!("Aborting extraction");
            return Ok(PipelineSummary::Halted);
        }

        let extracted = stage_archive(&archive, &root)?;
        println!("Extracted {} files", HumanCount(extracted as u64));

        let extraction = TileExtractor::new(&root).run(&mut self.confirm, &mut self.progress);

        let cleaner = Cleaner::new(&root, self.settings.keep_extensions.clone());
        let cleanup = cleaner.run(&mut self.confirm);

        Ok(PipelineSummary::Completed {
            extracted,
            extraction,
            cleanup,
        })
    }
}
