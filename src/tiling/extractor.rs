//! Tile extraction: fingerprint, slice and persist each discovered image
//!
//! Every image is handled in isolation. A failure to read, decode or write
//! one image is recorded in the batch report and the batch moves on; nothing
//! is retried and nothing already written is rolled back.

use crate::io::configuration::{TILE_COUNT, TILE_EXTENSION};
use crate::io::error::{Result, TilerError, file_system};
use crate::io::image::{decode_rgb, encode_png};
use crate::io::progress::ProgressManager;
use crate::io::prompt::Confirm;
use crate::spatial::TileGrid;
use crate::tiling::fingerprint::Fingerprint;
use crate::workspace::discovery::discover_images;
use image::RgbImage;
use image::imageops::crop_imm;
use indicatif::HumanCount;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Result of processing a single image
#[derive(Debug)]
pub enum ImageOutcome {
    /// All tiles were written under the fingerprint directory
    Tiled {
        /// Image that was split
        source: PathBuf,
        /// Directory name the tiles were written to
        fingerprint: Fingerprint,
    },
    /// The image was skipped
    Failed {
        /// Image that could not be split
        source: PathBuf,
        /// Cause of the failure
        error: TilerError,
    },
}

impl ImageOutcome {
    /// Path of the image this outcome is about
    pub fn source(&self) -> &Path {
        match self {
            Self::Tiled { source, .. } | Self::Failed { source, .. } => source,
        }
    }

    /// Check if the image was split
    pub const fn is_tiled(&self) -> bool {
        matches!(self, Self::Tiled { .. })
    }
}

/// Per-image outcomes of one batch, in processing order
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One entry per attempted image
    pub outcomes: Vec<ImageOutcome>,
}

impl BatchReport {
    /// Outcomes of images that were split
    pub fn tiled(&self) -> impl Iterator<Item = &ImageOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.is_tiled())
    }

    /// Outcomes of images that failed
    pub fn failures(&self) -> impl Iterator<Item = &ImageOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_tiled())
    }

    /// Number of images split
    pub fn tiled_count(&self) -> usize {
        self.tiled().count()
    }

    /// Number of images that failed
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }
}

/// What the extraction stage did
#[derive(Debug)]
pub enum ExtractionOutcome {
    /// Discovery found nothing to split
    NoImages,
    /// The operator declined processing
    Declined {
        /// Number of images that were found
        discovered: usize,
    },
    /// The batch ran to the end
    Completed(BatchReport),
}

/// Splits images into tile sets under a workspace root
#[derive(Debug, Clone)]
pub struct TileExtractor {
    root: PathBuf,
}

impl TileExtractor {
    /// Create an extractor writing fingerprint directories below `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Workspace root receiving the output directories
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Discover images, ask for confirmation and process the batch
    // Allow print for operator-facing counts and gate messages
    #[allow(clippy::print_stdout)]
    pub fn run<C: Confirm + ?Sized>(
        &self,
        confirm: &mut C,
        progress: &mut ProgressManager,
    ) -> ExtractionOutcome {
        let images = discover_images(&self.root);

        if images.is_empty() {
            println!("No JPG images found");
            return ExtractionOutcome::NoImages;
        }

        println!("Found {} captcha images", HumanCount(images.len() as u64));
        if !confirm.confirm("Process images into split tiles?", true) {
            println!("Skipping processing");
            return ExtractionOutcome::Declined {
                discovered: images.len(),
            };
        }

        let report = self.process_batch(&images, progress);
        println!(
            "Split {} images, {} failed",
            HumanCount(report.tiled_count() as u64),
            HumanCount(report.failure_count() as u64)
        );
        ExtractionOutcome::Completed(report)
    }

    /// Process every image in order, reporting failures as they happen
    pub fn process_batch(&self, images: &[PathBuf], progress: &mut ProgressManager) -> BatchReport {
        progress.initialize(images.len());

        let mut outcomes = Vec::with_capacity(images.len());
        for path in images {
            progress.start_image(path);
            let outcome = self.process_image(path);
            if let ImageOutcome::Failed { source, error } = &outcome {
                progress.println(failure_line(source, error));
            }
            progress.complete_image();
            outcomes.push(outcome);
        }

        progress.finish();
        BatchReport { outcomes }
    }

    /// Split one image, capturing any failure in the outcome
    pub fn process_image(&self, path: &Path) -> ImageOutcome {
        match self.split_to_directory(path) {
            Ok(fingerprint) => ImageOutcome::Tiled {
                source: path.to_path_buf(),
                fingerprint,
            },
            Err(error) => ImageOutcome::Failed {
                source: path.to_path_buf(),
                error,
            },
        }
    }

    /// Directory receiving the tiles of a fingerprint
    pub fn output_dir(&self, fingerprint: &Fingerprint) -> PathBuf {
        self.root.join(fingerprint)
    }

    fn split_to_directory(&self, path: &Path) -> Result<Fingerprint> {
        let bytes = fs::read(path).map_err(|e| file_system(path, "read image", e))?;
        let fingerprint = Fingerprint::of(&bytes);

        // The directory exists before decoding, so an undecodable image may
        // leave it empty
        let output_dir = self.output_dir(&fingerprint);
        fs::create_dir_all(&output_dir)
            .map_err(|e| file_system(&output_dir, "create directory", e))?;

        let image = decode_rgb(path, &bytes)?;
        let grid = TileGrid::for_dimensions(image.width(), image.height());
        if grid.is_degenerate() {
            return Err(TilerError::ImageTooSmall {
                path: path.to_path_buf(),
                width: image.width(),
                height: image.height(),
            });
        }

        // Encode the full set before touching the directory so encoder
        // failures never leave a partial set behind
        let encoded = slice_image(&image)
            .iter()
            .enumerate()
            .map(|(index, tile)| {
                let tile_path = output_dir.join(tile_file_name(index));
                encode_png(tile, &tile_path).map(|png| (tile_path, png))
            })
            .collect::<Result<Vec<_>>>()?;

        for (tile_path, png) in encoded {
            fs::write(&tile_path, png).map_err(|e| file_system(&tile_path, "write tile", e))?;
            tracing::debug!(path = %tile_path.display(), "wrote tile");
        }

        Ok(fingerprint)
    }
}

/// Crop an image into its nine grid tiles in index order
///
/// Pixels past the last full tile column or row are dropped. An image
/// narrower or shorter than the grid yields zero-sized tiles.
pub fn slice_image(image: &RgbImage) -> Vec<RgbImage> {
    TileGrid::for_dimensions(image.width(), image.height())
        .rects()
        .map(|rect| crop_imm(image, rect.x, rect.y, rect.width, rect.height).to_image())
        .collect()
}

/// Operator-facing line for an image that could not be split
pub fn failure_line(source: &Path, error: &TilerError) -> String {
    format!("Failed {}: {}", source.display(), error.detail())
}

/// File name of the tile at `index`
pub fn tile_file_name(index: usize) -> String {
    format!("{index}.{TILE_EXTENSION}")
}

/// Check if `path` is a tile written by the extractor under `root`
///
/// Matches exactly `<root>/<fingerprint>/<index>.png` for indices in the grid.
pub fn is_tile_output(root: &Path, path: &Path) -> bool {
    let Ok(relative) = path.strip_prefix(root) else {
        return false;
    };
    let mut components = relative.components();
    let (Some(Component::Normal(dir)), Some(Component::Normal(file)), None) =
        (components.next(), components.next(), components.next())
    else {
        return false;
    };

    let dir_is_fingerprint = dir.to_str().is_some_and(Fingerprint::is_fingerprint_name);
    let file_is_tile = file
        .to_str()
        .is_some_and(|name| (0..TILE_COUNT).any(|index| tile_file_name(index) == name));
    dir_is_fingerprint && file_is_tile
}
