//! Content-addressed image tiling
//!
//! Each image is fingerprinted from its raw bytes, split into the 3x3 tile
//! grid, and persisted under a directory named by the fingerprint.

/// Tile extraction over a batch of images
pub mod extractor;
/// Content fingerprints derived from raw file bytes
pub mod fingerprint;

pub use extractor::{BatchReport, ExtractionOutcome, ImageOutcome, TileExtractor};
pub use fingerprint::Fingerprint;
