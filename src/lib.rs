//! Dataset preparation for captcha tile classifiers
//!
//! The pipeline extracts an archive of labeled captcha images, splits each
//! image into a 3x3 grid of tiles stored under a directory named by the
//! image's content hash, and removes the original files afterwards.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Stage composition with confirmation gates
pub mod pipeline;
/// Tile grid geometry
pub mod spatial;
/// Content fingerprinting and tile extraction
pub mod tiling;
/// Workspace discovery and cleanup
pub mod workspace;

pub use io::error::{Result, TilerError};
