//! Workspace traversal and cleanup
//!
//! This module contains the file-system housekeeping around tiling:
//! - Recursive discovery of candidate images
//! - Removal of original files and emptied directories

/// Removal of processed inputs and empty directories
pub mod cleaner;
/// Recursive file discovery below the workspace root
pub mod discovery;

pub use cleaner::{Cleaner, CleanupOutcome, CleanupReport};
pub use discovery::discover_images;
