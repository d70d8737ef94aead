//! Spatial geometry for grid partitioning
//!
//! This module contains the pure geometry of the tile grid:
//! - Tile dimensions derived from image dimensions
//! - Row-major tile rectangles

/// Tile grid geometry and rectangle computation
pub mod grid;

pub use grid::{TileGrid, TileRect};
