//! Tile grid geometry for splitting an image into a fixed 3x3 arrangement
//!
//! Tile dimensions are the floor of the image dimensions divided by the grid
//! side. Remainder pixels on the right and bottom edges belong to no tile.
//! Tiles are indexed in row-major order, `index = row * 3 + col`.

use crate::io::configuration::{GRID_SIDE, TILE_COUNT};

/// Pixel rectangle occupied by a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    /// Left edge (inclusive)
    pub x: u32,
    /// Top edge (inclusive)
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl TileRect {
    /// Right edge (exclusive)
    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive)
    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Check if a pixel lies inside the rectangle
    pub const fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }
}

/// Partition of a `width x height` image into equally sized tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    tile_width: u32,
    tile_height: u32,
}

impl TileGrid {
    /// Derive the grid for an image of the given dimensions
    pub const fn for_dimensions(width: u32, height: u32) -> Self {
        Self {
            tile_width: width / GRID_SIDE,
            tile_height: height / GRID_SIDE,
        }
    }

    /// Width of every tile
    pub const fn tile_width(self) -> u32 {
        self.tile_width
    }

    /// Height of every tile
    pub const fn tile_height(self) -> u32 {
        self.tile_height
    }

    /// True when the image was too small for tiles to cover any pixel
    pub const fn is_degenerate(self) -> bool {
        self.tile_width == 0 || self.tile_height == 0
    }

    /// Width and height of the region covered by tiles
    pub const fn covered_extent(self) -> (u32, u32) {
        (self.tile_width * GRID_SIDE, self.tile_height * GRID_SIDE)
    }

    /// Rectangle of the tile at `index`, or `None` past the last tile
    pub const fn rect(self, index: usize) -> Option<TileRect> {
        if index >= TILE_COUNT {
            return None;
        }
        let col = index as u32 % GRID_SIDE;
        let row = index as u32 / GRID_SIDE;
        Some(TileRect {
            x: col * self.tile_width,
            y: row * self.tile_height,
            width: self.tile_width,
            height: self.tile_height,
        })
    }

    /// All tile rectangles in index order
    pub fn rects(self) -> impl Iterator<Item = TileRect> {
        (0..TILE_COUNT).filter_map(move |index| self.rect(index))
    }
}
