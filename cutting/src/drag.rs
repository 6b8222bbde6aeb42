//! The gesture tracked between pointer-down and pointer-up on a tile.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::geom::{Point, Rect};
use crate::tile::TileColor;

/// An active drag: which tile is held and where inside it the pointer grabbed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub tile: TileColor,
    /// Pointer position relative to the tile's top-left corner at pointer-down.
    pub offset: Point,
}

impl DragSession {
    /// Start a drag of `tile`, grabbed at `pointer` while the tile occupies `tile_rect`.
    #[must_use]
    pub fn begin(tile: TileColor, pointer: Point, tile_rect: Rect) -> Self {
        Self { tile, offset: pointer - tile_rect.origin() }
    }

    /// Where the tile's top-left corner belongs for the given pointer position.
    #[must_use]
    pub fn position_at(&self, pointer: Point) -> Point {
        pointer - self.offset
    }
}
