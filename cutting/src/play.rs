//! Drag-and-cut reducer for the play field.
//!
//! `PlayState` holds tile positions, tile messages, the active drag, and the
//! text currently shown in the cut zone. UI event handlers feed it pointer
//! coordinates and DOM rects; it never touches the DOM itself.
//!
//! A "cut" happens when a drag ends while the cut message is non-empty. The
//! reducer reports it as a [`Cut`]; recording it in the score map and sending
//! it to peers is the caller's job.

#[cfg(test)]
#[path = "play_test.rs"]
mod play_test;

use crate::drag::DragSession;
use crate::geom::{Point, Rect};
use crate::tile::{PerTile, TileColor};

/// A message released over the cut zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cut {
    pub tile: TileColor,
    pub message: String,
}

/// Local state of the play field.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayState {
    pub positions: PerTile<Point>,
    pub messages: PerTile<String>,
    pub drag: Option<DragSession>,
    pub cut_message: String,
}

impl Default for PlayState {
    fn default() -> Self {
        Self {
            positions: PerTile::from_fn(TileColor::initial_position),
            messages: PerTile::default(),
            drag: None,
            cut_message: String::new(),
        }
    }
}

impl PlayState {
    /// Tile currently being dragged, if any.
    #[must_use]
    pub fn dragged(&self) -> Option<TileColor> {
        self.drag.map(|d| d.tile)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Pointer-down on `tile`, which currently occupies `tile_rect`.
    ///
    /// Replaces any drag in progress. The cut message is untouched until the
    /// next pointer-move, so a click right after a drop cuts it again.
    pub fn begin_drag(&mut self, tile: TileColor, pointer: Point, tile_rect: Rect) {
        if let Some(previous) = self.drag.take() {
            self.positions[previous.tile] = previous.tile.initial_position();
        }
        self.drag = Some(DragSession::begin(tile, pointer, tile_rect));
    }

    /// Pointer-move anywhere in the window.
    ///
    /// `cut_zone` is the cut zone's current bounding rect, or `None` when it is
    /// not mounted; in that case the cut message is left as it was.
    pub fn continue_drag(&mut self, pointer: Point, cut_zone: Option<Rect>) {
        let Some(drag) = self.drag else {
            return;
        };

        self.positions[drag.tile] = drag.position_at(pointer);

        if let Some(zone) = cut_zone {
            if zone.contains(pointer) {
                self.cut_message.clone_from(&self.messages[drag.tile]);
            } else {
                self.cut_message.clear();
            }
        }
    }

    /// Pointer-up anywhere in the window.
    ///
    /// Always snaps the dragged tile home. Returns the cut when the last
    /// computed cut message is non-empty. The cut message stays on display.
    pub fn end_drag(&mut self) -> Option<Cut> {
        let drag = self.drag.take()?;
        self.positions[drag.tile] = drag.tile.initial_position();

        if self.cut_message.is_empty() {
            return None;
        }
        Some(Cut { tile: drag.tile, message: self.cut_message.clone() })
    }

    /// Text input on a tile. Stored verbatim.
    pub fn edit_message(&mut self, tile: TileColor, text: impl Into<String>) {
        self.messages[tile] = text.into();
    }
}
