//! Score map: the last message cut for each color.

#[cfg(test)]
#[path = "scores_test.rs"]
mod scores_test;

use serde::{Deserialize, Serialize};

use crate::play::Cut;
use crate::tile::{PerTile, TileColor};

/// Last cut message per color. Absent entries read as `""`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreMap {
    entries: PerTile<Option<String>>,
}

/// One row of the scores table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreRow<'a> {
    /// 1-based row number.
    pub rank: usize,
    pub color: TileColor,
    pub message: &'a str,
}

impl ScoreMap {
    /// Overwrite the entry for `tile`.
    pub fn record(&mut self, tile: TileColor, message: impl Into<String>) {
        self.entries[tile] = Some(message.into());
    }

    /// Record a cut under its tile.
    pub fn apply_cut(&mut self, cut: &Cut) {
        self.record(cut.tile, cut.message.clone());
    }

    #[must_use]
    pub fn get(&self, tile: TileColor) -> &str {
        self.entries[tile].as_deref().unwrap_or_default()
    }

    /// Fixed five rows in color order.
    pub fn rows(&self) -> impl Iterator<Item = ScoreRow<'_>> {
        TileColor::ALL.into_iter().enumerate().map(|(i, color)| ScoreRow {
            rank: i + 1,
            color,
            message: self.get(color),
        })
    }
}
