//! The five colored tiles and a per-tile record type.

#[cfg(test)]
#[path = "tile_test.rs"]
mod tile_test;

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::geom::Point;

/// Identifier of a draggable tile. The set is fixed at five colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileColor {
    Green,
    Red,
    Blue,
    Purple,
    Orange,
}

impl TileColor {
    /// All colors in display order (top to bottom on the play field).
    pub const ALL: [TileColor; 5] = [Self::Green, Self::Red, Self::Blue, Self::Purple, Self::Orange];

    /// Lowercase identifier, also the stem of the tile's CSS classes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Orange => "orange",
        }
    }

    /// Capitalized name shown in the scores table.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Green => "Green",
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Purple => "Purple",
            Self::Orange => "Orange",
        }
    }

    /// Resting position of the tile; it snaps back here whenever a drag ends.
    #[must_use]
    pub fn initial_position(self) -> Point {
        let y = match self {
            Self::Green => 100.0,
            Self::Red => 220.0,
            Self::Blue => 340.0,
            Self::Purple => 460.0,
            Self::Orange => 580.0,
        };
        Point::new(10.0, y)
    }

    /// Class of the draggable tile element, e.g. `c_green`.
    #[must_use]
    pub fn tile_class(self) -> String {
        format!("c_{}", self.as_str())
    }

    /// Class of the tile's message input, e.g. `m_green`.
    #[must_use]
    pub fn input_class(self) -> String {
        format!("m_{}", self.as_str())
    }

    /// Placeholder text of the tile's message input.
    #[must_use]
    pub fn placeholder(self) -> String {
        format!("{} Message", self.as_str())
    }
}

impl std::fmt::Display for TileColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per tile color.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerTile<T> {
    pub green: T,
    pub red: T,
    pub blue: T,
    pub purple: T,
    pub orange: T,
}

impl<T> PerTile<T> {
    /// Build a record by evaluating `f` for each color.
    pub fn from_fn(mut f: impl FnMut(TileColor) -> T) -> Self {
        Self {
            green: f(TileColor::Green),
            red: f(TileColor::Red),
            blue: f(TileColor::Blue),
            purple: f(TileColor::Purple),
            orange: f(TileColor::Orange),
        }
    }

    #[must_use]
    pub fn get(&self, color: TileColor) -> &T {
        match color {
            TileColor::Green => &self.green,
            TileColor::Red => &self.red,
            TileColor::Blue => &self.blue,
            TileColor::Purple => &self.purple,
            TileColor::Orange => &self.orange,
        }
    }

    pub fn get_mut(&mut self, color: TileColor) -> &mut T {
        match color {
            TileColor::Green => &mut self.green,
            TileColor::Red => &mut self.red,
            TileColor::Blue => &mut self.blue,
            TileColor::Purple => &mut self.purple,
            TileColor::Orange => &mut self.orange,
        }
    }
}

impl<T> Index<TileColor> for PerTile<T> {
    type Output = T;

    fn index(&self, color: TileColor) -> &T {
        self.get(color)
    }
}

impl<T> IndexMut<TileColor> for PerTile<T> {
    fn index_mut(&mut self, color: TileColor) -> &mut T {
        self.get_mut(color)
    }
}
