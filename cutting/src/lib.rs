//! Shared game model for the "Cut Here" message cutting game.
//!
//! This crate owns everything about the game that does not need a browser:
//! the five tiles, screen geometry, the drag/cut reducer, the score map, the
//! peer message log, quote state, and the socket endpoint. Both `client` and
//! `cli` build on it, and all of it is testable natively.
//!
//! DESIGN
//! ======
//! Per-color state is a `PerTile<T>` record with one field per color rather
//! than a string-keyed map, so adding or removing a color is a compile error
//! everywhere it matters.

pub mod drag;
pub mod endpoint;
pub mod geom;
pub mod peer;
pub mod play;
pub mod quote;
pub mod scores;
pub mod socket;
pub mod tile;

pub use geom::{Point, Rect};
pub use play::{Cut, PlayState};
pub use tile::{PerTile, TileColor};
