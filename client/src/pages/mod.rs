//! Route-level pages.
//!
//! Each page pulls shared state out of context and hands it to its
//! component as props, keeping the components independent of the container.

pub mod play;
pub mod scores;
