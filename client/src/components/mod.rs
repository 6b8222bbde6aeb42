//! UI building blocks composed by the pages.

pub mod cut_zone;
pub mod nav_bar;
pub mod peer_messages;
pub mod quote_panel;
pub mod tile;
