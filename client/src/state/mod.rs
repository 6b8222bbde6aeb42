//! Client-side state that is not part of the game model.
//!
//! DESIGN
//! ======
//! Game state (`PlayState`, `ScoreMap`, `SocketState`, `QuoteState`) comes
//! from the `cutting` crate and is held in signals owned by the component
//! that mutates it. Only app-wide session data lives here.

pub mod session;
