//! Networking: the quote provider over HTTP and the broadcast socket.
//!
//! SYSTEM CONTEXT
//! ==============
//! `quote_api` performs the single GET the quote panel needs, and
//! `peer_socket` owns the one WebSocket the play page opens on mount.
//! Neither endpoint belongs to this repository.

pub mod peer_socket;
pub mod quote_api;
