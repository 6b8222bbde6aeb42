//! Connection state of the broadcast socket.
//!
//! The transport task reports what happened as [`SocketEvent`]s; the UI owns a
//! [`SocketState`] and folds events into it. The two sides only share a queue.

#[cfg(test)]
#[path = "socket_test.rs"]
mod socket_test;

use crate::peer::PeerLog;

/// Lifecycle of the single connection. It never goes back to `Connecting`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SocketStatus {
    #[default]
    Connecting,
    Open,
    Closed,
}

/// Something the transport observed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SocketEvent {
    Opened,
    Received(String),
    Closed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SocketState {
    pub status: SocketStatus,
    pub peers: PeerLog,
}

impl SocketState {
    pub fn apply(&mut self, event: SocketEvent) {
        match event {
            SocketEvent::Opened => {
                if self.status == SocketStatus::Connecting {
                    self.status = SocketStatus::Open;
                }
            }
            SocketEvent::Received(text) => self.peers.push(text),
            SocketEvent::Closed => self.status = SocketStatus::Closed,
        }
    }

    /// Outbound frames are only attempted while open.
    #[must_use]
    pub fn can_send(&self) -> bool {
        self.status == SocketStatus::Open
    }
}
