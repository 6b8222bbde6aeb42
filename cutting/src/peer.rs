//! Append-only log of messages received from peers.

#[cfg(test)]
#[path = "peer_test.rs"]
mod peer_test;

/// Messages received over the socket, in arrival order.
///
/// Unbounded. Nothing is ever removed, reordered, or deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PeerLog {
    messages: Vec<String>,
}

impl PeerLog {
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }
}
