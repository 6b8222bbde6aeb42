//! Fixed external endpoints and WebSocket URL construction.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

/// Quote provider queried by the quote panel.
pub const QUOTE_URL: &str = "https://ron-swanson-quotes.herokuapp.com/v2/quotes";

/// Port of the broadcast socket, on the same host that served the page.
pub const SOCKET_PORT: u16 = 8080;

/// Path of the broadcast socket.
pub const SOCKET_PATH: &str = "/ws";

/// WebSocket scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scheme {
    Ws,
    Wss,
}

impl Scheme {
    /// Mirror the page's own scheme: plain `http:` gets `ws`, everything else `wss`.
    #[must_use]
    pub fn from_page_protocol(protocol: &str) -> Self {
        if protocol == "http:" { Self::Ws } else { Self::Wss }
    }

    #[must_use]
    pub fn from_secure(secure: bool) -> Self {
        if secure { Self::Wss } else { Self::Ws }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ws => "ws",
            Self::Wss => "wss",
        }
    }
}

/// Where the broadcast socket listens, relative to a host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocketEndpoint {
    pub port: u16,
    pub path: String,
}

impl Default for SocketEndpoint {
    fn default() -> Self {
        Self { port: SOCKET_PORT, path: SOCKET_PATH.to_owned() }
    }
}

impl SocketEndpoint {
    /// Full socket URL for `host` (a bare hostname, without port).
    #[must_use]
    pub fn url(&self, scheme: Scheme, host: &str) -> String {
        format!("{}://{host}:{}{}", scheme.as_str(), self.port, self.path)
    }
}
