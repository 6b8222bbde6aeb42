//! Client configuration.
//!
//! Endpoints default to the values in `cutting::endpoint`. A build can
//! override them through environment variables read at compile time:
//!
//! - `CUT_HERE_QUOTE_URL`: quote provider URL
//! - `CUT_HERE_SOCKET_PORT`: broadcast socket port
//!
//! An unparseable port is reported and ignored.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use cutting::endpoint::{QUOTE_URL, Scheme, SocketEndpoint};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub quote_url: String,
    pub socket: SocketEndpoint,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { quote_url: QUOTE_URL.to_owned(), socket: SocketEndpoint::default() }
    }
}

impl ClientConfig {
    /// Resolve the configuration baked in at build time.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("CUT_HERE_QUOTE_URL"), option_env!("CUT_HERE_SOCKET_PORT"))
    }

    fn from_values(quote_url: Option<&str>, socket_port: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(url) = quote_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.quote_url = url.to_owned();
        }

        if let Some(raw) = socket_port {
            match raw.trim().parse::<u16>() {
                Ok(port) => config.socket.port = port,
                Err(e) => {
                    leptos::logging::warn!("ignoring CUT_HERE_SOCKET_PORT={raw:?}: {e}");
                }
            }
        }

        config
    }

    /// Socket URL for a page served over `page_protocol` (e.g. `"https:"`) from `hostname`.
    pub fn socket_url(&self, page_protocol: &str, hostname: &str) -> String {
        self.socket.url(Scheme::from_page_protocol(page_protocol), hostname)
    }
}
