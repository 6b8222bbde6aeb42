//! Quote panel state and response handling.
//!
//! The quote provider answers with a JSON array of strings. Only the first
//! element is shown. Fetching itself lives in the callers (`gloo-net` in the
//! browser, `reqwest` in the CLI); both funnel results through here so the
//! success/fallback/error rules are identical.

#[cfg(test)]
#[path = "quote_test.rs"]
mod quote_test;

/// Shown when the provider returns an empty list.
pub const NO_QUOTE_FALLBACK: &str = "No quote available.";

/// Shown before any quote has arrived.
pub const LOADING_PLACEHOLDER: &str = "Loading quote...";

/// Prefix of every user-visible fetch failure.
pub const FAILURE_PREFIX: &str = "Failed to load quote: ";

/// Why a quote fetch failed. The display text is the underlying reason.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoteError {
    /// The provider answered with a non-2xx status.
    #[error("Error fetching quote: {0}")]
    Status(String),
    /// The request never produced a response.
    #[error("{0}")]
    Network(String),
    /// The body was not a JSON array of strings.
    #[error("invalid quote body: {0}")]
    Decode(String),
}

/// Map an HTTP status to `Ok` for 2xx and [`QuoteError::Status`] otherwise.
///
/// # Errors
///
/// Returns [`QuoteError::Status`] carrying `status_text` for non-2xx statuses.
pub fn check_status(status: u16, status_text: &str) -> Result<(), QuoteError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(QuoteError::Status(status_text.to_owned()))
    }
}

/// Decode a provider response body.
///
/// # Errors
///
/// Returns [`QuoteError::Decode`] if the body is not a JSON array of strings.
pub fn decode_quotes(body: &str) -> Result<Vec<String>, QuoteError> {
    serde_json::from_str(body).map_err(|e| QuoteError::Decode(e.to_string()))
}

/// The quote to display for a decoded list: its first element, or the
/// fallback when the list is empty or starts with an empty string.
#[must_use]
pub fn pick_quote(quotes: &[String]) -> String {
    match quotes.first() {
        Some(q) if !q.is_empty() => q.clone(),
        _ => NO_QUOTE_FALLBACK.to_owned(),
    }
}

/// Current contents of the quote panel. Quote and error are exclusive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum QuoteState {
    /// Nothing fetched yet.
    #[default]
    Pending,
    Ready(String),
    Failed(String),
}

impl QuoteState {
    /// Fold a fetch result into the panel. The latest result always wins.
    pub fn apply(&mut self, result: Result<Vec<String>, QuoteError>) {
        *self = match result {
            Ok(quotes) => Self::Ready(pick_quote(&quotes)),
            Err(e) => Self::Failed(format!("{FAILURE_PREFIX}{e}")),
        };
    }

    /// Current error, empty unless the latest fetch failed.
    #[must_use]
    pub fn error(&self) -> &str {
        match self {
            Self::Failed(e) => e,
            _ => "",
        }
    }

    /// Text for the read-only quote input when there is no error.
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self {
            Self::Ready(q) => q,
            _ => LOADING_PLACEHOLDER,
        }
    }
}
