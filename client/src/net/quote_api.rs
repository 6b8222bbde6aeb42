//! Quote provider client.
//!
//! Client-side (csr): a real `GET` via `gloo-net`.
//! Native builds: a stub error, since the request only makes sense in a browser.

#![allow(clippy::unused_async)]

use cutting::quote::QuoteError;

/// Fetch the provider's list of quotes from `url`.
///
/// # Errors
///
/// [`QuoteError::Network`] when the request fails, [`QuoteError::Status`] on a
/// non-2xx response, and [`QuoteError::Decode`] when the body is not a JSON
/// array of strings.
pub async fn fetch_quotes(url: &str) -> Result<Vec<String>, QuoteError> {
    #[cfg(feature = "csr")]
    {
        use cutting::quote::{check_status, decode_quotes};

        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| QuoteError::Network(e.to_string()))?;
        check_status(resp.status(), &resp.status_text())?;
        let body = resp
            .text()
            .await
            .map_err(|e| QuoteError::Network(e.to_string()))?;
        decode_quotes(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(QuoteError::Network("quote fetch requires a browser".to_owned()))
    }
}
