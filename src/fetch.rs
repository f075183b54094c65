//! Retrieval of the provider's forecast page.

use log::{debug, warn};
use reqwest::blocking::Client;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network request failed for {0}")]
    Network(String, #[source] reqwest::Error),

    #[error("request for {url} returned HTTP status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response body for {0}")]
    Body(String, #[source] reqwest::Error),
}

/// Issues the single blocking GET and returns the response body.
///
/// A non-success status is terminal; it is reported as
/// [`FetchError::HttpStatus`] and never retried.
pub(crate) fn fetch_html(client: &Client, url: &str) -> Result<String, FetchError> {
    debug!("requesting {url}");
    let response = client
        .get(url)
        .send()
        .map_err(|e| FetchError::Network(url.to_string(), e))?;

    let response = match response.error_for_status() {
        Ok(response) => response,
        Err(e) => {
            warn!("HTTP error for {url}: {e}");
            return Err(match e.status() {
                Some(status) => FetchError::HttpStatus {
                    url: url.to_string(),
                    status,
                    source: e,
                },
                None => FetchError::Network(url.to_string(), e),
            });
        }
    };

    response
        .text()
        .map_err(|e| FetchError::Body(url.to_string(), e))
}
