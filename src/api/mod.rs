// SPDX-License-Identifier: MPL-2.0
//! HTTP access to the photo search provider.
//!
//! [`UnsplashClient`] performs one request per call and never retries. Every
//! failure is reported as a [`FetchError`]; the search state machine treats
//! all variants the same way, the distinction only matters for logs.

mod unsplash;

pub use unsplash::{parse_search_response, UnsplashClient, MAX_CONCURRENT_DOWNLOADS, USER_AGENT};

use thiserror::Error;

/// Errors raised while talking to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No API access key was configured.
    #[error("no API access key configured")]
    MissingAccessKey,

    /// The configured base URL or a photo URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Connection, TLS or transport failure.
    #[error("request failed: {0}")]
    Request(String),

    /// The provider answered with a non-success status code.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The response body did not match the expected format.
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
