// SPDX-License-Identifier: MPL-2.0
//! Unsplash search API client.
//!
//! Only the `GET /search/photos` endpoint is used, plus plain `GET` requests
//! for downloading image bytes from the CDN URLs it returns.

use super::FetchError;
use crate::app::config::ApiConfig;
use crate::search::{Photo, PhotoPage};
use reqwest::Url;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("IcedPhotoSearch/", env!("CARGO_PKG_VERSION"));

/// API version pinned through the `Accept-Version` header.
const API_VERSION: &str = "v1";

/// Image downloads allowed in flight at once, shared by every clone.
pub const MAX_CONCURRENT_DOWNLOADS: usize = 6;

/// Client for one configured provider endpoint.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct UnsplashClient {
    http: reqwest::Client,
    base_url: String,
    access_key: Option<String>,
    per_page: u32,
    orientation: Option<String>,
    downloads: Arc<Semaphore>,
}

impl UnsplashClient {
    /// Builds a client from the `[api]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            access_key: config.resolved_access_key(),
            per_page: config.per_page(),
            orientation: config.orientation.map(|o| o.as_str().to_string()),
            downloads: Arc::new(Semaphore::new(MAX_CONCURRENT_DOWNLOADS)),
        })
    }

    /// Whether an access key is available.
    #[must_use]
    pub fn has_access_key(&self) -> bool {
        self.access_key.is_some()
    }

    /// Builds the search URL for `query` and `page`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] if the configured base URL is malformed.
    pub fn search_url(&self, query: &str, page: u32) -> Result<Url, FetchError> {
        let endpoint = format!("{}/search/photos", self.base_url.trim_end_matches('/'));
        let mut url = Url::parse(&endpoint).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("query", query)
                .append_pair("page", &page.to_string())
                .append_pair("per_page", &self.per_page.to_string());
            if let Some(orientation) = &self.orientation {
                pairs.append_pair("orientation", orientation);
            }
        }
        Ok(url)
    }

    /// Fetches one page of results for `query`.
    ///
    /// # Errors
    ///
    /// Fails when no access key is configured, on any transport error, on a
    /// non-success status and when the body cannot be decoded.
    pub async fn fetch(&self, query: &str, page: u32) -> Result<PhotoPage, FetchError> {
        let access_key = self
            .access_key
            .as_deref()
            .ok_or(FetchError::MissingAccessKey)?;
        let url = self.search_url(query, page)?;

        tracing::info!(%query, page, "requesting search results");
        let response = self
            .http
            .get(url)
            .header(reqwest::header::AUTHORIZATION, format!("Client-ID {access_key}"))
            .header("Accept-Version", API_VERSION)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let page_data = parse_search_response(&body)?;
        tracing::debug!(
            results = page_data.results.len(),
            total_pages = page_data.total_pages,
            "search page received"
        );
        Ok(page_data)
    }

    /// Downloads raw image bytes from a photo URL.
    ///
    /// At most [`MAX_CONCURRENT_DOWNLOADS`] downloads run at once; the rest
    /// wait for a slot.
    ///
    /// # Errors
    ///
    /// Fails on malformed URLs, transport errors and non-success statuses.
    pub async fn download(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let url = Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        let _permit = self
            .downloads
            .acquire()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

// =============================================================================
// Wire Format
// =============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    total_pages: u32,
    #[serde(default)]
    results: Vec<WirePhoto>,
}

#[derive(Debug, Deserialize)]
struct WirePhoto {
    id: String,
    #[serde(default)]
    alt_description: Option<String>,
    #[serde(default)]
    description: Option<String>,
    urls: WireUrls,
    #[serde(default)]
    user: Option<WireUser>,
}

#[derive(Debug, Deserialize)]
struct WireUrls {
    small: String,
    regular: String,
}

#[derive(Debug, Deserialize)]
struct WireUser {
    #[serde(default)]
    name: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl From<WirePhoto> for Photo {
    fn from(wire: WirePhoto) -> Self {
        Photo {
            id: wire.id,
            thumb_url: wire.urls.small,
            url: wire.urls.regular,
            alt: non_blank(wire.alt_description).or_else(|| non_blank(wire.description)),
            author: wire.user.and_then(|u| non_blank(u.name)),
        }
    }
}

/// Parses a `/search/photos` response body.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] when the JSON does not match the schema.
pub fn parse_search_response(body: &str) -> Result<PhotoPage, FetchError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(PhotoPage {
        results: response.results.into_iter().map(Photo::from).collect(),
        total_pages: response.total_pages,
    })
}
