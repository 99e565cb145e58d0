// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Api**: Search endpoint and page size
//! - **Gallery**: Tile sizing bounds

// ==========================================================================
// Api Defaults
// ==========================================================================

/// Default search provider endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.unsplash.com";

/// Environment variable holding the provider access key.
/// Takes precedence over the `[api] access_key` setting.
pub const ENV_ACCESS_KEY: &str = "PHOTO_SEARCH_ACCESS_KEY";

/// Default number of results requested per page.
pub const DEFAULT_PER_PAGE: u32 = 12;

/// Minimum results per page.
pub const MIN_PER_PAGE: u32 = 1;

/// Maximum results per page accepted by the provider.
pub const MAX_PER_PAGE: u32 = 30;

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Default gallery tile width in logical pixels.
pub const DEFAULT_TILE_WIDTH: f32 = 240.0;

/// Minimum gallery tile width.
pub const MIN_TILE_WIDTH: f32 = 120.0;

/// Maximum gallery tile width.
pub const MAX_TILE_WIDTH: f32 = 480.0;

const _: () = {
    assert!(MIN_PER_PAGE <= DEFAULT_PER_PAGE && DEFAULT_PER_PAGE <= MAX_PER_PAGE);
    assert!(MIN_TILE_WIDTH <= DEFAULT_TILE_WIDTH && DEFAULT_TILE_WIDTH <= MAX_TILE_WIDTH);
};
