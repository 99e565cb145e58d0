// SPDX-License-Identifier: MPL-2.0
//! Photo records returned by the search API.

/// Alt text used when a photo has no description.
pub const DEFAULT_ALT_TEXT: &str = "Image";

/// A single search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
    /// Provider identifier, unique within one result set.
    pub id: String,
    /// Small rendition used for gallery tiles.
    pub thumb_url: String,
    /// Large rendition shown in the overlay viewer.
    pub url: String,
    /// Human readable description, if the provider has one.
    pub alt: Option<String>,
    /// Name of the photographer.
    pub author: Option<String>,
}

impl Photo {
    /// Returns the alt text, falling back to [`DEFAULT_ALT_TEXT`].
    #[must_use]
    pub fn alt_text(&self) -> &str {
        self.alt
            .as_deref()
            .filter(|alt| !alt.trim().is_empty())
            .unwrap_or(DEFAULT_ALT_TEXT)
    }

    /// Builds the overlay selection for this photo.
    #[must_use]
    pub fn selected_image(&self) -> SelectedImage {
        SelectedImage {
            url: self.url.clone(),
            alt: self.alt_text().to_string(),
        }
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhotoPage {
    pub results: Vec<Photo>,
    pub total_pages: u32,
}

/// The image displayed by the overlay viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    pub url: String,
    pub alt: String,
}
