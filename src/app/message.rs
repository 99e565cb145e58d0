// SPDX-License-Identifier: MPL-2.0
//! Top-level application messages and startup flags.

use crate::api::FetchError;
use crate::search::{FetchRequest, PhotoPage, SessionId};
use crate::ui::notifications;
use crate::ui::{gallery, overlay, search_bar};
use iced::Size;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    SearchBar(search_bar::Message),
    Gallery(gallery::Message),
    Overlay(overlay::Message),
    Notification(notifications::NotificationMessage),
    LoadMore,
    SearchCompleted {
        request: FetchRequest,
        result: Result<PhotoPage, FetchError>,
    },
    ThumbnailLoaded {
        session: SessionId,
        id: String,
        result: Result<Vec<u8>, FetchError>,
    },
    OverlayImageLoaded {
        url: String,
        result: Result<Vec<u8>, FetchError>,
    },
    ToggleErrorDetails,
    EscapePressed,
    WindowResized(Size),
    Tick(Instant),
}

/// Runtime flags passed from the command line into the application.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PHOTO_SEARCH_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Query submitted as soon as the window opens.
    pub query: Option<String>,
}
