// SPDX-License-Identifier: MPL-2.0
//! `iced_photo_search` is a desktop image search client built with the Iced
//! GUI framework.
//!
//! Queries are sent to the Unsplash search API, results are paginated into a
//! responsive gallery and any photo can be enlarged in an overlay viewer.
//! The search state machine in [`search`] has no UI dependency and can be
//! driven directly.

pub mod api;
pub mod app;
pub mod error;
pub mod i18n;
pub mod search;
pub mod ui;
