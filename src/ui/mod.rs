// SPDX-License-Identifier: MPL-2.0
//! User interface components, following the Elm-style "state down,
//! messages up" pattern.
//!
//! # Components
//!
//! - [`search_bar`] - Query input, search button and theme toggle
//! - [`gallery`] - Responsive thumbnail grid
//! - [`overlay`] - Full-size image viewer
//! - [`error_message`] - Inline failure message
//! - [`notifications`] - Toast notifications
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode

pub mod design_tokens;
pub mod error_message;
pub mod gallery;
pub mod notifications;
pub mod overlay;
pub mod search_bar;
pub mod styles;
pub mod theming;
pub mod widgets;
