// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for search feedback.
//!
//! Notifications are fire-and-forget: the search flow pushes one when a
//! search starts, when every page has been loaded, when nothing matched
//! and when a request fails. Nothing waits on them.
//!
//! # Components
//!
//! - [`Notification`] with its [`Severity`]
//! - [`Manager`] for queuing, auto-dismiss and dismissal
//! - [`Toast`] for rendering
//!
//! # Usage
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::info("notification-searching").with_arg("query", "cats"));
//!
//! let toasts = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! - Toast duration: ~3s for success/info, ~5s for warnings, manual dismiss for errors
//! - Max visible toasts: 3 (others are queued)
//! - Position: bottom-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
