// SPDX-License-Identifier: MPL-2.0
//! Search session domain: query normalization, photo records and the
//! pagination state machine.
//!
//! Nothing in this module depends on Iced. The state machine reports what the
//! application should do next through [`Event`] values, so it can be driven
//! directly from tests without a window or a network.

mod photo;
mod query;
mod state;

pub use photo::{Photo, PhotoPage, SelectedImage, DEFAULT_ALT_TEXT};
pub use query::Query;
pub use state::{Event, FetchRequest, SearchState, SessionId, Status};
