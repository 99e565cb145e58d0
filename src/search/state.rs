// SPDX-License-Identifier: MPL-2.0
//! Pagination and result state for a search session.
//!
//! A session starts every time a query is submitted. Results accumulate page
//! by page until the provider reports no further pages. Responses are tagged
//! with the [`SessionId`] they were requested for; anything arriving for an
//! older session is dropped, which keeps the result set append-only for the
//! active query.
//!
//! # Lifecycle
//!
//! ```text
//! Idle ──submit──▶ Loading ──ok──▶ HasMore ──load_more──▶ Loading
//!                     │                                      │
//!                     ├──ok (last page)──▶ Complete ◀──ok────┘
//!                     └──err──▶ Errored
//! ```

use super::photo::{Photo, PhotoPage};
use super::query::Query;

/// Monotonic identifier of a search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SessionId(u64);

impl SessionId {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Observable state of the search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// No active query.
    Idle,
    /// A page request is in flight.
    Loading,
    /// Results loaded and more pages are available.
    HasMore,
    /// Every page of the query has been loaded.
    Complete,
    /// The last request failed.
    Errored,
}

/// A page request the application must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub query: String,
    pub page: u32,
    pub session: SessionId,
}

/// Side effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Start fetching the given page.
    Fetch(FetchRequest),
    /// A new search started.
    Searching { query: String },
    /// The submitted query was blank.
    EmptyQuery,
    /// The first page of the query came back empty.
    NoResults { query: String },
    /// Every page of the query has been downloaded. Emitted once per query.
    AllLoaded,
    /// A request failed. `visible` is true when the inline error is shown.
    FetchFailed { visible: bool },
}

/// Results and pagination for the active query.
#[derive(Debug, Clone)]
pub struct SearchState {
    query: Query,
    page: u32,
    total_pages: u32,
    photos: Vec<Photo>,
    is_loading: bool,
    is_error: bool,
    session: SessionId,
    all_loaded_announced: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: Query::default(),
            page: 1,
            total_pages: 0,
            photos: Vec::new(),
            is_loading: false,
            is_error: false,
            session: SessionId::default(),
            all_loaded_announced: false,
        }
    }
}

impl SearchState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new session for `raw_query`.
    ///
    /// Results and pagination are reset regardless of the query content. A
    /// blank query leaves the state idle; anything else requests page 1.
    pub fn submit(&mut self, raw_query: &str) -> Vec<Event> {
        self.query = Query::new(raw_query);
        self.session = self.session.next();
        self.photos.clear();
        self.page = 1;
        self.total_pages = 0;
        self.is_error = false;
        self.all_loaded_announced = false;

        if self.query.is_empty() {
            self.is_loading = false;
            tracing::debug!("blank query submitted, search is idle");
            return vec![Event::EmptyQuery];
        }

        self.is_loading = true;
        tracing::debug!(query = %self.query, session = self.session.0, "search started");
        vec![
            Event::Searching {
                query: self.query.to_string(),
            },
            Event::Fetch(self.current_request()),
        ]
    }

    /// Requests the next page if one is available and nothing is in flight.
    ///
    /// Returns `None` when loading more is not possible.
    pub fn load_more(&mut self) -> Option<FetchRequest> {
        if !self.can_load_more() {
            return None;
        }
        self.page += 1;
        self.is_loading = true;
        self.is_error = false;
        tracing::debug!(query = %self.query, page = self.page, "loading next page");
        Some(self.current_request())
    }

    /// Applies a successful response.
    pub fn fetch_succeeded(&mut self, request: &FetchRequest, page: PhotoPage) -> Vec<Event> {
        if !self.is_current(request) {
            tracing::debug!(page = request.page, "dropping response for a stale request");
            return Vec::new();
        }

        self.is_loading = false;
        self.is_error = false;
        self.total_pages = page.total_pages;
        self.photos.extend(page.results);

        let mut events = Vec::new();
        if self.photos.is_empty() && self.page == 1 {
            events.push(Event::NoResults {
                query: self.query.to_string(),
            });
        }
        if self.status() == Status::Complete
            && !self.photos.is_empty()
            && !self.all_loaded_announced
        {
            self.all_loaded_announced = true;
            events.push(Event::AllLoaded);
        }
        events
    }

    /// Applies a failed response.
    ///
    /// A failed "load more" rolls the page back so the next request asks for
    /// the same page again instead of skipping it.
    pub fn fetch_failed(&mut self, request: &FetchRequest) -> Vec<Event> {
        if !self.is_current(request) {
            tracing::debug!(page = request.page, "dropping failure for a stale request");
            return Vec::new();
        }

        self.is_loading = false;
        self.is_error = true;
        if self.page > 1 {
            self.page -= 1;
        }

        vec![Event::FetchFailed {
            visible: self.shows_error(),
        }]
    }

    #[must_use]
    pub fn status(&self) -> Status {
        if self.query.is_empty() {
            Status::Idle
        } else if self.is_loading {
            Status::Loading
        } else if self.is_error {
            Status::Errored
        } else if self.page >= self.total_pages {
            Status::Complete
        } else {
            Status::HasMore
        }
    }

    /// Whether the "load more" action is available.
    #[must_use]
    pub fn can_load_more(&self) -> bool {
        !self.query.is_empty() && !self.is_loading && self.page < self.total_pages
    }

    /// Whether the inline error message should be rendered.
    #[must_use]
    pub fn shows_error(&self) -> bool {
        self.is_error && self.photos.is_empty() && !self.query.is_empty()
    }

    #[must_use]
    pub fn query(&self) -> &Query {
        &self.query
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.is_error
    }

    #[must_use]
    pub fn session(&self) -> SessionId {
        self.session
    }

    fn current_request(&self) -> FetchRequest {
        FetchRequest {
            query: self.query.to_string(),
            page: self.page,
            session: self.session,
        }
    }

    fn is_current(&self, request: &FetchRequest) -> bool {
        self.is_loading && request.session == self.session && request.page == self.page
    }
}
