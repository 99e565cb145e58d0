// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Search transitions live in [`SearchState`](crate::search::SearchState);
//! the handlers here start the HTTP tasks it asks for and map its events to
//! toasts.

use super::{config, App, Message};
use crate::api::FetchError;
use crate::search::{Event, FetchRequest, PhotoPage, SessionId};
use crate::ui::gallery;
use crate::ui::notifications::Notification;
use crate::ui::search_bar;
use crate::ui::widgets::animated_spinner;
use iced::Task;

const FETCH_ERROR_KEY: &str = "notification-fetch-error";

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::SearchBar(msg) => match app.search_bar.update(msg) {
            search_bar::Event::None => Task::none(),
            search_bar::Event::Submit(raw) => app.submit_search(&raw),
            search_bar::Event::ToggleTheme => {
                app.toggle_theme();
                Task::none()
            }
        },
        Message::LoadMore => match app.search.load_more() {
            Some(request) => {
                app.show_error_details = false;
                app.fetch_page(request)
            }
            None => Task::none(),
        },
        Message::SearchCompleted { request, result } => app.handle_search_completed(request, result),
        Message::ThumbnailLoaded {
            session,
            id,
            result,
        } => {
            app.thumbnails.loaded(session, &id, result);
            Task::none()
        }
        Message::Gallery(gallery::Message::PhotoSelected(index)) => app.open_photo(index),
        Message::Overlay(msg) => {
            app.overlay.update(msg);
            Task::none()
        }
        Message::OverlayImageLoaded { url, result } => {
            app.overlay.image_loaded(&url, result);
            Task::none()
        }
        Message::ToggleErrorDetails => {
            app.show_error_details = !app.show_error_details;
            Task::none()
        }
        Message::EscapePressed => {
            if app.overlay.is_open() {
                app.overlay.close();
            }
            Task::none()
        }
        Message::WindowResized(size) => {
            app.window_width = size.width;
            Task::none()
        }
        Message::Notification(msg) => {
            app.notifications.handle_message(&msg);
            Task::none()
        }
        Message::Tick(_) => {
            app.notifications.tick();
            if app.is_animating() {
                app.spinner_rotation = animated_spinner::advance(app.spinner_rotation);
            }
            Task::none()
        }
    }
}

impl App {
    /// Starts a new search session for `raw_query`.
    pub(super) fn submit_search(&mut self, raw_query: &str) -> Task<Message> {
        let events = self.search.submit(raw_query);
        self.thumbnails.reset(self.search.session());
        self.overlay.close();
        self.last_error = None;
        self.show_error_details = false;
        self.apply_events(events)
    }

    fn apply_events(&mut self, events: Vec<Event>) -> Task<Message> {
        let mut tasks = Vec::new();

        for event in events {
            match event {
                Event::Fetch(request) => tasks.push(self.fetch_page(request)),
                Event::Searching { query } => {
                    self.notifications
                        .push(Notification::info("notification-searching").with_arg("query", query));
                }
                Event::EmptyQuery => {
                    self.notifications
                        .push(Notification::warning("notification-empty-query"));
                }
                Event::NoResults { query } => {
                    self.notifications
                        .push(Notification::info("notification-no-results").with_arg("query", query));
                }
                Event::AllLoaded => {
                    self.notifications
                        .push(Notification::success("notification-all-loaded"));
                }
                Event::FetchFailed { visible } => {
                    // The inline message covers the empty gallery; otherwise
                    // a toast is the only feedback.
                    if !visible {
                        self.notifications.push(Notification::error(FETCH_ERROR_KEY));
                    }
                }
            }
        }

        Task::batch(tasks)
    }

    fn fetch_page(&self, request: FetchRequest) -> Task<Message> {
        let Some(client) = self.client.clone() else {
            return Task::done(Message::SearchCompleted {
                request,
                result: Err(FetchError::Request("HTTP client unavailable".to_string())),
            });
        };

        let query = request.query.clone();
        let page = request.page;
        Task::perform(
            async move { client.fetch(&query, page).await },
            move |result| Message::SearchCompleted { request, result },
        )
    }

    fn handle_search_completed(
        &mut self,
        request: FetchRequest,
        result: Result<PhotoPage, FetchError>,
    ) -> Task<Message> {
        let is_current = request.session == self.search.session();

        let events = match result {
            Ok(page) => {
                let events = self.search.fetch_succeeded(&request, page);
                if is_current {
                    self.last_error = None;
                    self.notifications.clear_key(FETCH_ERROR_KEY);
                }
                events
            }
            Err(err) => {
                tracing::warn!(
                    query = %request.query,
                    page = request.page,
                    error = %err,
                    "search request failed"
                );
                if is_current {
                    self.last_error = Some(err.to_string());
                }
                self.search.fetch_failed(&request)
            }
        };

        let downloads = self.download_thumbnails();
        Task::batch([self.apply_events(events), downloads])
    }

    /// Starts thumbnail downloads for results that have none yet.
    fn download_thumbnails(&mut self) -> Task<Message> {
        let Some(client) = self.client.clone() else {
            return Task::none();
        };
        let session: SessionId = self.search.session();
        let pending = self.thumbnails.request(self.search.photos());

        Task::batch(pending.into_iter().map(|(id, url)| {
            let client = client.clone();
            Task::perform(
                async move { client.download(&url).await },
                move |result| Message::ThumbnailLoaded {
                    session,
                    id,
                    result,
                },
            )
        }))
    }

    fn open_photo(&mut self, index: usize) -> Task<Message> {
        let Some(photo) = self.search.photos().get(index) else {
            return Task::none();
        };
        let url = self.overlay.open(photo.selected_image());

        let Some(client) = self.client.clone() else {
            return Task::none();
        };
        let target = url.clone();
        Task::perform(
            async move { client.download(&target).await },
            move |result| Message::OverlayImageLoaded { url, result },
        )
    }

    fn toggle_theme(&mut self) {
        self.theme_mode = search_bar::next_theme_mode(self.theme_mode);
        self.config.general.theme_mode = self.theme_mode;
        if !self.config_writable {
            tracing::warn!("settings file failed to load, theme change not saved");
            return;
        }
        if let Err(err) = config::save(&self.config) {
            tracing::warn!(error = %err, "failed to save theme preference");
            self.notifications
                .push(Notification::warning("notification-config-save-error"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::{defaults::ENV_ACCESS_KEY, Config};
    use crate::app::paths::{tests::ENV_MUTEX, ENV_CONFIG_DIR};
    use crate::app::Flags;
    use crate::search::{Photo, Status};
    use crate::ui::notifications::Severity;
    use std::fs;
    use tempfile::tempdir;

    fn page(prefix: &str, count: usize, total_pages: u32) -> PhotoPage {
        PhotoPage {
            results: (0..count)
                .map(|i| Photo {
                    id: format!("{prefix}-{i}"),
                    thumb_url: format!("https://img.test/{prefix}/{i}/small"),
                    url: format!("https://img.test/{prefix}/{i}/regular"),
                    alt: None,
                    author: None,
                })
                .collect(),
            total_pages,
        }
    }

    fn first_page_request(app: &App, query: &str) -> FetchRequest {
        FetchRequest {
            query: query.to_string(),
            page: 1,
            session: app.search.session(),
        }
    }

    fn count_key(app: &App, key: &str) -> usize {
        app.notifications
            .visible()
            .filter(|n| n.message_key() == key)
            .count()
    }

    #[test]
    fn failed_load_more_raises_toast_until_next_page_arrives() {
        let mut app = App::default();
        let _ = app.submit_search("cats");
        let request = first_page_request(&app, "cats");
        let _ = app.handle_search_completed(request, Ok(page("p1", 10, 3)));

        let second = app.search.load_more().expect("page 2 should be requested");
        let _ = app.handle_search_completed(second, Err(FetchError::Status(503)));

        assert_eq!(count_key(&app, FETCH_ERROR_KEY), 1);
        assert!(!app.search.shows_error());
        assert_eq!(app.last_error.as_deref(), Some("unexpected HTTP status 503"));

        let retry = app.search.load_more().expect("page 2 should be retried");
        assert_eq!(retry.page, 2);
        let _ = app.handle_search_completed(retry, Ok(page("p2", 10, 3)));

        assert_eq!(count_key(&app, FETCH_ERROR_KEY), 0);
        assert!(app.last_error.is_none());
        assert_eq!(app.search.photos().len(), 20);
        assert_eq!(app.search.status(), Status::HasMore);
    }

    #[test]
    fn failed_first_page_shows_inline_error_without_toast() {
        let mut app = App::default();
        let _ = app.submit_search("cats");
        let request = first_page_request(&app, "cats");
        let _ = app.handle_search_completed(request, Err(FetchError::Status(500)));

        assert!(app.search.shows_error());
        assert_eq!(count_key(&app, FETCH_ERROR_KEY), 0);
    }

    #[test]
    fn blank_submit_warns_and_stays_idle() {
        let mut app = App::default();
        let _ = app.submit_search("   ");

        assert_eq!(app.search.status(), Status::Idle);
        assert_eq!(count_key(&app, "notification-empty-query"), 1);
        assert_eq!(count_key(&app, "notification-searching"), 0);
    }

    #[test]
    fn new_submit_resets_thumbnails_and_closes_overlay() {
        let mut app = App::default();
        let _ = app.submit_search("cats");
        let request = first_page_request(&app, "cats");
        let _ = app.handle_search_completed(request, Ok(page("cats", 4, 2)));
        app.thumbnails.request(app.search.photos());
        let _ = app.open_photo(0);
        app.show_error_details = true;
        assert_eq!(app.thumbnails.len(), 4);
        assert!(app.overlay.is_open());

        let _ = app.submit_search("dogs");

        assert!(app.thumbnails.is_empty());
        assert!(!app.overlay.is_open());
        assert!(!app.show_error_details);
        assert!(app.search.photos().is_empty());
    }

    #[test]
    fn stale_failure_leaves_current_session_untouched() {
        let mut app = App::default();
        let _ = app.submit_search("cats");
        let stale = first_page_request(&app, "cats");
        let _ = app.submit_search("dogs");

        let _ = app.handle_search_completed(stale, Err(FetchError::Status(500)));

        assert!(app.last_error.is_none());
        assert_eq!(app.search.status(), Status::Loading);
        assert_eq!(count_key(&app, FETCH_ERROR_KEY), 0);
    }

    #[test]
    fn unread_error_toast_does_not_keep_ticking() {
        let mut app = App::default();
        app.notifications.push(Notification::error(FETCH_ERROR_KEY));
        assert!(!app.needs_tick());

        let _ = app.submit_search("cats");
        assert!(app.needs_tick());

        let request = first_page_request(&app, "cats");
        let _ = app.handle_search_completed(request, Ok(page("cats", 4, 2)));
        app.notifications.clear_key("notification-searching");
        assert!(!app.needs_tick());
    }

    #[test]
    fn missing_access_key_warns_at_startup() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_ACCESS_KEY);

        let (app, _) = App::with_config(Flags::default(), Config::default(), None);

        let warning = app
            .notifications
            .visible()
            .find(|n| n.message_key() == "notification-missing-access-key")
            .expect("missing key warning");
        assert_eq!(warning.severity(), Severity::Warning);
        assert!(app.client.is_some());
    }

    #[test]
    fn theme_toggle_does_not_overwrite_unreadable_settings() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let temp_dir = tempdir().expect("failed to create temp dir");
        let settings = temp_dir.path().join("settings.toml");
        let original = "[api]\naccess_key = \"secret\"\nbroken = = toml\n";
        fs::write(&settings, original).expect("failed to write settings");
        std::env::set_var(ENV_CONFIG_DIR, temp_dir.path());

        let (mut app, _) = App::new(Flags::default());
        let before = app.theme_mode;
        app.toggle_theme();

        std::env::remove_var(ENV_CONFIG_DIR);
        assert_ne!(app.theme_mode, before);
        assert_eq!(
            fs::read_to_string(&settings).expect("failed to read settings"),
            original
        );
        assert_eq!(count_key(&app, "notification-config-load-error"), 1);
    }

    #[test]
    fn theme_toggle_saves_readable_settings() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let temp_dir = tempdir().expect("failed to create temp dir");
        std::env::set_var(ENV_CONFIG_DIR, temp_dir.path());

        let (mut app, _) = App::new(Flags::default());
        app.toggle_theme();
        let (saved, warning) = config::load();

        std::env::remove_var(ENV_CONFIG_DIR);
        assert!(warning.is_none());
        assert_eq!(saved.general.theme_mode, app.theme_mode);
    }
}
