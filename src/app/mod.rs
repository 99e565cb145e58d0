// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! `App` owns the search session, the gallery thumbnails, the overlay viewer
//! and the toast queue. The search state machine decides what happens; this
//! module turns its events into HTTP tasks and notifications.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::UnsplashClient;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::search::SearchState;
use crate::ui::gallery::Thumbnails;
use crate::ui::notifications::{self, Notification};
use crate::ui::overlay::{self, Viewer};
use crate::ui::search_bar;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: config::Config,
    theme_mode: ThemeMode,
    client: Option<UnsplashClient>,
    search_bar: search_bar::State,
    search: SearchState,
    thumbnails: Thumbnails,
    overlay: Viewer,
    notifications: notifications::Manager,
    /// Cause of the last failed request of the current session.
    last_error: Option<String>,
    show_error_details: bool,
    /// False when `settings.toml` could not be parsed, so the user's file is
    /// never replaced with defaults.
    config_writable: bool,
    window_width: f32,
    spinner_rotation: f32,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("query", &self.search.query())
            .field("photos", &self.search.photos().len())
            .field("overlay_open", &self.overlay.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 400;

#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: config::Config::default(),
            theme_mode: ThemeMode::System,
            client: None,
            search_bar: search_bar::State::default(),
            search: SearchState::new(),
            thumbnails: Thumbnails::default(),
            overlay: Viewer::default(),
            notifications: notifications::Manager::new(),
            last_error: None,
            show_error_details: false,
            config_writable: true,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            spinner_rotation: 0.0,
        }
    }
}

impl App {
    /// Loads preferences, builds the HTTP client and submits the initial
    /// query from the command line, if any.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_config(flags, config, config_warning)
    }

    fn with_config(
        flags: Flags,
        config: config::Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            config_writable: config_warning.is_none(),
            ..Self::default()
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        match UnsplashClient::new(&config.api) {
            Ok(client) => {
                if !client.has_access_key() {
                    app.notifications
                        .push(Notification::warning("notification-missing-access-key"));
                }
                app.client = Some(client);
            }
            Err(err) => {
                let err = Error::from(err);
                tracing::error!(error = %err, "failed to initialize HTTP client");
                app.notifications
                    .push(Notification::error("notification-fetch-error"));
            }
        }
        app.config = config;

        let task = match flags.query {
            Some(query) => {
                app.search_bar = search_bar::State::with_input(query.clone());
                app.submit_search(&query)
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let base = self.i18n.tr("window-title");
        if self.search.query().is_empty() {
            base
        } else {
            format!("{} - {base}", self.search.query())
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    /// Whether the spinner is visible and needs animation ticks.
    fn is_animating(&self) -> bool {
        self.search.is_loading()
            || matches!(self.overlay.content(), Some(overlay::Content::Loading))
    }

    /// Whether the periodic tick has work to do.
    fn needs_tick(&self) -> bool {
        self.notifications.has_expiring() || self.is_animating()
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick_active = self.needs_tick();
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(tick_active),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme_mode: self.theme_mode,
            search_bar: &self.search_bar,
            search: &self.search,
            thumbnails: &self.thumbnails,
            overlay: &self.overlay,
            notifications: &self.notifications,
            tile_width: self.config.gallery.tile_width(),
            window_width: self.window_width,
            spinner_rotation: self.spinner_rotation,
            last_error: self.last_error.as_deref(),
            show_error_details: self.show_error_details,
        })
    }
}
