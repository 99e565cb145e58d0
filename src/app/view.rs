// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: search header and results, the overlay viewer when
//! open, then the toasts.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::search::SearchState;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::error_message::ErrorMessage;
use crate::ui::gallery::{self, Thumbnails};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::overlay::Viewer;
use crate::ui::search_bar;
use crate::ui::styles::button as button_styles;
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, container, scrollable, Column, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub search_bar: &'a search_bar::State,
    pub search: &'a SearchState,
    pub thumbnails: &'a Thumbnails,
    pub overlay: &'a Viewer,
    pub notifications: &'a Manager,
    pub tile_width: f32,
    pub window_width: f32,
    pub spinner_rotation: f32,
    pub last_error: Option<&'a str>,
    pub show_error_details: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = ctx
        .search_bar
        .view(ctx.i18n, ctx.theme_mode)
        .map(Message::SearchBar);

    let content = Column::new()
        .push(header)
        .push(
            scrollable(view_results(&ctx))
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content);

    if let Some(overlay) = ctx.overlay.view(ctx.i18n, ctx.spinner_rotation) {
        layers = layers.push(overlay.map(Message::Overlay));
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}

fn view_results<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let search = ctx.search;
    let mut body = Column::new()
        .spacing(spacing::MD)
        .padding([spacing::XS, spacing::MD])
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    if !search.photos().is_empty() {
        body = body.push(
            gallery::view(gallery::ViewContext {
                photos: search.photos(),
                thumbnails: ctx.thumbnails,
                available_width: ctx.window_width - 2.0 * spacing::MD,
                tile_width: ctx.tile_width,
                i18n: ctx.i18n,
            })
            .map(Message::Gallery),
        );
    }

    if search.is_loading() {
        body = body.push(
            AnimatedSpinner::new(palette::PRIMARY_500, ctx.spinner_rotation)
                .size(sizing::ICON_LG)
                .into_element(),
        );
    }

    // Shown while pages remain; disabled during a request so clicks cannot stack.
    if search.page() < search.total_pages() {
        let load_more = button(Text::new(ctx.i18n.tr("load-more-button")).size(typography::BODY))
            .on_press_maybe(search.can_load_more().then_some(Message::LoadMore))
            .padding([spacing::XS, spacing::LG])
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .style(button_styles::primary);
        body = body.push(load_more);
    }

    if search.shows_error() {
        let mut error = ErrorMessage::new()
            .title(ctx.i18n.tr("error-title"))
            .message(ctx.i18n.tr("error-message"))
            .details_labels(
                ctx.i18n.tr("error-details-show"),
                ctx.i18n.tr("error-details-hide"),
            )
            .details_visible(ctx.show_error_details)
            .on_toggle_details(Message::ToggleErrorDetails);
        if let Some(details) = ctx.last_error {
            error = error.details(details);
        }
        body = body.push(container(error.view()).padding(spacing::LG));
    }

    body.into()
}
