// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

use iced::widget::button::Status;
use iced::{Background, Theme};
use iced_photo_search::ui::design_tokens::{opacity, palette, spacing};
use iced_photo_search::ui::notifications::Severity;
use iced_photo_search::ui::styles::{button, container};

#[test]
fn all_button_styles_are_callable() {
    for theme in [Theme::Light, Theme::Dark] {
        for status in [Status::Active, Status::Hovered, Status::Pressed, Status::Disabled] {
            let _ = button::primary(&theme, status);
            let _ = button::secondary(&theme, status);
            let _ = button::tile(&theme, status);
            let _ = button::overlay(palette::WHITE, opacity::OVERLAY_MEDIUM, opacity::OVERLAY_HOVER)(
                &theme, status,
            );
        }
    }
}

#[test]
fn overlay_backdrop_dims_content() {
    let style = container::backdrop(&Theme::Light);
    match style.background {
        Some(Background::Color(color)) => assert!(color.a >= opacity::OVERLAY_MEDIUM),
        other => panic!("unexpected backdrop background: {other:?}"),
    }
}

#[test]
fn severity_accents_come_from_palette() {
    assert_eq!(Severity::Error.color(), palette::ERROR_500);
    assert_eq!(Severity::Success.color(), palette::SUCCESS_500);
}

#[test]
fn spacing_follows_baseline_grid() {
    for value in [spacing::XS, spacing::MD, spacing::LG, spacing::XL, spacing::XXL] {
        assert_eq!(value % spacing::XXS, 0.0);
    }
}
