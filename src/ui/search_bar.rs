// SPDX-License-Identifier: MPL-2.0
//! Search input header.
//!
//! Holds the raw text being typed. Submitting (Enter or the search button)
//! hands the text to the search state, which trims it.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::button as button_styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, container, text_input, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submitted,
    ToggleTheme,
}

/// Effect of a search bar message on the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Submit(String),
    ToggleTheme,
}

#[derive(Debug, Clone, Default)]
pub struct State {
    input: String,
}

impl State {
    #[must_use]
    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
                Event::None
            }
            Message::Submitted => Event::Submit(self.input.clone()),
            Message::ToggleTheme => Event::ToggleTheme,
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n, theme_mode: ThemeMode) -> Element<'a, Message> {
        let field = text_input(&i18n.tr("search-placeholder"), &self.input)
            .on_input(Message::InputChanged)
            .on_submit(Message::Submitted)
            .size(typography::BODY_LG)
            .padding(spacing::XS)
            .width(Length::Fill);

        let submit = button(
            container(Text::new(i18n.tr("search-button")).size(typography::BODY))
                .align_y(alignment::Vertical::Center)
                .height(Length::Fill),
        )
        .on_press(Message::Submitted)
        .padding([0.0, spacing::MD])
        .height(Length::Fixed(sizing::INPUT_HEIGHT))
        .style(button_styles::primary);

        let theme_toggle = button(Text::new(theme_glyph(theme_mode)).size(typography::BODY_LG))
            .on_press(Message::ToggleTheme)
            .padding(spacing::XS)
            .style(button_styles::secondary);

        let row = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(field)
            .push(submit);

        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::MD)
            .push(
                container(container(row).max_width(sizing::SEARCH_FIELD_MAX_WIDTH))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            )
            .push(theme_toggle)
            .into()
    }
}

/// Next mode in the Light → Dark → System cycle.
#[must_use]
pub fn next_theme_mode(mode: ThemeMode) -> ThemeMode {
    match mode {
        ThemeMode::Light => ThemeMode::Dark,
        ThemeMode::Dark => ThemeMode::System,
        ThemeMode::System => ThemeMode::Light,
    }
}

fn theme_glyph(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "☀",
        ThemeMode::Dark => "☾",
        ThemeMode::System => "◐",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_updates_input_without_submitting() {
        let mut state = State::default();
        assert_eq!(state.update(Message::InputChanged("ca".into())), Event::None);
        assert_eq!(state.update(Message::InputChanged("cats".into())), Event::None);
        assert_eq!(state.input(), "cats");
    }

    #[test]
    fn submit_hands_over_raw_text() {
        let mut state = State::with_input("  cats ");
        assert_eq!(state.update(Message::Submitted), Event::Submit("  cats ".into()));
        // The field keeps what the user typed.
        assert_eq!(state.input(), "  cats ");
    }

    #[test]
    fn theme_cycle_visits_every_mode() {
        let mut mode = ThemeMode::Light;
        let mut seen = vec![mode];
        for _ in 0..2 {
            mode = next_theme_mode(mode);
            seen.push(mode);
        }
        assert_eq!(seen, vec![ThemeMode::Light, ThemeMode::Dark, ThemeMode::System]);
        assert_eq!(next_theme_mode(mode), ThemeMode::Light);
    }
}
