// SPDX-License-Identifier: MPL-2.0
//! Inline error shown in place of the gallery when a search fails before
//! any photo has been loaded.
//!
//! ```ignore
//! ErrorMessage::new()
//!     .title(i18n.tr("error-title"))
//!     .message(i18n.tr("error-message"))
//!     .details(error.to_string())
//!     .details_visible(show_details)
//!     .on_toggle_details(Message::ToggleErrorDetails)
//!     .view()
//! ```

use crate::ui::design_tokens::{border, palette, radius, spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, container, rule, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

const MAX_WIDTH: f32 = 500.0;

#[derive(Debug, Clone)]
pub struct ErrorMessage<Message> {
    title: Option<String>,
    message: Option<String>,
    details: Option<String>,
    show_details: bool,
    toggle_details_message: Option<Message>,
    show_details_label: String,
    hide_details_label: String,
}

impl<Message> Default for ErrorMessage<Message> {
    fn default() -> Self {
        Self {
            title: None,
            message: None,
            details: None,
            show_details: false,
            toggle_details_message: None,
            show_details_label: "Show details".to_string(),
            hide_details_label: "Hide details".to_string(),
        }
    }
}

impl<Message: Clone + 'static> ErrorMessage<Message> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Technical cause, hidden behind a toggle.
    #[must_use]
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    #[must_use]
    pub fn details_visible(mut self, visible: bool) -> Self {
        self.show_details = visible;
        self
    }

    #[must_use]
    pub fn on_toggle_details(mut self, message: Message) -> Self {
        self.toggle_details_message = Some(message);
        self
    }

    #[must_use]
    pub fn details_labels(
        mut self,
        show_label: impl Into<String>,
        hide_label: impl Into<String>,
    ) -> Self {
        self.show_details_label = show_label.into();
        self.hide_details_label = hide_label.into();
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let accent_color = palette::ERROR_500;

        let glyph = Text::new("!")
            .size(typography::TITLE_MD)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        if let Some(title_text) = self.title {
            content = content.push(Text::new(title_text).size(typography::TITLE_MD).style(
                move |_theme: &Theme| text::Style {
                    color: Some(accent_color),
                },
            ));
        }

        if let Some(message_text) = self.message {
            content = content.push(
                Container::new(Text::new(message_text).size(typography::BODY))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        if let Some(details_text) = self.details {
            let toggle_label = if self.show_details {
                self.hide_details_label
            } else {
                self.show_details_label
            };

            if let Some(toggle_msg) = self.toggle_details_message {
                let toggle_btn = button(Text::new(toggle_label).size(typography::CAPTION))
                    .on_press(toggle_msg)
                    .style(button_styles::secondary);
                content = content.push(Container::new(toggle_btn).padding(spacing::XS));
            }

            if self.show_details {
                let details_body = Text::new(details_text)
                    .size(typography::CAPTION)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().secondary.base.text),
                    });

                content = content.push(
                    Column::new()
                        .spacing(spacing::XS)
                        .width(Length::Fill)
                        .push(rule::horizontal(1))
                        .push(details_body),
                );
            }
        }

        let main_row = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Top)
            .push(glyph)
            .push(content);

        Container::new(main_row)
            .width(Length::Fill)
            .max_width(MAX_WIDTH)
            .padding(spacing::LG)
            .style(move |theme: &Theme| panel_style(theme, accent_color))
            .into()
    }
}

fn panel_style(theme: &Theme, accent_color: Color) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(iced::Background::Color(palette.background.weak.color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum TestMessage {
        ToggleDetails,
    }

    #[test]
    fn builder_collects_fields() {
        let display: ErrorMessage<TestMessage> = ErrorMessage::new()
            .title("Something went wrong")
            .message("Please try reloading the page.")
            .details("unexpected HTTP status 503")
            .details_visible(true)
            .on_toggle_details(TestMessage::ToggleDetails);

        assert_eq!(display.title.as_deref(), Some("Something went wrong"));
        assert_eq!(display.message.as_deref(), Some("Please try reloading the page."));
        assert_eq!(display.details.as_deref(), Some("unexpected HTTP status 503"));
        assert!(display.show_details);
        assert!(display.toggle_details_message.is_some());
    }

    #[test]
    fn details_labels_can_be_localized() {
        let display: ErrorMessage<TestMessage> =
            ErrorMessage::new().details_labels("Afficher les détails", "Masquer les détails");

        assert_eq!(display.show_details_label, "Afficher les détails");
        assert_eq!(display.hide_details_label, "Masquer les détails");
    }

    #[test]
    fn panel_border_uses_accent() {
        let style = panel_style(&Theme::Dark, palette::ERROR_500);
        assert_eq!(style.border.color, palette::ERROR_500);
    }
}
