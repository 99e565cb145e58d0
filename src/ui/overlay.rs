// SPDX-License-Identifier: MPL-2.0
//! Full-size image viewer drawn above the gallery.
//!
//! The viewer is either closed or shows exactly one [`SelectedImage`]. It is
//! dismissed by clicking the backdrop or the image, by the close button or
//! with Escape; closing always clears the selection.

use crate::api::FetchError;
use crate::i18n::fluent::I18n;
use crate::search::SelectedImage;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::image::Handle;
use iced::widget::{button, container, image, mouse_area, responsive, Column, Stack, Text};
use iced::{alignment, ContentFit, Element, Length, Size};

#[derive(Debug, Clone)]
pub enum Message {
    Close,
}

/// Download state of the enlarged image.
#[derive(Debug, Clone)]
pub enum Content {
    Loading,
    Ready(Handle),
    Failed,
}

#[derive(Debug, Clone)]
pub struct OpenImage {
    pub image: SelectedImage,
    pub content: Content,
}

#[derive(Debug, Clone, Default)]
pub enum Viewer {
    #[default]
    Closed,
    Open(OpenImage),
}

impl Viewer {
    /// Shows `image`, replacing any current selection.
    ///
    /// Returns the URL the caller must download.
    pub fn open(&mut self, image: SelectedImage) -> String {
        let url = image.url.clone();
        tracing::debug!(%url, "opening overlay");
        *self = Viewer::Open(OpenImage {
            image,
            content: Content::Loading,
        });
        url
    }

    pub fn close(&mut self) {
        *self = Viewer::Closed;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Viewer::Open(_))
    }

    #[must_use]
    pub fn selected(&self) -> Option<&SelectedImage> {
        match self {
            Viewer::Open(open) => Some(&open.image),
            Viewer::Closed => None,
        }
    }

    #[must_use]
    pub fn content(&self) -> Option<&Content> {
        match self {
            Viewer::Open(open) => Some(&open.content),
            Viewer::Closed => None,
        }
    }

    /// Stores the downloaded image for `url`.
    ///
    /// Ignored when the viewer was closed or moved to another image in the
    /// meantime. Returns `true` when applied.
    pub fn image_loaded(&mut self, url: &str, result: Result<Vec<u8>, FetchError>) -> bool {
        let Viewer::Open(open) = self else {
            return false;
        };
        if open.image.url != url {
            return false;
        }
        open.content = match result {
            Ok(bytes) => Content::Ready(Handle::from_bytes(bytes)),
            Err(err) => {
                tracing::warn!(%url, error = %err, "full-size image download failed");
                Content::Failed
            }
        };
        true
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Close => self.close(),
        }
    }

    /// Renders the overlay layer, or `None` when closed.
    pub fn view<'a>(&'a self, i18n: &'a I18n, spinner_rotation: f32) -> Option<Element<'a, Message>> {
        let Viewer::Open(open) = self else {
            return None;
        };

        let body: Element<'a, Message> = match &open.content {
            Content::Ready(handle) => {
                let handle = handle.clone();
                let picture = responsive(move |size: Size| {
                    image(handle.clone())
                        .content_fit(ContentFit::Contain)
                        .width(Length::Fixed(size.width * sizing::OVERLAY_MAX_FRACTION))
                        .height(Length::Fixed(size.height * sizing::OVERLAY_MAX_FRACTION))
                        .into()
                });
                Column::new()
                    .spacing(spacing::XS)
                    .align_x(alignment::Horizontal::Center)
                    .push(mouse_area(picture).on_press(Message::Close))
                    .push(caption(&open.image.alt))
                    .into()
            }
            Content::Loading => Column::new()
                .spacing(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .push(AnimatedSpinner::new(palette::WHITE, spinner_rotation).into_element())
                .push(Text::new(i18n.tr("overlay-loading")).size(typography::BODY))
                .push(caption(&open.image.alt))
                .into(),
            Content::Failed => Column::new()
                .spacing(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .push(Text::new(i18n.tr("overlay-image-error")).size(typography::BODY))
                .push(caption(&open.image.alt))
                .into(),
        };

        let backdrop = mouse_area(
            container(body)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .padding(spacing::LG)
                .style(container_styles::backdrop),
        )
        .on_press(Message::Close);

        let close_button = button(Text::new("×").size(typography::TITLE_MD))
            .on_press(Message::Close)
            .padding([spacing::XXS, spacing::SM])
            .style(button_styles::overlay(
                palette::WHITE,
                opacity::OVERLAY_MEDIUM,
                opacity::OVERLAY_HOVER,
            ));

        let close_layer = container(close_button)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .padding(spacing::MD);

        Some(Stack::new().push(backdrop).push(close_layer).into())
    }
}

fn caption<'a>(alt: &'a str) -> Element<'a, Message> {
    container(Text::new(alt).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(container_styles::caption)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(url: &str) -> SelectedImage {
        SelectedImage {
            url: url.to_string(),
            alt: "Image".to_string(),
        }
    }

    #[test]
    fn starts_closed() {
        let viewer = Viewer::default();
        assert!(!viewer.is_open());
        assert!(viewer.selected().is_none());
    }

    #[test]
    fn open_returns_url_to_download() {
        let mut viewer = Viewer::default();
        let url = viewer.open(selection("https://images.test/a-r"));

        assert_eq!(url, "https://images.test/a-r");
        assert!(viewer.is_open());
        assert!(matches!(viewer.content(), Some(Content::Loading)));
    }

    #[test]
    fn close_clears_selection() {
        let mut viewer = Viewer::default();
        viewer.open(selection("https://images.test/a-r"));
        viewer.update(Message::Close);

        assert!(!viewer.is_open());
        assert!(viewer.selected().is_none());
    }

    #[test]
    fn download_for_current_image_is_applied() {
        let mut viewer = Viewer::default();
        viewer.open(selection("https://images.test/a-r"));

        assert!(viewer.image_loaded("https://images.test/a-r", Ok(vec![0; 4])));
        assert!(matches!(viewer.content(), Some(Content::Ready(_))));
    }

    #[test]
    fn stale_downloads_are_ignored() {
        let mut viewer = Viewer::default();
        viewer.open(selection("https://images.test/a-r"));
        viewer.open(selection("https://images.test/b-r"));

        assert!(!viewer.image_loaded("https://images.test/a-r", Ok(vec![0; 4])));
        assert!(matches!(viewer.content(), Some(Content::Loading)));

        viewer.close();
        assert!(!viewer.image_loaded("https://images.test/b-r", Ok(vec![0; 4])));
        assert!(!viewer.is_open());
    }

    #[test]
    fn failed_download_keeps_viewer_open() {
        let mut viewer = Viewer::default();
        viewer.open(selection("https://images.test/a-r"));

        assert!(viewer.image_loaded("https://images.test/a-r", Err(FetchError::Status(404))));
        assert!(matches!(viewer.content(), Some(Content::Failed)));
        assert_eq!(
            viewer.selected().map(|s| s.url.as_str()),
            Some("https://images.test/a-r")
        );
    }
}
