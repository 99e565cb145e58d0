// SPDX-License-Identifier: MPL-2.0
//! Responsive grid of search results.
//!
//! The number of columns follows the window width: as many tiles of the
//! configured width as fit, then stretched to fill the row. Thumbnails are
//! downloaded per photo and kept for the current search session only.

use crate::api::FetchError;
use crate::i18n::fluent::I18n;
use crate::search::{Photo, SessionId};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::{button as button_styles, container as container_styles};
use iced::widget::image::Handle;
use iced::widget::{button, container, image, Column, Row, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub enum Message {
    /// A tile was clicked; carries the index into the result set.
    PhotoSelected(usize),
}

/// Download state of one thumbnail.
#[derive(Debug, Clone)]
pub enum Thumbnail {
    Loading,
    Ready(Handle),
    Failed,
}

/// Thumbnails of the active session, keyed by photo id.
#[derive(Debug, Default)]
pub struct Thumbnails {
    session: SessionId,
    entries: HashMap<String, Thumbnail>,
}

impl Thumbnails {
    /// Drops every thumbnail and starts tracking `session`.
    pub fn reset(&mut self, session: SessionId) {
        self.session = session;
        self.entries.clear();
    }

    /// Marks unseen photos as loading and returns the `(id, url)` pairs to download.
    pub fn request<'a>(&mut self, photos: impl IntoIterator<Item = &'a Photo>) -> Vec<(String, String)> {
        photos
            .into_iter()
            .filter_map(|photo| {
                if self.entries.contains_key(&photo.id) {
                    return None;
                }
                self.entries.insert(photo.id.clone(), Thumbnail::Loading);
                Some((photo.id.clone(), photo.thumb_url.clone()))
            })
            .collect()
    }

    /// Stores a finished download. Results for another session are ignored.
    ///
    /// Returns `true` when the result was applied.
    pub fn loaded(&mut self, session: SessionId, id: &str, result: Result<Vec<u8>, FetchError>) -> bool {
        if session != self.session {
            return false;
        }
        let Some(entry) = self.entries.get_mut(id) else {
            return false;
        };
        *entry = match result {
            Ok(bytes) => Thumbnail::Ready(Handle::from_bytes(bytes)),
            Err(err) => {
                tracing::debug!(%id, error = %err, "thumbnail download failed");
                Thumbnail::Failed
            }
        };
        true
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Thumbnail> {
        self.entries.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Number of columns that fit in `available_width`, never less than one.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn column_count(available_width: f32, tile_width: f32, gap: f32) -> usize {
    if tile_width <= 0.0 || !available_width.is_finite() {
        return 1;
    }
    // Non-negative and bounded by the window width over the tile width.
    ((available_width + gap) / (tile_width + gap)).floor().max(1.0) as usize
}

/// Context required to render the gallery.
pub struct ViewContext<'a> {
    pub photos: &'a [Photo],
    pub thumbnails: &'a Thumbnails,
    /// Width the grid may use, in logical pixels.
    pub available_width: f32,
    pub tile_width: f32,
    pub i18n: &'a I18n,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let columns = column_count(ctx.available_width, ctx.tile_width, spacing::SM);
    let mut grid = Column::new().spacing(spacing::SM).width(Length::Fill);

    for (row_index, chunk) in ctx.photos.chunks(columns).enumerate() {
        let mut row = Row::new().spacing(spacing::SM).width(Length::Fill);
        for (offset, photo) in chunk.iter().enumerate() {
            let index = row_index * columns + offset;
            let thumbnail = ctx.thumbnails.get(&photo.id);
            row = row.push(tile(photo, index, thumbnail, ctx.tile_width, ctx.i18n));
        }
        // Pad the last row so its tiles keep the same width as the others.
        for _ in chunk.len()..columns {
            row = row.push(container(Text::new("")).width(Length::FillPortion(1)));
        }
        grid = grid.push(row);
    }

    grid.into()
}

fn tile<'a>(
    photo: &'a Photo,
    index: usize,
    thumbnail: Option<&'a Thumbnail>,
    tile_width: f32,
    i18n: &I18n,
) -> Element<'a, Message> {
    let height = Length::Fixed(tile_width * sizing::TILE_ASPECT);

    let picture: Element<'a, Message> = match thumbnail {
        Some(Thumbnail::Ready(handle)) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(height)
            .into(),
        Some(Thumbnail::Failed) | Some(Thumbnail::Loading) | None => {
            container(Text::new(photo.alt_text()).size(typography::CAPTION))
                .padding(spacing::XS)
                .width(Length::Fill)
                .height(height)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .style(container_styles::tile_placeholder)
                .into()
        }
    };

    let mut content = Column::new().spacing(spacing::XXS).push(picture);
    if let Some(author) = &photo.author {
        content = content.push(
            Text::new(i18n.tr_with_args("gallery-author", &[("author", author)]))
                .size(typography::CAPTION),
        );
    }

    button(content)
        .on_press(Message::PhotoSelected(index))
        .padding(spacing::XXS)
        .width(Length::FillPortion(1))
        .style(button_styles::tile)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str) -> Photo {
        Photo {
            id: id.to_string(),
            thumb_url: format!("https://images.test/{id}-s"),
            url: format!("https://images.test/{id}-r"),
            alt: None,
            author: None,
        }
    }

    #[test]
    fn column_count_fits_tiles_with_gaps() {
        // 4 tiles need 4 * 240 + 3 * 12 = 996 pixels.
        assert_eq!(column_count(990.0, 240.0, 12.0), 3);
        assert_eq!(column_count(996.0, 240.0, 12.0), 4);
    }

    #[test]
    fn column_count_never_drops_below_one() {
        assert_eq!(column_count(100.0, 240.0, 12.0), 1);
        assert_eq!(column_count(0.0, 240.0, 12.0), 1);
        assert_eq!(column_count(f32::INFINITY, 240.0, 12.0), 1);
        assert_eq!(column_count(500.0, 0.0, 12.0), 1);
    }

    #[test]
    fn request_only_returns_unseen_photos() {
        let mut thumbnails = Thumbnails::default();
        let first_page = vec![photo("a"), photo("b")];
        let requested = thumbnails.request(&first_page);
        assert_eq!(
            requested,
            vec![
                ("a".to_string(), "https://images.test/a-s".to_string()),
                ("b".to_string(), "https://images.test/b-s".to_string()),
            ]
        );

        let all = vec![photo("a"), photo("b"), photo("c")];
        let requested = thumbnails.request(&all);
        assert_eq!(requested.len(), 1);
        assert_eq!(requested[0].0, "c");
        assert!(matches!(thumbnails.get("c"), Some(Thumbnail::Loading)));
    }

    #[test]
    fn loaded_ignores_other_sessions() {
        let mut thumbnails = Thumbnails::default();
        let old = SessionId::default();
        thumbnails.request(&[photo("a")]);

        let mut state = crate::search::SearchState::new();
        state.submit("dogs");
        thumbnails.reset(state.session());
        thumbnails.request(&[photo("a")]);

        assert!(!thumbnails.loaded(old, "a", Ok(vec![1, 2, 3])));
        assert!(matches!(thumbnails.get("a"), Some(Thumbnail::Loading)));

        assert!(thumbnails.loaded(state.session(), "a", Err(FetchError::Status(404))));
        assert!(matches!(thumbnails.get("a"), Some(Thumbnail::Failed)));
    }

    #[test]
    fn reset_clears_entries() {
        let mut thumbnails = Thumbnails::default();
        thumbnails.request(&[photo("a"), photo("b")]);
        assert_eq!(thumbnails.len(), 2);

        thumbnails.reset(SessionId::default());
        assert!(thumbnails.is_empty());
        assert!(!thumbnails.loaded(SessionId::default(), "a", Ok(vec![])));
    }
}
