// SPDX-License-Identifier: MPL-2.0
//! Loading indicator drawn on a canvas.
//!
//! The widget is stateless: the caller advances the rotation angle on every
//! tick while a request is in flight and rebuilds the spinner in `view`.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Radians added per 100ms tick.
pub const ROTATION_STEP: f32 = PI / 8.0;

const STROKE_WIDTH: f32 = 3.0;
const ARC_SEGMENTS: u16 = 30;

pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Advances `rotation` by one tick, wrapped to `[0, TAU)`.
#[must_use]
pub fn advance(rotation: f32) -> f32 {
    (rotation + ROTATION_STEP) % TAU
}

/// Points of a half-circle arc starting at `rotation` (0 = 12 o'clock).
fn arc_points(center: Point, radius: f32, rotation: f32) -> impl Iterator<Item = Point> {
    let start = rotation - PI / 2.0;
    (0..=ARC_SEGMENTS).map(move |i| {
        let angle = start + PI * f32::from(i) / f32::from(ARC_SEGMENTS);
        Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
    })
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH - 1.0;

                // Faint full ring as the track
                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                        a: 0.25,
                        ..self.color
                    }),
                );

                let arc = Path::new(|builder| {
                    let mut points = arc_points(center, radius, self.rotation);
                    if let Some(first) = points.next() {
                        builder.move_to(first);
                    }
                    for point in points {
                        builder.line_to(point);
                    }
                });
                frame.stroke(
                    &arc,
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_around_full_turn() {
        let mut rotation = 0.0;
        for _ in 0..16 {
            rotation = advance(rotation);
        }
        assert!(rotation.abs() < 1e-4 || (TAU - rotation).abs() < 1e-4);
    }

    #[test]
    fn arc_starts_at_top_and_ends_at_bottom() {
        let center = Point::new(10.0, 10.0);
        let points: Vec<Point> = arc_points(center, 5.0, 0.0).collect();

        assert_eq!(points.len(), usize::from(ARC_SEGMENTS) + 1);
        let first = points[0];
        let last = points[points.len() - 1];
        assert!((first.x - 10.0).abs() < 1e-4 && (first.y - 5.0).abs() < 1e-4);
        assert!((last.x - 10.0).abs() < 1e-4 && (last.y - 15.0).abs() < 1e-4);
    }
}
