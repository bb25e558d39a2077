// SPDX-License-Identifier: MPL-2.0
//! Heart burst drawn over the whole window.

use crate::effects::HeartBurst;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Text};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::time::Instant;

pub struct HeartOverlay<'a> {
    burst: &'a HeartBurst,
    now: Instant,
}

impl<'a> HeartOverlay<'a> {
    pub fn new(burst: &'a HeartBurst, now: Instant) -> Self {
        Self { burst, now }
    }

    pub fn into_element<Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for HeartOverlay<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for heart in &self.burst.hearts {
            let animation = self.burst.animation(heart);
            if animation.is_finished(self.now) {
                continue;
            }
            let pose = animation.pose(self.now);
            let size = heart.font_size * pose.scale;
            if size < 1.0 {
                continue;
            }
            // Glyph centered on its spot
            let position = Point::new(
                heart.x * bounds.width - size / 2.0,
                heart.y * bounds.height + pose.offset_y - size / 2.0,
            );
            frame.fill_text(Text {
                content: heart.glyph.to_string(),
                position,
                color: Color {
                    a: pose.opacity,
                    ..Color::WHITE
                },
                size: size.into(),
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}
