// SPDX-License-Identifier: MPL-2.0
//! Floating particles behind the card.

use crate::effects::Particle;
use crate::ui::design_tokens::palette;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::time::Duration;

/// Particles positioned for one frame.
pub struct ParticleField<'a> {
    particles: &'a [Particle],
    elapsed: Duration,
}

impl<'a> ParticleField<'a> {
    pub fn new(particles: &'a [Particle], elapsed: Duration) -> Self {
        Self { particles, elapsed }
    }

    pub fn into_element<Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for ParticleField<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        // Every frame moves every particle, a cache would never hit
        let mut frame = Frame::new(renderer, bounds.size());

        for particle in self.particles {
            let Some((x, y)) = particle.position(self.elapsed) else {
                continue;
            };
            let alpha = particle.alpha(self.elapsed);
            if alpha <= 0.0 {
                continue;
            }
            let dot = Path::circle(
                Point::new(x * bounds.width, y * bounds.height),
                particle.size / 2.0,
            );
            frame.fill(
                &dot,
                Color {
                    a: alpha,
                    ..palette::ROSE_100
                },
            );
        }

        vec![frame.into_geometry()]
    }
}
