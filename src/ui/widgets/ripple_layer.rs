// SPDX-License-Identifier: MPL-2.0
//! Click surface of the enter control.
//!
//! Sits on top of the control's label, reports where it was pressed as a
//! [`Ripple`] and draws the ripple while it expands.

use crate::effects::{ActiveRipple, Ripple};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::widget::Action;
use iced::{mouse, Color, Element, Length, Rectangle, Renderer, Theme};
use std::time::Instant;

pub struct RippleLayer<Message> {
    ripple: Option<ActiveRipple>,
    now: Instant,
    on_press: fn(Ripple) -> Message,
}

impl<Message: Clone + 'static> RippleLayer<Message> {
    pub fn new(ripple: Option<ActiveRipple>, now: Instant, on_press: fn(Ripple) -> Message) -> Self {
        Self {
            ripple,
            now,
            on_press,
        }
    }

    pub fn into_element<'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message: Clone> canvas::Program<Message> for RippleLayer<Message> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let click = cursor.position_in(bounds)?;
                let ripple = Ripple::from_click(bounds.size(), click);
                Some(Action::publish((self.on_press)(ripple)).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        if let Some(active) = self.ripple {
            let pose = active.animation.pose(self.now);
            let circle = Path::circle(
                active.ripple.center(),
                active.ripple.size / 2.0 * pose.scale,
            );
            frame.fill(
                &circle,
                Color {
                    a: 0.35 * pose.opacity,
                    ..Color::WHITE
                },
            );
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}
