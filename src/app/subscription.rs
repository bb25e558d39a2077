// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Raw keyboard, wheel and touch events are turned into controller input
//! here. Buttons and the enter control report through their own messages.

use super::Message;
use crate::slideshow::{AutoPlayHandle, AutoPlayInterval, Key};
use iced::{event, keyboard, mouse, time, touch, Subscription};
use std::time::Duration;

/// Redraw period while something moves on screen.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Pixels per wheel line, for devices reporting lines.
const WHEEL_LINE_HEIGHT: f32 = 40.0;

/// Routes keyboard, wheel and touch events to the controller.
///
/// Key presses already captured by a widget are dropped; wheel and touch
/// always reach the slideshow.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => Key::from_iced(&key).map(Message::Key),
            event::Status::Captured => None,
        },
        event::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
            let y = match delta {
                mouse::ScrollDelta::Lines { y, .. } => y * WHEEL_LINE_HEIGHT,
                mouse::ScrollDelta::Pixels { y, .. } => y,
            };
            // iced reports positive y when scrolling up
            Some(Message::Wheel(-y))
        }
        event::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::TouchStart(position.x))
        }
        event::Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Message::TouchEnd(position.x))
        }
        _ => None,
    })
}

/// Ticks for the live auto-play handle. A new handle restarts the period.
pub fn create_autoplay_subscription(
    handle: Option<AutoPlayHandle>,
    interval: AutoPlayInterval,
) -> Subscription<Message> {
    match handle {
        Some(handle) => time::every(interval.as_duration())
            .with(handle)
            .map(|(handle, _)| Message::AutoPlayTick(handle)),
        None => Subscription::none(),
    }
}

/// Creates the animation frame subscription.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(FRAME_INTERVAL).map(Message::Frame)
    } else {
        Subscription::none()
    }
}
