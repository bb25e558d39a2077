// SPDX-License-Identifier: MPL-2.0
//! Mapping of raw input to slideshow commands.
//!
//! Keyboard keys depend on which panel is visible. Touch gestures go through
//! a [`TouchTracker`] that owns the swipe origin and the double-tap guard.

use iced::keyboard;
use std::time::{Duration, Instant};

/// Minimum horizontal travel, in logical pixels, for a touch to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Two touch ends this close together form a double tap.
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(300);

/// Keys the card reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Space,
    Home,
    End,
    Escape,
}

impl Key {
    /// Converts an iced key, returning `None` for keys the card ignores.
    pub fn from_iced(key: &keyboard::Key) -> Option<Self> {
        use keyboard::key::Named;

        match key {
            keyboard::Key::Named(Named::Enter) => Some(Key::Enter),
            keyboard::Key::Named(Named::ArrowLeft) => Some(Key::ArrowLeft),
            keyboard::Key::Named(Named::ArrowRight) => Some(Key::ArrowRight),
            keyboard::Key::Named(Named::ArrowUp) => Some(Key::ArrowUp),
            keyboard::Key::Named(Named::ArrowDown) => Some(Key::ArrowDown),
            keyboard::Key::Named(Named::Space) => Some(Key::Space),
            keyboard::Key::Named(Named::Home) => Some(Key::Home),
            keyboard::Key::Named(Named::End) => Some(Key::End),
            keyboard::Key::Named(Named::Escape) => Some(Key::Escape),
            keyboard::Key::Character(c) if c.as_str() == " " => Some(Key::Space),
            _ => None,
        }
    }
}

/// Navigation intent, independent of the input that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Enter,
    Exit,
    Previous,
    Next,
    First,
    Last,
    GoTo(usize),
    ToggleAutoPlay,
    ToggleMusic,
}

/// Maps a key press to a command for the panel currently shown.
pub fn map_key(key: Key, intro_visible: bool) -> Option<Command> {
    if intro_visible {
        return (key == Key::Enter).then_some(Command::Enter);
    }
    match key {
        Key::ArrowLeft | Key::ArrowUp => Some(Command::Previous),
        Key::ArrowRight | Key::ArrowDown => Some(Command::Next),
        Key::Space => Some(Command::ToggleAutoPlay),
        Key::Home => Some(Command::First),
        Key::End => Some(Command::Last),
        Key::Escape => Some(Command::Exit),
        Key::Enter => None,
    }
}

/// Swipe direction from the horizontal start and end positions of a touch.
pub fn swipe_command(start_x: f32, end_x: f32) -> Option<Command> {
    let diff = start_x - end_x;
    if diff.abs() <= SWIPE_THRESHOLD_PX {
        return None;
    }
    Some(if diff > 0.0 {
        Command::Next
    } else {
        Command::Previous
    })
}

/// Wheel direction; `delta_y` is positive when the content scrolls down.
pub fn wheel_command(delta_y: f32) -> Option<Command> {
    if delta_y > 0.0 {
        Some(Command::Next)
    } else if delta_y < 0.0 {
        Some(Command::Previous)
    } else {
        None
    }
}

/// Tracks one touch gesture at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchTracker {
    start_x: Option<f32>,
    last_touch_end: Option<Instant>,
}

impl TouchTracker {
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Ends the current touch and returns the swipe it formed, if any.
    ///
    /// Every touch end is evaluated as a swipe, double taps included.
    pub fn end(&mut self, x: f32, now: Instant) -> Option<Command> {
        let start = self.start_x.take();
        if self.is_double_tap(now) {
            tracing::trace!("double tap");
        }
        self.last_touch_end = Some(now);
        swipe_command(start?, x)
    }

    /// Whether a touch ending at `now` follows the previous one closely.
    pub fn is_double_tap(&self, now: Instant) -> bool {
        self.last_touch_end
            .is_some_and(|last| now.saturating_duration_since(last) <= DOUBLE_TAP_WINDOW)
    }
}
