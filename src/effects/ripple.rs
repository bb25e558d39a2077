// SPDX-License-Identifier: MPL-2.0
//! Ripple drawn inside the enter control where it was clicked.

use super::keyframes::{Animation, Keyframes};
use iced::{Point, Size};
use std::time::{Duration, Instant};

pub const RIPPLE_DURATION: Duration = Duration::from_millis(600);

/// Square ripple area, positioned relative to the control's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f32,
    pub x: f32,
    pub y: f32,
}

impl Ripple {
    /// Ripple centered on `click` (relative to the control) and large enough
    /// to cover the whole control.
    pub fn from_click(control: Size, click: Point) -> Self {
        let size = control.width.max(control.height);
        Self {
            size,
            x: click.x - size / 2.0,
            y: click.y - size / 2.0,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.size / 2.0, self.y + self.size / 2.0)
    }
}

/// Ripple currently playing on the enter control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveRipple {
    pub ripple: Ripple,
    pub animation: Animation,
}

impl ActiveRipple {
    pub fn start(ripple: Ripple, now: Instant) -> Self {
        Self {
            ripple,
            animation: Animation::start(Keyframes::RippleExpand, now).with_duration(RIPPLE_DURATION),
        }
    }
}
