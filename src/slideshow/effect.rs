// SPDX-License-Identifier: MPL-2.0
//! Side effects requested by the slideshow controller.
//!
//! The controller never sleeps or touches audio itself. It returns these
//! values and the application turns them into tasks.

use crate::effects::BurstId;
use std::time::Duration;

/// Deferred callbacks the controller schedules for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Intro fade-out finished: reveal the slideshow.
    RevealSlideshow,
    /// Slide transition cooldown is over.
    CooldownElapsed,
    /// Enter after the ripple had time to show.
    EnterAfterRipple,
    /// Ripple on the enter control finished.
    RippleFinished,
    /// Remove the heart burst overlay with this id.
    HeartBurstExpired(BurstId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Deliver `timer` back to the controller after `after`.
    Schedule { after: Duration, timer: Timer },
    /// Ask the audio output to start the track.
    PlayMusic,
    /// Ask the audio output to pause the track.
    PauseMusic,
}

impl Effect {
    pub fn schedule(after: Duration, timer: Timer) -> Self {
        Effect::Schedule { after, timer }
    }
}
