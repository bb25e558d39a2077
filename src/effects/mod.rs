// SPDX-License-Identifier: MPL-2.0
//! Decorative layer of the card.
//!
//! Nothing here affects navigation. The slideshow controller reaches this
//! module only through [`HeartBurstLauncher`]; everything else is driven by
//! the application clock.

pub mod heart_burst;
pub mod keyframes;
pub mod particles;
pub mod ripple;

pub use heart_burst::{BurstId, HeartBurst, HeartBurstLauncher, RandomHeartBurst};
pub use keyframes::{Animation, Keyframes, Pose};
pub use particles::Particle;
pub use ripple::{ActiveRipple, Ripple};

use rand::Rng;
use std::time::{Duration, Instant};

/// Delay before the window content is marked loaded and fades in.
pub const LOADED_DELAY: Duration = Duration::from_millis(100);

/// Delay before highlighted captions and the intro heart start pulsing.
pub const LOVE_PULSE_DELAY: Duration = Duration::from_secs(2);

/// Startup-time ambient state: particles and the boot clock.
#[derive(Debug, Clone)]
pub struct Ambience {
    particles: Vec<Particle>,
    started: Instant,
}

impl Ambience {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, particle_count: usize, now: Instant) -> Self {
        let particles = particles::randomize(rng, particle_count);
        tracing::debug!(count = particles.len(), "particles randomized");
        Self {
            particles,
            started: now,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Time since boot, used as the particle clock.
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    pub fn is_loaded(&self, now: Instant) -> bool {
        self.elapsed(now) >= LOADED_DELAY
    }

    /// Opacity of the whole window content during the loaded fade.
    pub fn content_opacity(&self, now: Instant) -> f32 {
        if !self.is_loaded(now) {
            return 0.0;
        }
        let fade = Keyframes::IntroFadeIn.duration().as_secs_f32();
        let since = (self.elapsed(now) - LOADED_DELAY).as_secs_f32();
        (since / fade).min(1.0)
    }

    /// Love pulse animation, once it has started.
    pub fn pulse(&self, now: Instant) -> Option<Animation> {
        (self.elapsed(now) >= LOVE_PULSE_DELAY)
            .then(|| Animation::start(Keyframes::LovePulse, self.started + LOVE_PULSE_DELAY))
    }
}
