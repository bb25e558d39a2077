// SPDX-License-Identifier: MPL-2.0
//! Heart burst overlay fired when the slideshow opens.
//!
//! A burst is fire-and-forget: it lives for [`BURST_LIFETIME`] and is then
//! removed as a whole, whether or not each heart finished its animation.

use super::keyframes::{Animation, Keyframes};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::ops::Range;
use std::time::{Duration, Instant};

pub const HEART_GLYPHS: [&str; 5] = ["💕", "💖", "💝", "💗", "💓"];
pub const HEART_COUNT: usize = 15;
pub const BURST_LIFETIME: Duration = Duration::from_secs(5);
pub const FONT_SIZE_RANGE: Range<f32> = 15.0..35.0;
pub const EXPLODE_RANGE_SECS: Range<f32> = 2.0..5.0;

/// Identifies one burst so that a late removal cannot hit a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BurstId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Heart {
    pub glyph: &'static str,
    pub font_size: f32,
    /// Horizontal position as a fraction of the width.
    pub x: f32,
    /// Vertical position as a fraction of the height.
    pub y: f32,
    pub duration: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeartBurst {
    pub id: BurstId,
    pub hearts: Vec<Heart>,
    pub started: Instant,
}

impl HeartBurst {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, id: BurstId, now: Instant) -> Self {
        let hearts = (0..HEART_COUNT)
            .map(|_| Heart {
                glyph: HEART_GLYPHS.choose(rng).copied().unwrap_or(HEART_GLYPHS[0]),
                font_size: rng.gen_range(FONT_SIZE_RANGE),
                x: rng.gen_range(0.0..1.0),
                y: rng.gen_range(0.0..1.0),
                duration: Duration::from_secs_f32(rng.gen_range(EXPLODE_RANGE_SECS)),
            })
            .collect();
        Self {
            id,
            hearts,
            started: now,
        }
    }

    pub fn animation(&self, heart: &Heart) -> Animation {
        Animation::start(Keyframes::HeartExplode, self.started).with_duration(heart.duration)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= BURST_LIFETIME
    }
}

/// Capability handed to the slideshow controller to fire a burst.
pub trait HeartBurstLauncher: Send {
    /// Creates a new burst, or `None` when bursts are disabled.
    fn launch(&mut self, now: Instant) -> Option<HeartBurst>;
}

/// Launcher drawing hearts from a random source.
pub struct RandomHeartBurst<R = StdRng> {
    rng: R,
    next_id: u64,
    enabled: bool,
}

impl RandomHeartBurst<StdRng> {
    pub fn new(enabled: bool) -> Self {
        Self::with_rng(StdRng::from_entropy(), enabled)
    }
}

impl<R: Rng> RandomHeartBurst<R> {
    pub fn with_rng(rng: R, enabled: bool) -> Self {
        Self {
            rng,
            next_id: 0,
            enabled,
        }
    }
}

impl<R: Rng + Send> HeartBurstLauncher for RandomHeartBurst<R> {
    fn launch(&mut self, now: Instant) -> Option<HeartBurst> {
        if !self.enabled {
            return None;
        }
        self.next_id += 1;
        Some(HeartBurst::generate(
            &mut self.rng,
            BurstId(self.next_id),
            now,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_has_fixed_size_and_valid_hearts() {
        let mut rng = StdRng::seed_from_u64(3);
        let burst = HeartBurst::generate(&mut rng, BurstId(1), Instant::now());

        assert_eq!(burst.hearts.len(), HEART_COUNT);
        for heart in &burst.hearts {
            assert!(HEART_GLYPHS.contains(&heart.glyph));
            assert!(FONT_SIZE_RANGE.contains(&heart.font_size));
            assert!((0.0..1.0).contains(&heart.x));
            assert!((0.0..1.0).contains(&heart.y));
            assert!(heart.duration >= Duration::from_secs(2));
            assert!(heart.duration < Duration::from_secs(5));
        }
    }

    #[test]
    fn burst_expires_after_lifetime() {
        let now = Instant::now();
        let mut rng = StdRng::seed_from_u64(3);
        let burst = HeartBurst::generate(&mut rng, BurstId(1), now);

        assert!(!burst.is_expired(now + Duration::from_millis(4999)));
        assert!(burst.is_expired(now + BURST_LIFETIME));
    }

    #[test]
    fn launcher_issues_fresh_ids() {
        let mut launcher = RandomHeartBurst::with_rng(StdRng::seed_from_u64(9), true);
        let now = Instant::now();
        let first = launcher.launch(now).expect("enabled launcher fires");
        let second = launcher.launch(now).expect("enabled launcher fires");
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn disabled_launcher_fires_nothing() {
        let mut launcher = RandomHeartBurst::with_rng(StdRng::seed_from_u64(9), false);
        assert!(launcher.launch(Instant::now()).is_none());
    }

    #[test]
    fn heart_animation_uses_its_own_duration() {
        let now = Instant::now();
        let mut rng = StdRng::seed_from_u64(11);
        let burst = HeartBurst::generate(&mut rng, BurstId(4), now);
        let heart = &burst.hearts[0];
        let animation = burst.animation(heart);
        assert_eq!(animation.duration, heart.duration);
        assert!(animation.is_finished(now + heart.duration));
    }
}
