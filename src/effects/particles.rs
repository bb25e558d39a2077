// SPDX-License-Identifier: MPL-2.0
//! Floating particles drawn behind the card.
//!
//! Every particle draws its size, opacity, rise duration, start delay and
//! horizontal lane independently, once, when the card starts.

use rand::Rng;
use std::ops::Range;
use std::time::Duration;

/// Diameter range in logical pixels.
pub const SIZE_RANGE: Range<f32> = 2.0..7.0;
pub const OPACITY_RANGE: Range<f32> = 0.2..0.8;
/// Time to rise through the whole window, in seconds.
pub const DURATION_RANGE_SECS: Range<f32> = 6.0..12.0;
/// Delay before the first rise, in seconds.
pub const DELAY_RANGE_SECS: Range<f32> = 0.0..3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub size: f32,
    pub opacity: f32,
    pub duration: Duration,
    pub delay: Duration,
    /// Horizontal position as a fraction of the width.
    pub lane: f32,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size: rng.gen_range(SIZE_RANGE),
            opacity: rng.gen_range(OPACITY_RANGE),
            duration: Duration::from_secs_f32(rng.gen_range(DURATION_RANGE_SECS)),
            delay: Duration::from_secs_f32(rng.gen_range(DELAY_RANGE_SECS)),
            lane: rng.gen_range(0.0..1.0),
        }
    }

    /// Position after `elapsed`, as `(x, y)` fractions of the window with the
    /// origin at the top-left. `None` while the start delay runs.
    pub fn position(&self, elapsed: Duration) -> Option<(f32, f32)> {
        let running = elapsed.checked_sub(self.delay)?;
        let period = self.duration.as_secs_f32();
        if period <= f32::EPSILON {
            return None;
        }
        let cycle = (running.as_secs_f32() % period) / period;
        Some((self.lane, 1.0 - cycle))
    }

    /// Opacity after `elapsed`; particles fade in at the bottom and out near the top.
    pub fn alpha(&self, elapsed: Duration) -> f32 {
        match self.position(elapsed) {
            Some((_, y)) => self.opacity * (y * 4.0).min(1.0) * ((1.0 - y) * 4.0).min(1.0),
            None => 0.0,
        }
    }
}

/// Draws `count` independent particles.
pub fn randomize<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn parameters_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for particle in randomize(&mut rng, 500) {
            assert!(SIZE_RANGE.contains(&particle.size));
            assert!(OPACITY_RANGE.contains(&particle.opacity));
            assert!(DURATION_RANGE_SECS.contains(&particle.duration.as_secs_f32()));
            assert!(particle.delay.as_secs_f32() < DELAY_RANGE_SECS.end);
            assert!((0.0..1.0).contains(&particle.lane));
        }
    }

    #[test]
    fn particles_are_drawn_independently() {
        let mut rng = StdRng::seed_from_u64(42);
        let particles = randomize(&mut rng, 20);
        let first = particles[0];
        assert!(particles.iter().skip(1).any(|p| p.size != first.size));
        assert!(particles.iter().skip(1).any(|p| p.delay != first.delay));
    }

    #[test]
    fn hidden_until_delay_elapses() {
        let particle = Particle {
            size: 3.0,
            opacity: 0.5,
            duration: Duration::from_secs(8),
            delay: Duration::from_secs(2),
            lane: 0.25,
        };
        assert_eq!(particle.position(Duration::from_secs(1)), None);
        assert_eq!(particle.alpha(Duration::from_secs(1)), 0.0);
        assert_eq!(particle.position(Duration::from_secs(2)), Some((0.25, 1.0)));
        assert_eq!(particle.position(Duration::from_secs(6)), Some((0.25, 0.5)));
        // Loops back to the bottom
        assert_eq!(particle.position(Duration::from_secs(10)), Some((0.25, 1.0)));
    }

    #[test]
    fn zero_count_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(randomize(&mut rng, 0).is_empty());
    }
}
