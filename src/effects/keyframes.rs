// SPDX-License-Identifier: MPL-2.0
//! Named keyframe curves used by the card's animations.
//!
//! Each curve maps a normalized progress (0.0 to 1.0) to a [`Pose`] that the
//! widgets apply when drawing. An [`Animation`] pins a curve to the instant
//! it started so views can sample it from the current frame time.

use std::time::{Duration, Instant};

/// Visual transform at one point of an animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub scale: f32,
    /// Rotation in radians.
    pub rotation: f32,
    /// Vertical offset in logical pixels, negative is up.
    pub offset_y: f32,
    /// Blur radius in logical pixels.
    pub blur: f32,
    /// Hue rotation in degrees.
    pub hue_shift: f32,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        opacity: 1.0,
        scale: 1.0,
        rotation: 0.0,
        offset_y: 0.0,
        blur: 0.0,
        hue_shift: 0.0,
    };
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyframes {
    IntroFadeOut,
    IntroFadeIn,
    SlideshowFadeIn,
    CaptionSlideUp,
    RippleExpand,
    ImageReveal,
    HeartExplode,
    LovePulse,
}

impl Keyframes {
    /// Default duration of one run of the curve.
    pub fn duration(self) -> Duration {
        match self {
            Keyframes::IntroFadeOut | Keyframes::CaptionSlideUp => Duration::from_millis(800),
            Keyframes::IntroFadeIn | Keyframes::SlideshowFadeIn | Keyframes::ImageReveal => {
                Duration::from_secs(1)
            }
            Keyframes::RippleExpand => Duration::from_millis(600),
            Keyframes::HeartExplode => Duration::from_secs(3),
            Keyframes::LovePulse => Duration::from_secs(2),
        }
    }

    /// Whether the curve loops forever.
    pub fn repeats(self) -> bool {
        matches!(self, Keyframes::LovePulse)
    }

    /// Samples the curve at `progress`, clamped to `[0, 1]`.
    pub fn sample(self, progress: f32) -> Pose {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Keyframes::IntroFadeOut => {
                let e = ease_in_out(t);
                Pose {
                    opacity: 1.0 - e,
                    scale: lerp(1.0, 0.95, e),
                    offset_y: lerp(0.0, -30.0, e),
                    ..Pose::IDENTITY
                }
            }
            Keyframes::IntroFadeIn => Pose {
                opacity: ease_out(t),
                ..Pose::IDENTITY
            },
            Keyframes::SlideshowFadeIn => {
                let e = ease_out(t);
                Pose {
                    opacity: e,
                    scale: lerp(1.05, 1.0, e),
                    ..Pose::IDENTITY
                }
            }
            Keyframes::CaptionSlideUp => {
                let e = ease_out(t);
                Pose {
                    opacity: e,
                    offset_y: lerp(30.0, 0.0, e),
                    ..Pose::IDENTITY
                }
            }
            Keyframes::RippleExpand => {
                let e = ease_out(t);
                Pose {
                    opacity: 1.0 - e,
                    scale: e,
                    ..Pose::IDENTITY
                }
            }
            Keyframes::ImageReveal => {
                let e = ease_out(t);
                Pose {
                    opacity: e,
                    scale: lerp(1.1, 1.0, e),
                    blur: lerp(5.0, 0.0, e),
                    ..Pose::IDENTITY
                }
            }
            Keyframes::HeartExplode => {
                let e = ease_out(t);
                let turn = std::f32::consts::TAU;
                if e < 0.5 {
                    let k = e / 0.5;
                    Pose {
                        opacity: 1.0,
                        scale: lerp(0.0, 1.2, k),
                        rotation: lerp(0.0, turn / 2.0, k),
                        ..Pose::IDENTITY
                    }
                } else {
                    let k = (e - 0.5) / 0.5;
                    Pose {
                        opacity: 1.0 - k,
                        scale: lerp(1.2, 0.5, k),
                        rotation: lerp(turn / 2.0, turn, k),
                        offset_y: lerp(0.0, -100.0, k),
                        ..Pose::IDENTITY
                    }
                }
            }
            Keyframes::LovePulse => {
                // Triangle wave: 0 -> 1 at half-period -> 0
                let wave = ease_in_out(1.0 - (2.0 * t - 1.0).abs());
                Pose {
                    scale: lerp(1.0, 1.05, wave),
                    hue_shift: lerp(0.0, 10.0, wave),
                    ..Pose::IDENTITY
                }
            }
        }
    }
}

/// A keyframe curve running since `started`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub keyframes: Keyframes,
    pub started: Instant,
    pub duration: Duration,
}

impl Animation {
    pub fn start(keyframes: Keyframes, now: Instant) -> Self {
        Self {
            keyframes,
            started: now,
            duration: keyframes.duration(),
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Progress of the current run in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        let total = self.duration.as_secs_f32();
        if total <= f32::EPSILON {
            return 1.0;
        }
        if self.keyframes.repeats() {
            (elapsed % total) / total
        } else {
            (elapsed / total).min(1.0)
        }
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        !self.keyframes.repeats() && now.saturating_duration_since(self.started) >= self.duration
    }

    /// Current pose; finished animations hold their last frame.
    pub fn pose(&self, now: Instant) -> Pose {
        self.keyframes.sample(self.progress(now))
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn intro_fade_out_ends_invisible_and_lifted() {
        let start = Keyframes::IntroFadeOut.sample(0.0);
        let end = Keyframes::IntroFadeOut.sample(1.0);
        assert!(approx(start.opacity, 1.0));
        assert!(approx(end.opacity, 0.0));
        assert!(approx(end.offset_y, -30.0));
        assert!(approx(end.scale, 0.95));
    }

    #[test]
    fn heart_explode_peaks_midway_and_fades() {
        let end = Keyframes::HeartExplode.sample(1.0);
        assert!(approx(end.opacity, 0.0));
        assert!(approx(end.scale, 0.5));
        assert!(approx(end.rotation, std::f32::consts::TAU));
        assert!(approx(end.offset_y, -100.0));

        let start = Keyframes::HeartExplode.sample(0.0);
        assert!(approx(start.scale, 0.0));
        assert!(approx(start.opacity, 1.0));
    }

    #[test]
    fn image_reveal_clears_blur() {
        assert!(approx(Keyframes::ImageReveal.sample(0.0).blur, 5.0));
        assert!(approx(Keyframes::ImageReveal.sample(1.0).blur, 0.0));
    }

    #[test]
    fn love_pulse_returns_to_rest() {
        let rest = Keyframes::LovePulse.sample(0.0);
        let peak = Keyframes::LovePulse.sample(0.5);
        assert!(approx(rest.scale, 1.0));
        assert!(approx(peak.scale, 1.05));
        assert!(approx(peak.hue_shift, 10.0));
    }

    #[test]
    fn progress_is_clamped_for_one_shot_animations() {
        let now = Instant::now();
        let animation = Animation::start(Keyframes::CaptionSlideUp, now);
        let later = now + Duration::from_secs(5);
        assert!(approx(animation.progress(later), 1.0));
        assert!(animation.is_finished(later));
        assert!(!animation.is_finished(now));
    }

    #[test]
    fn repeating_animation_never_finishes() {
        let now = Instant::now();
        let animation = Animation::start(Keyframes::LovePulse, now);
        let later = now + Duration::from_secs(3);
        assert!(!animation.is_finished(later));
        assert!(approx(animation.progress(later), 0.5));
    }

    #[test]
    fn custom_duration_overrides_default() {
        let now = Instant::now();
        let animation =
            Animation::start(Keyframes::HeartExplode, now).with_duration(Duration::from_secs(2));
        assert!(animation.is_finished(now + Duration::from_secs(2)));
    }
}
