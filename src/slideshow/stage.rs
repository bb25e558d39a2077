// SPDX-License-Identifier: MPL-2.0
//! View state of the card.
//!
//! The stage is what the controller mutates and what the view renders:
//! which panel is visible, which slide is active, which animations run.

use crate::effects::{ActiveRipple, Animation, HeartBurst, Keyframes};
use std::time::Instant;

/// Visibility of a panel plus the animation it is playing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Panel {
    pub visible: bool,
    pub animation: Option<Animation>,
}

impl Panel {
    pub fn shown() -> Self {
        Self {
            visible: true,
            animation: None,
        }
    }

    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn show_with(&mut self, keyframes: Keyframes, now: Instant) {
        self.visible = true;
        self.animation = Some(Animation::start(keyframes, now));
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.animation = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlideView {
    pub active: bool,
    pub caption: Option<Animation>,
    pub image_loaded: bool,
    pub image_reveal: Option<Animation>,
    pub highlight: bool,
}

/// Text read out when a slide becomes active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub title: String,
    pub date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MusicControl {
    pub visible: bool,
    pub playing: bool,
    pub muted: bool,
    pub ready: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stage {
    pub intro: Panel,
    pub slideshow: Panel,
    pub slides: Vec<SlideView>,
    /// Active flag of each dot indicator.
    pub dots: Vec<bool>,
    pub announcement: Option<Announcement>,
    pub autoplay_running: bool,
    pub music: MusicControl,
    pub ripple: Option<ActiveRipple>,
    pub heart_burst: Option<HeartBurst>,
}

impl Stage {
    /// The card before (or without) a slideshow: intro shown, slideshow hidden.
    pub fn pre_slideshow(slide_count: usize) -> Self {
        Self {
            intro: Panel::shown(),
            slideshow: Panel::hidden(),
            slides: vec![SlideView::default(); slide_count],
            ..Self::default()
        }
    }

    pub fn active_slide(&self) -> Option<usize> {
        self.slides.iter().position(|slide| slide.active)
    }

    /// Marks only `index` active, on slides and dots alike.
    pub fn activate(&mut self, index: usize, now: Instant) {
        for (i, slide) in self.slides.iter_mut().enumerate() {
            slide.active = i == index;
            slide.caption = slide
                .active
                .then(|| Animation::start(Keyframes::CaptionSlideUp, now));
        }
        for (i, dot) in self.dots.iter_mut().enumerate() {
            *dot = i == index;
        }
    }

    pub fn deactivate_all(&mut self) {
        for slide in &mut self.slides {
            slide.active = false;
            slide.caption = None;
        }
        self.dots.iter_mut().for_each(|dot| *dot = false);
        self.announcement = None;
    }

    /// Whether a one-shot animation is still running at `now`.
    pub fn is_animating(&self, now: Instant) -> bool {
        let running = |animation: &Option<Animation>| {
            animation.is_some_and(|animation| !animation.is_finished(now))
        };
        running(&self.intro.animation)
            || running(&self.slideshow.animation)
            || self
                .slides
                .iter()
                .any(|slide| running(&slide.caption) || running(&slide.image_reveal))
            || self.ripple.is_some()
            || self.live_heart_burst(now).is_some()
    }

    /// The heart burst still within its lifetime at `now`.
    pub fn live_heart_burst(&self, now: Instant) -> Option<&HeartBurst> {
        self.heart_burst
            .as_ref()
            .filter(|burst| !burst.is_expired(now))
    }
}
