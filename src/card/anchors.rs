// SPDX-License-Identifier: MPL-2.0
//! Lookup of the card elements the slideshow controller binds to.
//!
//! The intro panel, the slideshow panel, the enter control and both
//! navigation controls are mandatory. Slides, dot indicators and the music
//! toggle are optional and only reduce what the card can do.

use super::Card;
use crate::error::{AnchorKind, InitError};
use std::path::PathBuf;

/// Resolved view of the elements present in a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchors {
    pub slide_count: usize,
    /// Number of dot indicators; zero when the card has none.
    pub dot_count: usize,
    /// Music track, if any.
    pub music_file: Option<PathBuf>,
    /// Whether the music toggle is shown.
    pub music_toggle: bool,
    /// Slides whose caption pulses.
    pub highlighted: Vec<usize>,
}

impl Anchors {
    /// Finds every anchor in `card`, failing on the first missing mandatory one.
    pub fn resolve(card: &Card) -> Result<Self, InitError> {
        let intro = card
            .intro
            .as_ref()
            .ok_or(InitError::MissingAnchor(AnchorKind::IntroPanel))?;
        let slideshow = card
            .slideshow
            .as_ref()
            .ok_or(InitError::MissingAnchor(AnchorKind::SlideshowPanel))?;
        if intro.enter.is_none() {
            return Err(InitError::MissingAnchor(AnchorKind::EnterControl));
        }
        let controls = slideshow.controls.as_ref();
        if controls.and_then(|c| c.previous.as_ref()).is_none() {
            return Err(InitError::MissingAnchor(AnchorKind::PreviousControl));
        }
        if controls.and_then(|c| c.next.as_ref()).is_none() {
            return Err(InitError::MissingAnchor(AnchorKind::NextControl));
        }

        let slide_count = card.slides.len();
        let dot_count = match &card.dots {
            Some(dots) if dots.enabled => slide_count,
            _ => 0,
        };

        Ok(Self {
            slide_count,
            dot_count,
            music_file: card.music.as_ref().map(|music| music.file.clone()),
            music_toggle: card.music.as_ref().is_some_and(|music| music.toggle),
            highlighted: card
                .slides
                .iter()
                .enumerate()
                .filter(|(_, slide)| slide.highlight)
                .map(|(index, _)| index)
                .collect(),
        })
    }
}
