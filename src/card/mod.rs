// SPDX-License-Identifier: MPL-2.0
//! The card document: everything the recipient sees, declared in TOML.
//!
//! A card is made of an intro panel with an enter control, a slideshow
//! panel with previous/next controls, a list of slides, optional dot
//! indicators and an optional music track. Which tables are present decides
//! which parts of the card exist; see [`anchors`] for the ones the slideshow
//! cannot do without.
//!
//! ```toml
//! [intro]
//! title = "Happy Anniversary"
//!
//! [intro.enter]
//! label = "Open your card"
//!
//! [slideshow.controls]
//! previous = "‹"
//! next = "›"
//!
//! [[slides]]
//! title = "The day we met"
//! date = "March 2018"
//! image = "photos/met.jpg"
//! ```

pub mod anchors;

pub use anchors::Anchors;

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const SAMPLE_CARD: &str = include_str!("../../assets/cards/sample.toml");

/// Full card document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub intro: Option<IntroPanel>,

    #[serde(default)]
    pub slideshow: Option<SlideshowPanel>,

    #[serde(default)]
    pub slides: Vec<Slide>,

    #[serde(default)]
    pub dots: Option<Dots>,

    #[serde(default)]
    pub music: Option<Music>,
}

/// Greeting screen shown before the slideshow.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IntroPanel {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub message: Option<String>,

    /// Glyph drawn above the title; pulses once the card has settled.
    #[serde(default)]
    pub heart: Option<String>,

    #[serde(default)]
    pub enter: Option<EnterControl>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnterControl {
    pub label: String,
}

/// Panel holding the slides.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SlideshowPanel {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub controls: Option<NavControls>,
}

/// Labels of the previous/next buttons. A missing label means a missing button.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NavControls {
    #[serde(default)]
    pub previous: Option<String>,

    #[serde(default)]
    pub next: Option<String>,
}

/// One memory.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Slide {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub caption: Option<String>,

    #[serde(default)]
    pub image: Option<PathBuf>,

    /// Caption pulses gently while the slide is shown.
    #[serde(default)]
    pub highlight: bool,
}

impl Slide {
    /// Title and date pair read out when the slide becomes active.
    pub fn announcement(&self) -> Option<(&str, &str)> {
        match (&self.title, &self.date) {
            (Some(title), Some(date)) => Some((title.as_str(), date.as_str())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dots {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Music {
    pub file: PathBuf,

    /// Show the play/pause toggle.
    #[serde(default = "default_true")]
    pub toggle: bool,
}

fn default_true() -> bool {
    true
}

impl Card {
    /// The card bundled with the application.
    pub fn sample() -> Self {
        // The sample is checked by `sample_card_parses`
        toml::from_str(SAMPLE_CARD).unwrap_or_default()
    }

    /// Parses a card document. Relative paths stay relative.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Card(e.to_string()))
    }

    /// Loads a card file and resolves its relative image and music paths
    /// against the file's directory.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut card = Self::from_toml(&content)?;
        if let Some(base) = path.parent() {
            card.resolve_paths(base);
        }
        Ok(card)
    }

    fn resolve_paths(&mut self, base: &Path) {
        for slide in &mut self.slides {
            if let Some(image) = slide.image.as_mut() {
                if image.is_relative() {
                    *image = base.join(&*image);
                }
            }
        }
        if let Some(music) = self.music.as_mut() {
            if music.file.is_relative() {
                music.file = base.join(&music.file);
            }
        }
    }

    /// Paths of slide images, indexed like the slides.
    pub fn image_paths(&self) -> impl Iterator<Item = (usize, &Path)> {
        self.slides
            .iter()
            .enumerate()
            .filter_map(|(index, slide)| slide.image.as_deref().map(|path| (index, path)))
    }

    pub fn intro_title(&self) -> Option<&str> {
        self.intro
            .as_ref()
            .map(|intro| intro.title.as_str())
            .filter(|title| !title.is_empty())
    }
}

/// Loads the card named on the command line, or the sample card.
///
/// Returns the i18n key of a warning when the named card could not be read.
pub fn load_or_sample(path: Option<&Path>) -> (Card, Option<String>) {
    let Some(path) = path else {
        return (Card::sample(), None);
    };
    match Card::load_from_path(path) {
        Ok(card) => (card, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), "cannot open card: {err}");
            (
                Card::sample(),
                Some("notification-card-load-error".to_string()),
            )
        }
    }
}
