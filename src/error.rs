// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Card(String),
    Audio(String),
    Image(String),
    Init(InitError),
}

/// Element of the card layout that the slideshow cannot work without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorKind {
    IntroPanel,
    SlideshowPanel,
    EnterControl,
    PreviousControl,
    NextControl,
}

impl AnchorKind {
    /// Path of the table in the card document that declares this anchor.
    pub fn card_table(self) -> &'static str {
        match self {
            AnchorKind::IntroPanel => "[intro]",
            AnchorKind::SlideshowPanel => "[slideshow]",
            AnchorKind::EnterControl => "[intro.enter]",
            AnchorKind::PreviousControl => "[slideshow.controls] previous",
            AnchorKind::NextControl => "[slideshow.controls] next",
        }
    }
}

/// Raised when the slideshow controller cannot start.
///
/// The application keeps showing the intro panel and never reveals the
/// slideshow when this happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitError {
    MissingAnchor(AnchorKind),
}

impl InitError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            InitError::MissingAnchor(_) => "error-card-missing-element",
        }
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::MissingAnchor(kind) => {
                write!(f, "required element {} not found in card", kind.card_table())
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Card(e) => write!(f, "Card Error: {}", e),
            Error::Audio(e) => write!(f, "Audio Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Init(e) => write!(f, "Init Error: {}", e),
        }
    }
}

impl From<InitError> for Error {
    fn from(err: InitError) -> Self {
        Error::Init(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
