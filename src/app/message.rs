// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::music::{MediaEvent, MusicHandle, PlayOutcome};
use crate::slideshow::{AutoPlayHandle, Key, Timer};
use crate::ui::{intro, slideshow};
use iced::widget::image;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. Panel messages are
/// forwarded; everything else reaches the slideshow controller directly.
#[derive(Debug, Clone)]
pub enum Message {
    Intro(intro::Message),
    Slideshow(slideshow::Message),
    /// A timer scheduled by the controller fired.
    Timer(Timer),
    AutoPlayTick(AutoPlayHandle),
    /// Animation frame; only redraws.
    Frame(Instant),
    Key(Key),
    /// Wheel travel in logical pixels, positive when scrolling down.
    Wheel(f32),
    TouchStart(f32),
    TouchEnd(f32),
    PlayOutcome(PlayOutcome),
    Media(MediaEvent),
    /// Result of decoding the image of slide `index`.
    ImageLoaded {
        index: usize,
        result: Result<image::Handle, Error>,
    },
    /// The music track finished decoding and its player thread is up.
    MusicLoaded(Result<MusicHandle, Error>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Card document to open instead of the bundled sample.
    pub card_path: Option<String>,
}
