// SPDX-License-Identifier: MPL-2.0
//! Background music.
//!
//! The track is decoded up front by [`load`], then handed to a
//! [`MusicHandle`], whose player thread owns the audio output. Starting
//! playback can be refused (no device, stream failure); callers learn it
//! from the returned [`PlayOutcome`] instead of an error.

pub mod decoder;
pub mod output;
pub mod player;
pub mod volume;

pub use output::OutputFormat;
pub use player::MusicHandle;
pub use volume::Volume;

use crate::error::{Error, Result};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Fully decoded track, interleaved f32 samples in `[-1.0, 1.0]`.
#[derive(Clone)]
pub struct Track {
    pub samples: Arc<Vec<f32>>,
    pub sample_rate: u32,
    pub channels: u16,
}

impl fmt::Debug for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Track")
            .field("samples", &self.samples.len())
            .field("sample_rate", &self.sample_rate)
            .field("channels", &self.channels)
            .finish()
    }
}

/// Why a play request did not start the music.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayDenied {
    /// The track is still decoding or failed to decode.
    NotReady,
    NoOutputDevice,
    /// The player thread is gone.
    OutputClosed,
    Stream(String),
}

impl fmt::Display for PlayDenied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayDenied::NotReady => write!(f, "track not ready"),
            PlayDenied::NoOutputDevice => write!(f, "no audio output device"),
            PlayDenied::OutputClosed => write!(f, "audio output closed"),
            PlayDenied::Stream(e) => write!(f, "{e}"),
        }
    }
}

/// Result of asking the output to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    Started,
    Denied(PlayDenied),
}

/// State changes reported by the music side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaEvent {
    Played,
    Paused,
    Error(String),
    /// The track is decoded and can play from start to end.
    CanPlayThrough,
}

/// Decodes `path` off the UI thread, matching the default output format
/// when a device is present.
pub async fn load(path: PathBuf) -> Result<Track> {
    tokio::task::spawn_blocking(move || {
        let format = output::preferred_format().unwrap_or_else(|err| {
            tracing::debug!("using fallback output format: {err}");
            OutputFormat::FALLBACK
        });
        decoder::decode_file(&path, format)
    })
    .await
    .map_err(|e| Error::Audio(format!("decoder task failed: {e}")))?
}
