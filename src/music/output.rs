// SPDX-License-Identifier: MPL-2.0
//! Looping audio output using cpal.
//!
//! [`AudioOutput`] holds a `cpal::Stream`, which must stay on the thread that
//! created it; the player thread owns it for the whole session.

use super::{Track, Volume};
use crate::error::{Error, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

/// Sample layout the track is decoded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFormat {
    pub sample_rate: u32,
    pub channels: u16,
}

impl OutputFormat {
    /// Used when no output device can be queried.
    pub const FALLBACK: OutputFormat = OutputFormat {
        sample_rate: 44_100,
        channels: 2,
    };
}

/// Format of the default output device.
pub fn preferred_format() -> Result<OutputFormat> {
    let device = cpal::default_host()
        .default_output_device()
        .ok_or_else(|| Error::Audio("No audio output device found".to_string()))?;
    let config = device
        .default_output_config()
        .map_err(|e| Error::Audio(format!("Failed to get audio config: {e}")))?;
    Ok(OutputFormat {
        sample_rate: config.sample_rate(),
        channels: config.channels(),
    })
}

/// State shared with the realtime callback.
struct SharedState {
    /// Gain stored as f32 bits for atomic access.
    gain_bits: AtomicU32,
    paused: AtomicBool,
}

impl SharedState {
    fn new(volume: Volume) -> Self {
        Self {
            gain_bits: AtomicU32::new(volume.gain().to_bits()),
            paused: AtomicBool::new(true),
        }
    }

    fn gain(&self) -> f32 {
        f32::from_bits(self.gain_bits.load(Ordering::Relaxed))
    }

    fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::Relaxed);
    }
}

/// Read position over a track that wraps to the start at the end.
struct LoopCursor {
    samples: Arc<Vec<f32>>,
    position: usize,
}

impl LoopCursor {
    fn new(samples: Arc<Vec<f32>>) -> Self {
        Self {
            samples,
            position: 0,
        }
    }

    fn next_sample(&mut self) -> f32 {
        let Some(&sample) = self.samples.get(self.position) else {
            return 0.0;
        };
        self.position += 1;
        if self.position >= self.samples.len() {
            self.position = 0;
        }
        sample
    }
}

pub struct AudioOutput {
    shared_state: Arc<SharedState>,
    stream: cpal::Stream,
}

impl AudioOutput {
    /// Opens the default output device for `track`. Starts paused.
    pub fn new(track: &Track, volume: Volume) -> Result<Self> {
        let device = cpal::default_host()
            .default_output_device()
            .ok_or_else(|| Error::Audio("No audio output device found".to_string()))?;
        let supported_config = device
            .default_output_config()
            .map_err(|e| Error::Audio(format!("Failed to get audio config: {e}")))?;

        if supported_config.sample_rate() != track.sample_rate
            || supported_config.channels() != track.channels
        {
            tracing::warn!(
                track_rate = track.sample_rate,
                track_channels = track.channels,
                "output device format differs from decoded track"
            );
        }

        let shared_state = Arc::new(SharedState::new(volume));
        let cursor = LoopCursor::new(Arc::clone(&track.samples));
        let shared = Arc::clone(&shared_state);

        let stream = match supported_config.sample_format() {
            cpal::SampleFormat::F32 => {
                Self::build_stream::<f32>(&device, &supported_config.into(), cursor, shared)?
            }
            cpal::SampleFormat::I16 => {
                Self::build_stream::<i16>(&device, &supported_config.into(), cursor, shared)?
            }
            cpal::SampleFormat::U16 => {
                Self::build_stream::<u16>(&device, &supported_config.into(), cursor, shared)?
            }
            _ => return Err(Error::Audio("Unsupported audio sample format".to_string())),
        };

        Ok(Self {
            shared_state,
            stream,
        })
    }

    fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        mut cursor: LoopCursor,
        shared_state: Arc<SharedState>,
    ) -> Result<cpal::Stream> {
        device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    if shared_state.is_paused() {
                        for sample in data.iter_mut() {
                            *sample = T::from_sample(0.0f32);
                        }
                        return;
                    }
                    let gain = shared_state.gain();
                    for sample in data.iter_mut() {
                        // Stay below 1.0 so i16 conversion cannot overflow
                        let value = (cursor.next_sample() * gain).clamp(-1.0, 0.999_999_9);
                        *sample = T::from_sample(value);
                    }
                },
                |err| {
                    tracing::error!("audio output error: {err}");
                },
                None,
            )
            .map_err(|e| Error::Audio(format!("Failed to build audio stream: {e}")))
    }

    pub fn play(&self) -> Result<()> {
        self.stream
            .play()
            .map_err(|e| Error::Audio(format!("Failed to start audio stream: {e}")))?;
        self.shared_state.set_paused(false);
        Ok(())
    }

    pub fn pause(&self) {
        self.shared_state.set_paused(true);
        if let Err(e) = self.stream.pause() {
            tracing::debug!("stream pause unsupported, output silenced instead: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_loops_over_track() {
        let mut cursor = LoopCursor::new(Arc::new(vec![0.1, 0.2, 0.3]));
        let read: Vec<f32> = (0..7).map(|_| cursor.next_sample()).collect();
        assert_eq!(read, vec![0.1, 0.2, 0.3, 0.1, 0.2, 0.3, 0.1]);
    }

    #[test]
    fn empty_track_is_silent() {
        let mut cursor = LoopCursor::new(Arc::new(Vec::new()));
        assert_eq!(cursor.next_sample(), 0.0);
        assert_eq!(cursor.next_sample(), 0.0);
    }

    #[test]
    fn shared_state_starts_paused_with_perceptual_gain() {
        let state = SharedState::new(Volume::new(0.5));
        assert!(state.is_paused());
        assert!((state.gain() - 0.25).abs() < 1e-6);

        state.set_paused(false);
        assert!(!state.is_paused());
    }
}
