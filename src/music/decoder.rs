// SPDX-License-Identifier: MPL-2.0
//! Whole-file audio decoding with `FFmpeg`.
//!
//! The background track is short enough to hold in memory, so it is decoded
//! once, resampled to the output device format, and then looped.

use super::output::OutputFormat;
use super::Track;
use crate::error::{Error, Result};
use std::path::Path;
use std::sync::{Arc, Once};

static FFMPEG_INIT: Once = Once::new();

/// Initializes `FFmpeg` once per process.
pub fn init_ffmpeg() -> Result<()> {
    let mut init_result: Result<()> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(Error::Audio(format!("FFmpeg initialization failed: {e}")));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

/// Decodes the best audio stream of `path` into interleaved f32 samples in
/// `format`.
pub fn decode_file(path: &Path, format: OutputFormat) -> Result<Track> {
    init_ffmpeg()?;

    let mut ictx = ffmpeg_next::format::input(path)
        .map_err(|e| Error::Audio(format!("Failed to open track: {e}")))?;

    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Audio)
        .ok_or_else(|| Error::Audio("No audio stream found".to_string()))?;
    let stream_index = input.index();

    let context = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
        .map_err(|e| Error::Audio(format!("Failed to create codec context: {e}")))?;
    let mut decoder = context
        .decoder()
        .audio()
        .map_err(|e| Error::Audio(format!("Failed to create audio decoder: {e}")))?;

    let layout = match format.channels {
        1 => ffmpeg_next::ChannelLayout::MONO,
        _ => ffmpeg_next::ChannelLayout::STEREO,
    };
    let channels = if format.channels == 1 { 1 } else { 2 };

    let mut resampler = ffmpeg_next::software::resampling::Context::get(
        decoder.format(),
        decoder.channel_layout(),
        decoder.rate(),
        ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Packed),
        layout,
        format.sample_rate,
    )
    .map_err(|e| Error::Audio(format!("Failed to create resampler: {e}")))?;

    let mut samples = Vec::new();
    let mut drain = |decoder: &mut ffmpeg_next::decoder::Audio, samples: &mut Vec<f32>| {
        let mut frame = ffmpeg_next::frame::Audio::empty();
        while decoder.receive_frame(&mut frame).is_ok() {
            let mut resampled = ffmpeg_next::frame::Audio::empty();
            match resampler.run(&frame, &mut resampled) {
                Ok(_) => append_samples(&resampled, channels, samples),
                Err(e) => tracing::debug!("skipping frame that failed to resample: {e}"),
            }
        }
    };

    for (stream, packet) in ictx.packets() {
        if stream.index() != stream_index {
            continue;
        }
        if let Err(e) = decoder.send_packet(&packet) {
            tracing::debug!("skipping undecodable audio packet: {e}");
            continue;
        }
        drain(&mut decoder, &mut samples);
    }
    if decoder.send_eof().is_ok() {
        drain(&mut decoder, &mut samples);
    }

    if samples.is_empty() {
        return Err(Error::Audio("Track contains no audio".to_string()));
    }

    tracing::debug!(
        path = %path.display(),
        samples = samples.len(),
        rate = format.sample_rate,
        "music decoded"
    );

    Ok(Track {
        samples: Arc::new(samples),
        sample_rate: format.sample_rate,
        channels,
    })
}

/// Appends the packed f32 samples of a resampled frame.
fn append_samples(frame: &ffmpeg_next::frame::Audio, channels: u16, out: &mut Vec<f32>) {
    let count = frame.samples() * channels as usize;
    out.extend(
        frame
            .data(0)
            .chunks_exact(4)
            .take(count)
            .map(|bytes| f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])),
    );
}
