// SPDX-License-Identifier: MPL-2.0
//! Background loading of slide images and the music track.

use super::Message;
use crate::card::Card;
use crate::error::{Error, Result};
use crate::music::{self, MusicHandle, Volume};
use iced::widget::image;
use iced::Task;
use std::path::{Path, PathBuf};

/// Decodes every slide image; each one reports on its own.
pub fn load_images(card: &Card) -> Task<Message> {
    Task::batch(card.image_paths().map(|(index, path)| {
        Task::perform(decode_image(path.to_path_buf()), move |result| {
            Message::ImageLoaded { index, result }
        })
    }))
}

/// Decodes the track and starts its player thread.
pub fn load_music(path: &Path, volume: Volume) -> Task<Message> {
    Task::perform(music::load(path.to_path_buf()), move |result| {
        Message::MusicLoaded(result.map(|track| MusicHandle::spawn(track, volume)))
    })
}

/// Decodes an image file to RGBA off the UI thread.
pub async fn decode_image(path: PathBuf) -> Result<image::Handle> {
    tokio::task::spawn_blocking(move || {
        let rgba = image_rs::open(&path)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        tracing::debug!(path = %path.display(), width, height, "slide image decoded");
        Ok(image::Handle::from_rgba(width, height, rgba.into_raw()))
    })
    .await
    .map_err(|e| Error::Image(format!("decoder task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn decodes_png_to_handle() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("slide.png");
        image_rs::RgbaImage::from_pixel(4, 3, image_rs::Rgba([200, 40, 90, 255]))
            .save(&path)
            .expect("failed to write png");

        assert!(decode_image(path).await.is_ok());
    }

    #[tokio::test]
    async fn missing_image_is_an_image_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = decode_image(dir.path().join("missing.png")).await;
        assert!(matches!(result, Err(Error::Image(_))));
    }
}
