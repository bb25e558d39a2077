// SPDX-License-Identifier: MPL-2.0
//! Player thread and the handle used to drive it.

use super::output::AudioOutput;
use super::{MediaEvent, PlayDenied, PlayOutcome, Track, Volume};
use crate::error::Error;
use tokio::sync::{mpsc, oneshot};

#[derive(Debug)]
enum PlayerCommand {
    Play(oneshot::Sender<PlayOutcome>),
    Pause(oneshot::Sender<MediaEvent>),
}

/// Cloneable handle to the player thread. The thread exits when the last
/// handle is dropped.
#[derive(Debug, Clone)]
pub struct MusicHandle {
    command_tx: mpsc::UnboundedSender<PlayerCommand>,
}

impl MusicHandle {
    /// Starts the player thread for `track`.
    pub fn spawn(track: Track, volume: Volume) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let spawned = std::thread::Builder::new()
            .name("keepsake-music".to_string())
            .spawn(move || player_loop(track, volume, command_rx));
        if let Err(e) = spawned {
            // The receiver is gone with the closure; every request now
            // reports a closed output.
            tracing::error!("cannot start music thread: {e}");
        }
        Self { command_tx }
    }

    pub async fn play(self) -> PlayOutcome {
        let (reply_tx, reply_rx) = oneshot::channel();
        if self.command_tx.send(PlayerCommand::Play(reply_tx)).is_err() {
            return PlayOutcome::Denied(PlayDenied::OutputClosed);
        }
        reply_rx
            .await
            .unwrap_or(PlayOutcome::Denied(PlayDenied::OutputClosed))
    }

    pub async fn pause(self) -> MediaEvent {
        let (reply_tx, reply_rx) = oneshot::channel();
        if self.command_tx.send(PlayerCommand::Pause(reply_tx)).is_err() {
            return MediaEvent::Error("audio output closed".to_string());
        }
        reply_rx
            .await
            .unwrap_or_else(|_| MediaEvent::Error("audio output closed".to_string()))
    }
}

fn player_loop(track: Track, volume: Volume, mut command_rx: mpsc::UnboundedReceiver<PlayerCommand>) {
    // Opened lazily so that a card without sound never touches the device
    let mut output: Option<AudioOutput> = None;

    while let Some(command) = command_rx.blocking_recv() {
        match command {
            PlayerCommand::Play(reply) => {
                let outcome = match ensure_output(&mut output, &track, volume) {
                    Ok(output) => match output.play() {
                        Ok(()) => PlayOutcome::Started,
                        Err(e) => PlayOutcome::Denied(PlayDenied::Stream(e.to_string())),
                    },
                    Err(denied) => PlayOutcome::Denied(denied),
                };
                let _ = reply.send(outcome);
            }
            PlayerCommand::Pause(reply) => {
                if let Some(output) = &output {
                    output.pause();
                }
                let _ = reply.send(MediaEvent::Paused);
            }
        }
    }
    tracing::debug!("music thread finished");
}

fn ensure_output<'a>(
    output: &'a mut Option<AudioOutput>,
    track: &Track,
    volume: Volume,
) -> Result<&'a AudioOutput, PlayDenied> {
    if output.is_none() {
        let opened = AudioOutput::new(track, volume).map_err(|err| match err {
            Error::Audio(message) if message.starts_with("No audio output device") => {
                PlayDenied::NoOutputDevice
            }
            other => PlayDenied::Stream(other.to_string()),
        })?;
        *output = Some(opened);
    }
    output.as_ref().ok_or(PlayDenied::NotReady)
}

#[cfg(test)]
impl MusicHandle {
    /// Handle whose player is already gone.
    fn detached() -> Self {
        let (command_tx, _) = mpsc::unbounded_channel();
        Self { command_tx }
    }
}
