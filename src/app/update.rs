// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Every message ends in the slideshow controller; the [`Effect`]s it
//! returns are turned into iced tasks here.

use super::{App, Message};
use crate::music::{MediaEvent, PlayDenied, PlayOutcome};
use crate::slideshow::{Command, Effect, SlideshowController};
use crate::ui::{intro, slideshow};
use iced::Task;
use std::time::Instant;

impl App {
    pub(super) fn handle_message(&mut self, message: Message) -> Task<Message> {
        self.now = Instant::now();
        let now = self.now;

        match message {
            Message::Frame(_) => Task::none(),
            Message::Intro(intro::Message::EnterPressed(ripple)) => {
                self.with_controller(|controller| controller.press_enter(ripple, now))
            }
            Message::Slideshow(message) => self.handle_slideshow_message(message, now),
            Message::Timer(timer) => {
                self.with_controller(|controller| controller.on_timer(timer, now))
            }
            Message::AutoPlayTick(handle) => {
                self.with_controller(|controller| controller.on_autoplay_tick(handle, now))
            }
            Message::Key(key) => self.with_controller(|controller| controller.on_key(key, now)),
            Message::Wheel(delta_y) => {
                self.with_controller(|controller| controller.on_wheel(delta_y, now))
            }
            Message::TouchStart(x) => self.with_controller(|controller| {
                controller.on_touch_start(x);
                Vec::new()
            }),
            Message::TouchEnd(x) => {
                self.with_controller(|controller| controller.on_touch_end(x, now))
            }
            Message::PlayOutcome(outcome) => self.with_controller(|controller| {
                controller.on_play_outcome(outcome);
                Vec::new()
            }),
            Message::Media(event) => {
                self.with_controller(|controller| controller.on_media_event(event))
            }
            Message::ImageLoaded { index, result } => match result {
                Ok(handle) => {
                    self.images.insert(index, handle);
                    self.with_controller(|controller| {
                        controller.on_image_loaded(index, now);
                        Vec::new()
                    })
                }
                Err(err) => {
                    // The slide keeps its caption
                    tracing::warn!(slide = index, "cannot load slide image: {err}");
                    Task::none()
                }
            },
            Message::MusicLoaded(result) => {
                let event = match result {
                    Ok(handle) => {
                        self.music = Some(handle);
                        MediaEvent::CanPlayThrough
                    }
                    Err(err) => MediaEvent::Error(err.to_string()),
                };
                self.with_controller(|controller| controller.on_media_event(event))
            }
        }
    }

    fn handle_slideshow_message(
        &mut self,
        message: slideshow::Message,
        now: Instant,
    ) -> Task<Message> {
        let command = match message {
            slideshow::Message::Previous => Command::Previous,
            slideshow::Message::Next => Command::Next,
            slideshow::Message::Dot(index) => Command::GoTo(index),
            slideshow::Message::ToggleMusic => Command::ToggleMusic,
            slideshow::Message::PointerEntered => {
                return self.with_controller(|controller| {
                    controller.pointer_entered();
                    Vec::new()
                });
            }
            slideshow::Message::PointerLeft => {
                return self.with_controller(|controller| {
                    controller.pointer_left();
                    Vec::new()
                });
            }
        };
        self.with_controller(|controller| controller.handle_command(command, now))
    }

    /// Runs `f` on the controller and executes the effects it returns.
    /// Without a controller the card is inert past the intro.
    fn with_controller(
        &mut self,
        f: impl FnOnce(&mut SlideshowController) -> Vec<Effect>,
    ) -> Task<Message> {
        let Some(controller) = self.controller.as_mut() else {
            return Task::none();
        };
        let effects = f(controller);
        Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
    }

    fn run_effect(&self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::Schedule { after, timer } => Task::perform(
                async move { tokio::time::sleep(after).await },
                move |()| Message::Timer(timer),
            ),
            Effect::PlayMusic => match self.music.clone() {
                Some(handle) => Task::perform(handle.play(), Message::PlayOutcome),
                None => Task::done(Message::PlayOutcome(PlayOutcome::Denied(
                    PlayDenied::NotReady,
                ))),
            },
            Effect::PauseMusic => match self.music.clone() {
                Some(handle) => Task::perform(handle.pause(), Message::Media),
                None => Task::none(),
            },
        }
    }
}
