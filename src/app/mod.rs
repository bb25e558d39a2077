// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the card, the slideshow
//! controller and the decorative layer.
//!
//! The `App` struct loads the config and the card, binds the controller and
//! translates its effects into iced tasks. When the card lacks a mandatory
//! element the controller is absent: the intro stays up with a warning and
//! nothing past it reacts.

mod loading;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::card::{self, Card};
use crate::config::{self, Config};
use crate::effects::{Ambience, RandomHeartBurst};
use crate::error::InitError;
use crate::i18n::fluent::I18n;
use crate::music::{MusicHandle, Volume};
use crate::slideshow::{AutoPlayInterval, ControllerOptions, SlideshowController, Stage};
use crate::ui::theme;
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    card: Card,
    controller: Option<SlideshowController>,
    /// Shown when the controller could not bind to the card.
    fallback_stage: Stage,
    ambience: Ambience,
    /// Player of the card's track once decoded.
    music: Option<MusicHandle>,
    /// Decoded slide images by slide index.
    images: HashMap<usize, image::Handle>,
    /// Translated warning shown on the intro.
    warning: Option<String>,
    /// Clock of the frame being built.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("controller", &self.controller)
            .field("images", &self.images.len())
            .field("music", &self.music.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Controller tunables from the user configuration.
pub fn controller_options(config: &Config) -> ControllerOptions {
    ControllerOptions {
        autoplay_interval: AutoPlayInterval::new(
            config
                .slideshow
                .autoplay_interval_secs
                .unwrap_or(config::DEFAULT_AUTOPLAY_INTERVAL_SECS),
        ),
        play_music_on_enter: config.audio.play_on_enter.unwrap_or(true),
    }
}

impl App {
    /// Loads config and card, binds the controller and starts decoding the
    /// slide images and the music track.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let now = Instant::now();
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let (card, card_warning) = card::load_or_sample(flags.card_path.as_deref().map(Path::new));

        let mut warning = config_warning.or(card_warning).map(|key| i18n.tr(&key));

        let launcher = RandomHeartBurst::new(config.effects.heart_burst.unwrap_or(true));
        let controller = match SlideshowController::initialize(
            &card,
            Box::new(launcher),
            controller_options(&config),
        ) {
            Ok(controller) => Some(controller),
            Err(err) => {
                warning = Some(init_error_message(&i18n, &err));
                None
            }
        };

        let particle_count = config
            .effects
            .particle_count
            .unwrap_or(config::DEFAULT_PARTICLE_COUNT)
            .min(config::MAX_PARTICLE_COUNT);
        let ambience = Ambience::new(&mut rand::thread_rng(), particle_count as usize, now);

        let mut tasks = Vec::new();
        if controller.is_some() {
            tasks.push(loading::load_images(&card));
            if let Some(music) = &card.music {
                let volume = Volume::new(config.audio.volume.unwrap_or(config::DEFAULT_VOLUME));
                tasks.push(loading::load_music(&music.file, volume));
            }
        }

        let app = App {
            i18n,
            fallback_stage: Stage::pre_slideshow(0),
            card,
            controller,
            ambience,
            music: None,
            images: HashMap::new(),
            warning,
            now,
        };

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.card.intro_title() {
            Some(title) => format!("{title} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        theme::app_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let autoplay_sub = match &self.controller {
            Some(controller) => subscription::create_autoplay_subscription(
                controller.autoplay_handle(),
                controller.autoplay_interval(),
            ),
            None => Subscription::none(),
        };
        let frame_sub = subscription::create_frame_subscription(self.is_animating());

        Subscription::batch([event_sub, autoplay_sub, frame_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.handle_message(message)
    }

    fn view(&self) -> Element<'_, Message> {
        self.render()
    }

    /// Stage of the controller, or the bare intro without one.
    fn stage(&self) -> &Stage {
        self.controller
            .as_ref()
            .map_or(&self.fallback_stage, SlideshowController::stage)
    }

    /// Whether the next frame differs from this one.
    fn is_animating(&self) -> bool {
        let now = Instant::now();
        !self.ambience.particles().is_empty()
            || self.card.intro.as_ref().is_some_and(|intro| intro.heart.is_some())
            || self.ambience.content_opacity(now) < 1.0
            || self.stage().is_animating(now)
    }
}

fn init_error_message(i18n: &I18n, err: &InitError) -> String {
    match err {
        InitError::MissingAnchor(kind) => {
            i18n.tr_with_args(err.i18n_key(), &[("element", kind.card_table())])
        }
    }
}
