// SPDX-License-Identifier: MPL-2.0
//! The slideshow controller.
//!
//! Owns the current slide index, the transition cooldown, the auto-play
//! handle and the confirmed music state. Every operation takes the current
//! instant and returns the [`Effect`]s the application must carry out, so
//! the whole state machine runs without a clock or an audio device.

use super::autoplay::{AutoPlayHandle, AutoPlayInterval};
use super::effect::{Effect, Timer};
use super::input::{self, Command, Key, TouchTracker};
use super::stage::{Announcement, Stage};
use crate::card::{Anchors, Card};
use crate::effects::heart_burst::BURST_LIFETIME;
use crate::effects::ripple::RIPPLE_DURATION;
use crate::effects::{ActiveRipple, Animation, HeartBurstLauncher, Keyframes, Ripple};
use crate::error::InitError;
use crate::music::{MediaEvent, PlayOutcome};
use std::fmt;
use std::time::{Duration, Instant};

/// Lock-out after a slide change during which navigation is ignored.
pub const TRANSITION_COOLDOWN: Duration = Duration::from_millis(400);

/// Time the intro takes to fade out before the slideshow shows.
pub const REVEAL_DELAY: Duration = Duration::from_millis(800);

/// Delay between the enter click ripple and the actual entering.
pub const ENTER_AFTER_RIPPLE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Intro shown, waiting for the recipient.
    Intro,
    /// Intro fading out, slideshow about to show.
    Entering,
    /// Slideshow shown.
    Presenting,
}

/// Tunables taken from the user configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerOptions {
    pub autoplay_interval: AutoPlayInterval,
    /// Request playback as soon as the slideshow shows.
    pub play_music_on_enter: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            autoplay_interval: AutoPlayInterval::default(),
            play_music_on_enter: true,
        }
    }
}

pub struct SlideshowController {
    anchors: Anchors,
    announcements: Vec<Option<Announcement>>,
    options: ControllerOptions,
    launcher: Box<dyn HeartBurstLauncher>,

    phase: Phase,
    current_index: usize,
    is_transitioning: bool,
    autoplay: Option<AutoPlayHandle>,
    autoplay_generation: u64,

    music_playing: bool,
    music_failed: bool,
    play_pending: bool,

    touch: TouchTracker,
    stage: Stage,
}

impl fmt::Debug for SlideshowController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideshowController")
            .field("phase", &self.phase)
            .field("current_index", &self.current_index)
            .field("slide_count", &self.anchors.slide_count)
            .field("is_transitioning", &self.is_transitioning)
            .field("autoplay", &self.autoplay)
            .field("music_playing", &self.music_playing)
            .finish_non_exhaustive()
    }
}

impl SlideshowController {
    /// Binds the controller to `card`.
    ///
    /// Fails when one of the mandatory elements is missing; the caller then
    /// keeps showing the intro without a slideshow.
    pub fn initialize(
        card: &Card,
        launcher: Box<dyn HeartBurstLauncher>,
        options: ControllerOptions,
    ) -> Result<Self, InitError> {
        let anchors = Anchors::resolve(card)
            .inspect_err(|err| tracing::error!("slideshow disabled: {err}"))?;

        let mut stage = Stage::pre_slideshow(anchors.slide_count);
        stage.dots = vec![false; anchors.dot_count];
        for &index in &anchors.highlighted {
            stage.slides[index].highlight = true;
        }
        stage.music.visible = anchors.music_toggle;

        let announcements = card
            .slides
            .iter()
            .map(|slide| {
                slide.announcement().map(|(title, date)| Announcement {
                    title: title.to_string(),
                    date: date.to_string(),
                })
            })
            .collect();

        tracing::info!(
            slides = anchors.slide_count,
            dots = anchors.dot_count,
            music = anchors.music_file.is_some(),
            "slideshow ready"
        );

        Ok(Self {
            anchors,
            announcements,
            options,
            launcher,
            phase: Phase::Intro,
            current_index: 0,
            is_transitioning: false,
            autoplay: None,
            autoplay_generation: 0,
            music_playing: false,
            music_failed: false,
            play_pending: false,
            touch: TouchTracker::default(),
            stage,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.anchors.slide_count
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    /// Handle of the live auto-play timer, if auto-play runs.
    pub fn autoplay_handle(&self) -> Option<AutoPlayHandle> {
        self.autoplay
    }

    pub fn autoplay_interval(&self) -> AutoPlayInterval {
        self.options.autoplay_interval
    }

    pub fn music_playing(&self) -> bool {
        self.music_playing
    }

    // =========================================================================
    // Entering and leaving
    // =========================================================================

    /// Click on the enter control: ripple first, enter shortly after.
    pub fn press_enter(&mut self, ripple: Ripple, now: Instant) -> Vec<Effect> {
        if self.phase != Phase::Intro {
            return Vec::new();
        }
        self.stage.ripple = Some(ActiveRipple::start(ripple, now));
        vec![
            Effect::schedule(ENTER_AFTER_RIPPLE, Timer::EnterAfterRipple),
            Effect::schedule(RIPPLE_DURATION, Timer::RippleFinished),
        ]
    }

    /// Starts the intro fade-out and fires the heart burst.
    pub fn enter(&mut self, now: Instant) -> Vec<Effect> {
        if self.phase != Phase::Intro {
            return Vec::new();
        }
        self.phase = Phase::Entering;
        let mut effects = Vec::new();

        if let Some(burst) = self.launcher.launch(now) {
            effects.push(Effect::schedule(
                BURST_LIFETIME,
                Timer::HeartBurstExpired(burst.id),
            ));
            self.stage.heart_burst = Some(burst);
        }

        self.stage.intro.animation = Some(Animation::start(Keyframes::IntroFadeOut, now));
        effects.push(Effect::schedule(REVEAL_DELAY, Timer::RevealSlideshow));
        tracing::debug!("entering slideshow");
        effects
    }

    fn reveal(&mut self, now: Instant) -> Vec<Effect> {
        if self.phase != Phase::Entering {
            return Vec::new();
        }
        self.phase = Phase::Presenting;
        self.stage.intro.hide();
        self.stage
            .slideshow
            .show_with(Keyframes::SlideshowFadeIn, now);

        let mut effects = self.show_slide(0, now);
        self.start_autoplay();

        if self.options.play_music_on_enter && self.has_music() {
            if self.stage.music.ready {
                effects.push(Effect::PlayMusic);
            } else {
                self.play_pending = true;
            }
        }
        effects
    }

    /// Returns to the intro. The slide position is reset.
    pub fn exit(&mut self, now: Instant) -> Vec<Effect> {
        if self.phase != Phase::Presenting {
            return Vec::new();
        }
        self.pause_autoplay();
        self.phase = Phase::Intro;
        self.stage.slideshow.hide();
        self.stage.intro.show_with(Keyframes::IntroFadeIn, now);
        self.stage.ripple = None;
        self.current_index = 0;
        self.stage.deactivate_all();
        tracing::debug!("left slideshow");
        Vec::new()
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Shows the slide at `index`, wrapping out-of-range values to the
    /// other end. Ignored while a transition is in progress.
    pub fn show_slide(&mut self, index: isize, now: Instant) -> Vec<Effect> {
        let count = self.anchors.slide_count;
        if self.is_transitioning || count == 0 {
            return Vec::new();
        }

        let target = if index < 0 {
            count - 1
        } else if index as usize >= count {
            0
        } else {
            index as usize
        };

        self.is_transitioning = true;
        self.current_index = target;
        self.stage.activate(target, now);
        // A slide lacking a title or a date keeps the previous text up
        if let Some(announcement) = self.announcements.get(target).cloned().flatten() {
            tracing::debug!(
                "Now showing: {}, {}",
                announcement.title,
                announcement.date
            );
            self.stage.announcement = Some(announcement);
        }

        vec![Effect::schedule(TRANSITION_COOLDOWN, Timer::CooldownElapsed)]
    }

    pub fn next_slide(&mut self, now: Instant) -> Vec<Effect> {
        if self.is_transitioning {
            return Vec::new();
        }
        self.show_slide(self.current_index as isize + 1, now)
    }

    pub fn previous_slide(&mut self, now: Instant) -> Vec<Effect> {
        if self.is_transitioning {
            return Vec::new();
        }
        self.show_slide(self.current_index as isize - 1, now)
    }

    /// Jumps to `index` unless it is already shown.
    pub fn go_to_slide(&mut self, index: usize, now: Instant) -> Vec<Effect> {
        if self.is_transitioning || index == self.current_index || index >= self.slide_count() {
            return Vec::new();
        }
        self.show_slide(index as isize, now)
    }

    pub fn first_slide(&mut self, now: Instant) -> Vec<Effect> {
        self.go_to_slide(0, now)
    }

    pub fn last_slide(&mut self, now: Instant) -> Vec<Effect> {
        match self.slide_count().checked_sub(1) {
            Some(last) => self.go_to_slide(last, now),
            None => Vec::new(),
        }
    }

    // =========================================================================
    // Auto-play
    // =========================================================================

    /// Starts auto-play with a fresh handle, replacing any running timer.
    pub fn start_autoplay(&mut self) {
        self.autoplay_generation += 1;
        self.autoplay = Some(AutoPlayHandle(self.autoplay_generation));
        self.stage.autoplay_running = true;
    }

    pub fn pause_autoplay(&mut self) {
        self.autoplay = None;
        self.stage.autoplay_running = false;
    }

    /// Starts auto-play only when it is not already running.
    pub fn resume_autoplay(&mut self) {
        if self.autoplay.is_none() {
            self.start_autoplay();
        }
    }

    pub fn toggle_autoplay(&mut self) {
        if self.autoplay.is_some() {
            self.pause_autoplay();
        } else {
            self.start_autoplay();
        }
    }

    /// Advances one slide if `handle` is the live timer.
    pub fn on_autoplay_tick(&mut self, handle: AutoPlayHandle, now: Instant) -> Vec<Effect> {
        if self.autoplay != Some(handle) {
            tracing::trace!(?handle, "stale auto-play tick ignored");
            return Vec::new();
        }
        self.next_slide(now)
    }

    // =========================================================================
    // Timers
    // =========================================================================

    pub fn on_timer(&mut self, timer: Timer, now: Instant) -> Vec<Effect> {
        match timer {
            Timer::RevealSlideshow => self.reveal(now),
            Timer::CooldownElapsed => {
                self.is_transitioning = false;
                Vec::new()
            }
            Timer::EnterAfterRipple => self.enter(now),
            Timer::RippleFinished => {
                if self
                    .stage
                    .ripple
                    .is_some_and(|ripple| ripple.animation.is_finished(now))
                {
                    self.stage.ripple = None;
                }
                Vec::new()
            }
            Timer::HeartBurstExpired(id) => {
                if self
                    .stage
                    .heart_burst
                    .as_ref()
                    .is_some_and(|burst| burst.id == id)
                {
                    self.stage.heart_burst = None;
                }
                Vec::new()
            }
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    pub fn handle_command(&mut self, command: Command, now: Instant) -> Vec<Effect> {
        match command {
            Command::Enter => return self.enter(now),
            Command::Exit => return self.exit(now),
            _ => {}
        }
        if self.phase != Phase::Presenting {
            return Vec::new();
        }
        match command {
            Command::Previous => self.previous_slide(now),
            Command::Next => self.next_slide(now),
            Command::First => self.first_slide(now),
            Command::Last => self.last_slide(now),
            Command::GoTo(index) => self.go_to_slide(index, now),
            Command::ToggleAutoPlay => {
                self.toggle_autoplay();
                Vec::new()
            }
            Command::ToggleMusic => self.toggle_music(),
            Command::Enter | Command::Exit => Vec::new(),
        }
    }

    pub fn on_key(&mut self, key: Key, now: Instant) -> Vec<Effect> {
        match input::map_key(key, self.stage.intro.visible) {
            Some(command) => self.handle_command(command, now),
            None => Vec::new(),
        }
    }

    /// Wheel over the slideshow; `delta_y` is positive when scrolling down.
    pub fn on_wheel(&mut self, delta_y: f32, now: Instant) -> Vec<Effect> {
        if self.phase != Phase::Presenting || self.is_transitioning {
            return Vec::new();
        }
        match input::wheel_command(delta_y) {
            Some(command) => self.handle_command(command, now),
            None => Vec::new(),
        }
    }

    pub fn on_touch_start(&mut self, x: f32) {
        if self.phase == Phase::Presenting {
            self.touch.begin(x);
        }
    }

    pub fn on_touch_end(&mut self, x: f32, now: Instant) -> Vec<Effect> {
        if self.phase != Phase::Presenting {
            return Vec::new();
        }
        match self.touch.end(x, now) {
            Some(command) => self.handle_command(command, now),
            None => Vec::new(),
        }
    }

    /// Pointer over the slideshow holds auto-play.
    pub fn pointer_entered(&mut self) {
        if self.phase == Phase::Presenting {
            self.pause_autoplay();
        }
    }

    pub fn pointer_left(&mut self) {
        if self.phase == Phase::Presenting {
            self.resume_autoplay();
        }
    }

    // =========================================================================
    // Music
    // =========================================================================

    fn has_music(&self) -> bool {
        self.anchors.music_file.is_some() && !self.music_failed
    }

    pub fn toggle_music(&mut self) -> Vec<Effect> {
        if !self.has_music() {
            return Vec::new();
        }
        if self.music_playing {
            vec![Effect::PauseMusic]
        } else {
            vec![Effect::PlayMusic]
        }
    }

    pub fn on_play_outcome(&mut self, outcome: PlayOutcome) {
        match outcome {
            PlayOutcome::Started => {
                self.music_playing = true;
                self.stage.music.muted = false;
            }
            PlayOutcome::Denied(reason) => {
                tracing::warn!("music playback denied: {reason}");
                self.music_playing = false;
                self.stage.music.muted = true;
            }
        }
        self.stage.music.playing = self.music_playing;
    }

    pub fn on_media_event(&mut self, event: MediaEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        match event {
            MediaEvent::Played => {
                self.music_playing = true;
                self.stage.music.muted = false;
            }
            MediaEvent::Paused => self.music_playing = false,
            MediaEvent::Error(message) => {
                tracing::warn!("music unavailable: {message}");
                self.music_failed = true;
                self.music_playing = false;
                self.play_pending = false;
                self.stage.music.visible = false;
            }
            MediaEvent::CanPlayThrough => {
                self.stage.music.ready = true;
                if std::mem::take(&mut self.play_pending) && self.phase == Phase::Presenting {
                    effects.push(Effect::PlayMusic);
                }
            }
        }
        self.stage.music.playing = self.music_playing;
        effects
    }

    // =========================================================================
    // Images
    // =========================================================================

    /// A slide image finished decoding; it fades in from now on.
    pub fn on_image_loaded(&mut self, index: usize, now: Instant) {
        if let Some(slide) = self.stage.slides.get_mut(index) {
            slide.image_loaded = true;
            slide.image_reveal = Some(Animation::start(Keyframes::ImageReveal, now));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Music;
    use crate::effects::{BurstId, HeartBurst, RandomHeartBurst};
    use crate::error::AnchorKind;
    use crate::music::PlayDenied;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingLauncher(Arc<AtomicUsize>);

    impl HeartBurstLauncher for CountingLauncher {
        fn launch(&mut self, now: Instant) -> Option<HeartBurst> {
            let count = self.0.fetch_add(1, Ordering::SeqCst) as u64 + 1;
            let mut rng = StdRng::seed_from_u64(count);
            Some(HeartBurst::generate(&mut rng, BurstId(count), now))
        }
    }

    fn launcher() -> Box<dyn HeartBurstLauncher> {
        Box::new(RandomHeartBurst::with_rng(StdRng::seed_from_u64(1), true))
    }

    fn controller_for(card: &Card) -> SlideshowController {
        SlideshowController::initialize(card, launcher(), ControllerOptions::default())
            .expect("card has all anchors")
    }

    /// Controller past the reveal, with the first cooldown elapsed.
    fn presenting(card: &Card, now: Instant) -> SlideshowController {
        let mut controller = controller_for(card);
        controller.enter(now);
        controller.on_timer(Timer::RevealSlideshow, now + REVEAL_DELAY);
        controller.on_timer(Timer::CooldownElapsed, now + Duration::from_secs(2));
        controller
    }

    fn card_with_music() -> Card {
        let mut card = Card::sample();
        card.music = Some(Music {
            file: "song.ogg".into(),
            toggle: true,
        });
        card
    }

    fn settle(controller: &mut SlideshowController, now: Instant) {
        controller.on_timer(Timer::CooldownElapsed, now);
    }

    #[test]
    fn wraps_at_both_ends() {
        let now = Instant::now();
        let mut controller = presenting(&Card::sample(), now);
        assert_eq!(controller.current_index(), 0);

        controller.previous_slide(now);
        assert_eq!(controller.current_index(), 4);
        settle(&mut controller, now);

        controller.next_slide(now);
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn exactly_one_active_after_go_to() {
        let now = Instant::now();
        let mut controller = presenting(&Card::sample(), now);

        controller.go_to_slide(2, now);

        let stage = controller.stage();
        assert_eq!(stage.slides.iter().filter(|s| s.active).count(), 1);
        assert_eq!(stage.active_slide(), Some(2));
        assert_eq!(stage.dots, vec![false, false, true, false, false]);
    }

    #[test]
    fn navigation_locked_during_cooldown() {
        let now = Instant::now();
        let mut controller = presenting(&Card::sample(), now);

        let effects = controller.next_slide(now);
        assert_eq!(
            effects,
            vec![Effect::schedule(TRANSITION_COOLDOWN, Timer::CooldownElapsed)]
        );
        assert!(controller.next_slide(now).is_empty());
        assert!(controller.go_to_slide(4, now).is_empty());
        assert_eq!(controller.current_index(), 1);

        settle(&mut controller, now);
        controller.next_slide(now);
        assert_eq!(controller.current_index(), 2);
    }

    #[test]
    fn go_to_current_slide_is_noop() {
        let now = Instant::now();
        let mut controller = presenting(&Card::sample(), now);
        assert!(controller.go_to_slide(0, now).is_empty());
        assert!(!controller.is_transitioning());
    }

    #[test]
    fn home_and_end_jump() {
        let now = Instant::now();
        let mut controller = presenting(&Card::sample(), now);

        controller.on_key(Key::End, now);
        assert_eq!(controller.current_index(), 4);
        settle(&mut controller, now);
        controller.on_key(Key::Home, now);
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn double_start_leaves_one_live_timer() {
        let now = Instant::now();
        let mut controller = presenting(&Card::sample(), now);

        controller.start_autoplay();
        let stale = controller.autoplay_handle().expect("running");
        controller.start_autoplay();
        let live = controller.autoplay_handle().expect("running");
        assert_ne!(stale, live);

        assert!(controller.on_autoplay_tick(stale, now).is_empty());
        assert_eq!(controller.current_index(), 0);

        controller.on_autoplay_tick(live, now);
        assert_eq!(controller.current_index(), 1);
    }

    #[test]
    fn resume_keeps_running_timer() {
        let now = Instant::now();
        let mut controller = presenting(&Card::sample(), now);
        let handle = controller.autoplay_handle();
        controller.resume_autoplay();
        assert_eq!(controller.autoplay_handle(), handle);
    }

    #[test]
    fn hover_pauses_and_leave_resumes() {
        let now = Instant::now();
        let mut controller = presenting(&Card::sample(), now);
        let before = controller.autoplay_handle().expect("running after reveal");

        controller.pointer_entered();
        assert_eq!(controller.autoplay_handle(), None);
        assert!(controller.on_autoplay_tick(before, now).is_empty());

        controller.pointer_left();
        assert!(controller.autoplay_handle().is_some());
        assert_ne!(controller.autoplay_handle(), Some(before));
    }

    #[test]
    fn space_toggles_autoplay() {
        let now = Instant::now();
        let mut controller = presenting(&Card::sample(), now);

        controller.on_key(Key::Space, now);
        assert!(!controller.stage().autoplay_running);
        controller.on_key(Key::Space, now);
        assert!(controller.stage().autoplay_running);
    }

    #[test]
    fn swipe_threshold_navigates_once() {
        let now = Instant::now();
        let mut controller = presenting(&Card::sample(), now);

        controller.on_touch_start(300.0);
        controller.on_touch_end(240.0, now);
        assert_eq!(controller.current_index(), 1);
        settle(&mut controller, now);

        controller.on_touch_start(300.0);
        controller.on_touch_end(270.0, now + Duration::from_secs(1));
        assert_eq!(controller.current_index(), 1);
    }

    #[test]
    fn swipe_right_after_a_tap_navigates() {
        let now = Instant::now();
        let mut controller = presenting(&Card::sample(), now);
        let t = now + Duration::from_secs(1);

        controller.on_touch_start(300.0);
        controller.on_touch_end(300.0, t);
        assert_eq!(controller.current_index(), 0);

        controller.on_touch_start(300.0);
        controller.on_touch_end(200.0, t + Duration::from_millis(200));
        assert_eq!(controller.current_index(), 1);
    }

    #[test]
    fn right_swipe_goes_back() {
        let now = Instant::now();
        let mut controller = presenting(&Card::sample(), now);

        controller.on_touch_start(100.0);
        controller.on_touch_end(200.0, now);
        assert_eq!(controller.current_index(), 4);
    }

    #[test]
    fn wheel_ignored_while_transitioning() {
        let now = Instant::now();
        let mut controller = presenting(&Card::sample(), now);

        controller.on_wheel(1.0, now);
        assert_eq!(controller.current_index(), 1);
        assert!(controller.on_wheel(1.0, now).is_empty());
        settle(&mut controller, now);

        controller.on_wheel(-1.0, now);
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn denied_playback_mutes() {
        let now = Instant::now();
        let mut controller = presenting(&card_with_music(), now);

        controller.on_play_outcome(PlayOutcome::Denied(PlayDenied::NoOutputDevice));

        assert!(!controller.music_playing());
        assert!(controller.stage().music.muted);
        assert!(!controller.stage().music.playing);
    }

    #[test]
    fn started_playback_unmutes() {
        let now = Instant::now();
        let mut controller = presenting(&card_with_music(), now);
        controller.on_play_outcome(PlayOutcome::Denied(PlayDenied::NotReady));

        controller.on_play_outcome(PlayOutcome::Started);

        assert!(controller.music_playing());
        assert!(!controller.stage().music.muted);
        assert_eq!(controller.toggle_music(), vec![Effect::PauseMusic]);
    }

    #[test]
    fn missing_enter_control_fails() {
        let mut card = Card::sample();
        if let Some(intro) = card.intro.as_mut() {
            intro.enter = None;
        }

        let result =
            SlideshowController::initialize(&card, launcher(), ControllerOptions::default());

        assert_eq!(
            result.err(),
            Some(InitError::MissingAnchor(AnchorKind::EnterControl))
        );
        let fallback = Stage::pre_slideshow(card.slides.len());
        assert!(fallback.intro.visible);
        assert!(!fallback.slideshow.visible);
    }

    #[test]
    fn enter_fires_burst_and_schedules_reveal() {
        let now = Instant::now();
        let fired = Arc::new(AtomicUsize::new(0));
        let mut controller = SlideshowController::initialize(
            &Card::sample(),
            Box::new(CountingLauncher(Arc::clone(&fired))),
            ControllerOptions::default(),
        )
        .expect("sample card");

        let effects = controller.enter(now);

        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(effects.contains(&Effect::schedule(REVEAL_DELAY, Timer::RevealSlideshow)));
        assert!(effects.contains(&Effect::schedule(
            BURST_LIFETIME,
            Timer::HeartBurstExpired(BurstId(1))
        )));
        assert_eq!(controller.phase(), Phase::Entering);
        assert!(controller.stage().intro.visible);
        assert!(!controller.stage().slideshow.visible);

        assert!(controller.enter(now).is_empty());
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn reveal_shows_first_slide_and_starts_autoplay() {
        let now = Instant::now();
        let mut controller = controller_for(&Card::sample());
        controller.enter(now);

        let effects = controller.on_timer(Timer::RevealSlideshow, now + REVEAL_DELAY);

        let stage = controller.stage();
        assert!(!stage.intro.visible);
        assert!(stage.slideshow.visible);
        assert_eq!(stage.active_slide(), Some(0));
        assert!(controller.autoplay_handle().is_some());
        assert!(controller.is_transitioning());
        assert_eq!(
            effects,
            vec![Effect::schedule(TRANSITION_COOLDOWN, Timer::CooldownElapsed)]
        );
    }

    #[test]
    fn enter_click_ripples_first() {
        let now = Instant::now();
        let mut controller = controller_for(&Card::sample());
        let ripple = Ripple::from_click(iced::Size::new(200.0, 50.0), iced::Point::new(10.0, 10.0));

        let effects = controller.press_enter(ripple, now);

        assert_eq!(
            effects,
            vec![
                Effect::schedule(ENTER_AFTER_RIPPLE, Timer::EnterAfterRipple),
                Effect::schedule(RIPPLE_DURATION, Timer::RippleFinished),
            ]
        );
        assert_eq!(controller.phase(), Phase::Intro);

        controller.on_timer(Timer::EnterAfterRipple, now + ENTER_AFTER_RIPPLE);
        assert_eq!(controller.phase(), Phase::Entering);

        controller.on_timer(Timer::RippleFinished, now + RIPPLE_DURATION);
        assert!(controller.stage().ripple.is_none());
    }

    #[test]
    fn stale_burst_expiry_is_noop() {
        let now = Instant::now();
        let mut controller = controller_for(&Card::sample());
        controller.enter(now);
        let id = controller
            .stage()
            .heart_burst
            .as_ref()
            .map(|burst| burst.id)
            .expect("burst fired");

        controller.on_timer(Timer::HeartBurstExpired(BurstId(id.0 + 7)), now);
        assert!(controller.stage().heart_burst.is_some());

        controller.on_timer(Timer::HeartBurstExpired(id), now + BURST_LIFETIME);
        assert!(controller.stage().heart_burst.is_none());
    }

    #[test]
    fn escape_exits_and_resets() {
        let now = Instant::now();
        let mut controller = presenting(&Card::sample(), now);
        controller.go_to_slide(3, now);
        settle(&mut controller, now);

        controller.on_key(Key::Escape, now);

        let stage = controller.stage();
        assert_eq!(controller.phase(), Phase::Intro);
        assert!(stage.intro.visible);
        assert!(!stage.slideshow.visible);
        assert_eq!(stage.active_slide(), None);
        assert_eq!(controller.current_index(), 0);
        assert_eq!(controller.autoplay_handle(), None);
        assert_eq!(stage.announcement, None);

        // Navigation keys are intro keys again
        controller.on_key(Key::ArrowRight, now);
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn navigation_needs_slideshow() {
        let now = Instant::now();
        let mut controller = controller_for(&Card::sample());
        assert!(controller.handle_command(Command::Next, now).is_empty());
        assert!(controller.on_wheel(1.0, now).is_empty());
        assert_eq!(controller.stage().active_slide(), None);
    }

    #[test]
    fn empty_deck_does_not_move() {
        let now = Instant::now();
        let mut card = Card::sample();
        card.slides.clear();
        let mut controller = presenting(&card, now);

        assert!(controller.next_slide(now).is_empty());
        assert!(controller.last_slide(now).is_empty());
        assert_eq!(controller.current_index(), 0);
    }

    #[test]
    fn announcement_follows_active_slide() {
        let now = Instant::now();
        let card = Card::sample();
        let mut controller = presenting(&card, now);
        controller.go_to_slide(1, now);

        let expected = card.slides[1].announcement().map(|(title, date)| Announcement {
            title: title.to_string(),
            date: date.to_string(),
        });
        assert_eq!(controller.stage().announcement, expected);
    }

    #[test]
    fn untitled_slide_keeps_previous_announcement() {
        let now = Instant::now();
        let mut card = Card::sample();
        card.slides[2].title = None;
        let mut controller = presenting(&card, now);
        controller.go_to_slide(1, now);
        settle(&mut controller, now);
        let shown = controller.stage().announcement.clone();
        assert!(shown.is_some());

        controller.go_to_slide(2, now);

        assert_eq!(controller.stage().active_slide(), Some(2));
        assert_eq!(controller.stage().announcement, shown);
    }

    #[test]
    fn music_waits_until_track_is_ready() {
        let now = Instant::now();
        let mut controller = controller_for(&card_with_music());
        controller.enter(now);
        let effects = controller.on_timer(Timer::RevealSlideshow, now + REVEAL_DELAY);
        assert!(!effects.contains(&Effect::PlayMusic));

        let effects = controller.on_media_event(MediaEvent::CanPlayThrough);
        assert_eq!(effects, vec![Effect::PlayMusic]);
        assert!(controller.stage().music.ready);

        // Played only when the output confirms it
        assert!(!controller.music_playing());
        controller.on_media_event(MediaEvent::Played);
        assert!(controller.music_playing());
    }

    #[test]
    fn ready_track_plays_on_reveal() {
        let now = Instant::now();
        let mut controller = controller_for(&card_with_music());
        assert!(controller.on_media_event(MediaEvent::CanPlayThrough).is_empty());
        controller.enter(now);

        let effects = controller.on_timer(Timer::RevealSlideshow, now + REVEAL_DELAY);

        assert!(effects.contains(&Effect::PlayMusic));
    }

    #[test]
    fn music_error_hides_toggle() {
        let now = Instant::now();
        let mut controller = presenting(&card_with_music(), now);
        assert!(controller.stage().music.visible);

        controller.on_media_event(MediaEvent::Error("bad codec".into()));

        assert!(!controller.stage().music.visible);
        assert!(controller.toggle_music().is_empty());
    }

    #[test]
    fn no_music_without_track() {
        let now = Instant::now();
        let mut controller = presenting(&Card::sample(), now);
        assert!(!controller.stage().music.visible);
        assert!(controller.handle_command(Command::ToggleMusic, now).is_empty());
    }

    #[test]
    fn loaded_image_reveals() {
        let now = Instant::now();
        let mut controller = controller_for(&Card::sample());
        controller.on_image_loaded(2, now);
        controller.on_image_loaded(99, now);

        let slide = controller.stage().slides[2];
        assert!(slide.image_loaded);
        assert!(slide.image_reveal.is_some());
    }

    #[test]
    fn highlighted_slides_are_flagged() {
        let controller = controller_for(&Card::sample());
        let flagged: Vec<usize> = controller
            .stage()
            .slides
            .iter()
            .enumerate()
            .filter(|(_, slide)| slide.highlight)
            .map(|(index, _)| index)
            .collect();
        assert_eq!(flagged, vec![0, 4]);
    }
}
