// SPDX-License-Identifier: MPL-2.0
use keepsake::card::{self, Card};
use keepsake::config;
use keepsake::effects::{Ripple, RandomHeartBurst};
use keepsake::error::{AnchorKind, InitError};
use keepsake::i18n::fluent::I18n;
use keepsake::music::{MediaEvent, PlayDenied, PlayOutcome};
use keepsake::slideshow::{ControllerOptions, Effect, Key, Phase, SlideshowController, Timer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::time::{Duration, Instant};
use tempfile::tempdir;

const CARD: &str = r#"
[intro]
title = "Happy Birthday"
heart = "❤"

[intro.enter]
label = "Open"

[slideshow.controls]
previous = "‹"
next = "›"

[[slides]]
title = "Lake"
date = "June 2019"
image = "photos/lake.jpg"

[[slides]]
title = "Snow"
date = "January 2020"
highlight = true

[[slides]]
caption = "No title here"

[dots]

[music]
file = "song.ogg"
"#;

fn controller(card: &Card) -> SlideshowController {
    SlideshowController::initialize(
        card,
        Box::new(RandomHeartBurst::with_rng(StdRng::seed_from_u64(9), true)),
        ControllerOptions::default(),
    )
    .expect("card has all anchors")
}

fn has_timer(effects: &[Effect], timer: Timer) -> bool {
    effects
        .iter()
        .any(|effect| matches!(effect, Effect::Schedule { timer: t, .. } if *t == timer))
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    fs::write(&path, "[general]\nlanguage = \"en-US\"\n").expect("failed to write config");
    let loaded = config::load_from_path(&path).expect("failed to read config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    fs::write(&path, "[general]\nlanguage = \"fr\"\n").expect("failed to write config");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "fr");

    // The command line wins over the file
    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn card_file_resolves_paths_and_binds_controller() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("card.toml");
    fs::write(&path, CARD).expect("failed to write card");

    let (card, warning) = card::load_or_sample(Some(&path));
    assert!(warning.is_none());
    assert_eq!(card.slides.len(), 3);

    let images: Vec<_> = card.image_paths().collect();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].0, 0);
    assert_eq!(images[0].1, dir.path().join("photos/lake.jpg"));
    assert_eq!(
        card.music.as_ref().map(|music| music.file.clone()),
        Some(dir.path().join("song.ogg"))
    );

    let controller = controller(&card);
    let stage = controller.stage();
    assert_eq!(controller.slide_count(), 3);
    assert_eq!(stage.dots.len(), 3);
    assert!(stage.slides[1].highlight);
    assert!(stage.music.visible);
}

#[test]
fn unreadable_card_falls_back_to_sample() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[intro\n").expect("failed to write card");

    let (card, warning) = card::load_or_sample(Some(&path));
    assert_eq!(card, Card::sample());
    assert_eq!(warning.as_deref(), Some("notification-card-load-error"));
}

#[test]
fn missing_previous_control_disables_slideshow() {
    let card = Card::from_toml(&CARD.replace("previous = \"‹\"\n", "")).expect("card parses");

    let result = SlideshowController::initialize(
        &card,
        Box::new(RandomHeartBurst::new(true)),
        ControllerOptions::default(),
    );
    assert_eq!(
        result.err(),
        Some(InitError::MissingAnchor(AnchorKind::PreviousControl))
    );
}

#[test]
fn full_visit_from_intro_to_exit() {
    let card = Card::from_toml(CARD).expect("card parses");
    let mut controller = controller(&card);
    let t0 = Instant::now();

    // Click on the enter control
    let ripple = Ripple::from_click(iced::Size::new(200.0, 60.0), iced::Point::new(50.0, 30.0));
    let effects = controller.press_enter(ripple, t0);
    assert!(has_timer(&effects, Timer::EnterAfterRipple));
    assert!(controller.stage().ripple.is_some());

    // Ripple done, intro fades out and the hearts burst
    let t1 = t0 + Duration::from_millis(300);
    let effects = controller.on_timer(Timer::EnterAfterRipple, t1);
    assert_eq!(controller.phase(), Phase::Entering);
    assert!(has_timer(&effects, Timer::RevealSlideshow));
    let burst_id = controller
        .stage()
        .heart_burst
        .as_ref()
        .map(|burst| burst.id)
        .expect("burst fired on entry");
    assert!(has_timer(&effects, Timer::HeartBurstExpired(burst_id)));

    // Music finished decoding while the intro faded
    assert!(controller.on_media_event(MediaEvent::CanPlayThrough).is_empty());

    // Slideshow shows on the first slide, music requested
    let t2 = t1 + Duration::from_millis(800);
    let effects = controller.on_timer(Timer::RevealSlideshow, t2);
    assert_eq!(controller.phase(), Phase::Presenting);
    assert!(effects.contains(&Effect::PlayMusic));
    assert!(controller.stage().slideshow.visible);
    assert!(!controller.stage().intro.visible);
    assert_eq!(controller.stage().active_slide(), Some(0));
    assert!(controller.stage().autoplay_running);
    let announcement = controller
        .stage()
        .announcement
        .clone()
        .expect("first slide has title and date");
    assert_eq!(announcement.title, "Lake");

    // No device: the toggle turns muted
    controller.on_play_outcome(PlayOutcome::Denied(PlayDenied::NoOutputDevice));
    assert!(!controller.music_playing());
    assert!(controller.stage().music.muted);

    // Keyboard navigation, one step per cooldown
    let t3 = t2 + Duration::from_secs(1);
    controller.on_timer(Timer::CooldownElapsed, t3);
    controller.on_key(Key::ArrowRight, t3);
    controller.on_key(Key::ArrowRight, t3);
    assert_eq!(controller.current_index(), 1);

    controller.on_timer(Timer::CooldownElapsed, t3);
    controller.on_key(Key::End, t3);
    assert_eq!(controller.current_index(), 2);
    // Untitled slide: the last announcement stays
    assert_eq!(
        controller.stage().announcement.as_ref().map(|a| a.title.as_str()),
        Some("Snow")
    );

    // Escape goes back to the intro at the first slide
    controller.on_key(Key::Escape, t3);
    assert_eq!(controller.phase(), Phase::Intro);
    assert_eq!(controller.current_index(), 0);
    assert!(controller.stage().intro.visible);
    assert!(!controller.stage().autoplay_running);

    // Hearts clean up on their own timer
    controller.on_timer(Timer::HeartBurstExpired(burst_id), t3 + Duration::from_secs(5));
    assert!(controller.stage().heart_burst.is_none());
}

#[test]
fn autoplay_advances_only_with_live_handle() {
    let card = Card::from_toml(CARD).expect("card parses");
    let mut controller = controller(&card);
    let now = Instant::now();
    controller.enter(now);
    controller.on_timer(Timer::RevealSlideshow, now);
    controller.on_timer(Timer::CooldownElapsed, now);

    let stale = controller.autoplay_handle().expect("auto-play runs");
    controller.start_autoplay();
    let live = controller.autoplay_handle().expect("auto-play runs");
    assert_ne!(stale, live);

    controller.on_autoplay_tick(stale, now);
    assert_eq!(controller.current_index(), 0);
    controller.on_autoplay_tick(live, now);
    assert_eq!(controller.current_index(), 1);
}
