// SPDX-License-Identifier: MPL-2.0
//! Slideshow panel: active slide, navigation, dots and status line.

use crate::card::{Card, Slide};
use crate::effects::{Animation, Pose};
use crate::i18n::fluent::I18n;
use crate::slideshow::Stage;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme::with_alpha;
use iced::widget::{button, column, container, image, mouse_area, row, text, Column, Row, Space};
use iced::{alignment, ContentFit, Element, Length};
use std::collections::HashMap;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    Dot(usize),
    ToggleMusic,
    PointerEntered,
    PointerLeft,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub card: &'a Card,
    pub stage: &'a Stage,
    pub images: &'a HashMap<usize, image::Handle>,
    pub pulse: Option<Animation>,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let panel = ctx
        .stage
        .slideshow
        .animation
        .map_or(Pose::IDENTITY, |animation| animation.pose(ctx.now));
    let alpha = panel.opacity;

    let controls = ctx.card.slideshow.as_ref().and_then(|s| s.controls.as_ref());
    let previous_label = controls
        .and_then(|c| c.previous.clone())
        .unwrap_or_default();
    let next_label = controls.and_then(|c| c.next.clone()).unwrap_or_default();

    let mut layout = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .width(Length::Fill)
        .height(Length::Fill);

    if let Some(title) = ctx.card.slideshow.as_ref().and_then(|s| s.title.clone()) {
        layout = layout.push(
            text(title)
                .size(typography::TITLE_LG)
                .color(with_alpha(palette::ROSE_300, alpha)),
        );
    }

    let slide = match ctx.stage.active_slide() {
        Some(index) => slide_view(&ctx, index, alpha),
        None => Space::new().width(Length::Fill).into(),
    };

    layout = layout.push(
        row![
            nav_button(previous_label, Message::Previous),
            container(slide).center_x(Length::Fill),
            nav_button(next_label, Message::Next),
        ]
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .height(Length::Fill),
    );

    if !ctx.stage.dots.is_empty() {
        layout = layout.push(dots(&ctx.stage.dots));
    }

    layout = layout.push(status_line(&ctx));

    mouse_area(layout)
        .on_enter(Message::PointerEntered)
        .on_exit(Message::PointerLeft)
        .into()
}

fn slide_view<'a>(ctx: &ViewContext<'a>, index: usize, alpha: f32) -> Element<'a, Message> {
    let Some(slide) = ctx.card.slides.get(index) else {
        return Space::new().into();
    };
    let Some(view) = ctx.stage.slides.get(index) else {
        return Space::new().into();
    };

    let mut content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center);

    if view.image_loaded {
        if let Some(handle) = ctx.images.get(&index) {
            let reveal = view
                .image_reveal
                .map_or(Pose::IDENTITY, |animation| animation.pose(ctx.now));
            content = content.push(
                image(handle.clone())
                    .content_fit(ContentFit::Contain)
                    .height(Length::Fixed(sizing::SLIDE_IMAGE_MAX_HEIGHT * reveal.scale))
                    .opacity(reveal.opacity * alpha),
            );
        }
    }

    let caption_pose = view
        .caption
        .map_or(Pose::IDENTITY, |animation| animation.pose(ctx.now));
    let pulse = if view.highlight {
        ctx.pulse
            .map_or(Pose::IDENTITY, |animation| animation.pose(ctx.now))
    } else {
        Pose::IDENTITY
    };
    let caption_alpha = caption_pose.opacity * alpha;

    content = content.push(Space::new().height(Length::Fixed(caption_pose.offset_y.max(0.0))));
    content = content.push(caption(slide, caption_alpha, pulse.scale));
    content.into()
}

fn caption(slide: &Slide, alpha: f32, scale: f32) -> Element<'_, Message> {
    let mut lines = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center);

    if let Some(title) = &slide.title {
        lines = lines.push(
            text(title.as_str())
                .size(typography::TITLE_MD * scale)
                .color(with_alpha(palette::ROSE_100, alpha)),
        );
    }
    if let Some(date) = &slide.date {
        lines = lines.push(
            text(date.as_str())
                .size(typography::CAPTION)
                .color(with_alpha(palette::GOLD_300, alpha)),
        );
    }
    if let Some(caption) = &slide.caption {
        lines = lines.push(
            text(caption.as_str())
                .size(typography::BODY * scale)
                .color(with_alpha(palette::WHITE, alpha)),
        );
    }

    container(lines)
        .padding(spacing::LG)
        .max_width(sizing::CAPTION_MAX_WIDTH)
        .style(styles::container::caption)
        .into()
}

fn nav_button<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(
        text(label)
            .size(typography::TITLE_MD)
            .width(Length::Fill)
            .center(),
    )
    .width(Length::Fixed(sizing::NAV_BUTTON))
    .height(Length::Fixed(sizing::NAV_BUTTON))
    .style(styles::button::nav)
    .on_press(message)
    .into()
}

fn dots<'a>(dots: &[bool]) -> Element<'a, Message> {
    dots.iter()
        .enumerate()
        .fold(Row::new().spacing(spacing::XS), |row, (index, &active)| {
            let width = if active {
                sizing::DOT_ACTIVE
            } else {
                sizing::DOT
            };
            row.push(
                button(Space::new())
                    .width(Length::Fixed(width))
                    .height(Length::Fixed(sizing::DOT))
                    .style(styles::button::dot(active))
                    .on_press(Message::Dot(index)),
            )
        })
        .into()
}

fn status_line<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let stage = ctx.stage;

    let mut parts = Vec::new();
    if let Some(index) = stage.active_slide() {
        let current = (index + 1).to_string();
        let total = stage.slides.len().to_string();
        parts.push(i18n.tr_with_args(
            "slideshow-counter",
            &[("current", current.as_str()), ("total", total.as_str())],
        ));
    }
    parts.push(i18n.tr(if stage.autoplay_running {
        "autoplay-running"
    } else {
        "autoplay-paused"
    }));
    if let Some(announcement) = &stage.announcement {
        parts.push(i18n.tr_with_args(
            "announce-now-showing",
            &[
                ("title", announcement.title.as_str()),
                ("date", announcement.date.as_str()),
            ],
        ));
    }

    let mut line = row![container(text(parts.join("  ·  ")).size(typography::CAPTION))
        .style(styles::container::status)
        .width(Length::Fill)]
    .align_y(alignment::Vertical::Center)
    .spacing(spacing::MD);

    if stage.music.visible {
        let key = if stage.music.muted {
            "music-muted"
        } else if stage.music.playing {
            "music-pause"
        } else {
            "music-play"
        };
        line = line.push(
            button(
                column![text(format!("♪ {}", i18n.tr(key))).size(typography::CAPTION)]
                    .align_x(alignment::Horizontal::Center),
            )
            .height(Length::Fixed(sizing::MUSIC_TOGGLE))
            .padding([spacing::XS, spacing::MD])
            .style(styles::button::music(stage.music.muted))
            .on_press(Message::ToggleMusic),
        );
    }

    line.into()
}
