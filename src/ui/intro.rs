// SPDX-License-Identifier: MPL-2.0
//! Intro panel: heart, greeting and the enter control.

use crate::card::IntroPanel;
use crate::effects::{ActiveRipple, Animation, Pose, Ripple};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use crate::ui::theme::with_alpha;
use crate::ui::widgets::RippleLayer;
use iced::widget::{column, container, stack, text, Space};
use iced::{alignment, Background, Border, Element, Length, Theme};
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    /// Enter control pressed at the given ripple geometry.
    EnterPressed(Ripple),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub intro: Option<&'a IntroPanel>,
    /// Fade animation of the panel, if one is running.
    pub animation: Option<Animation>,
    pub ripple: Option<ActiveRipple>,
    pub pulse: Option<Animation>,
    /// Warning shown above the greeting, already translated.
    pub warning: Option<String>,
    /// Window-wide fade applied while the card is loading.
    pub content_opacity: f32,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let pose = ctx
        .animation
        .map_or(Pose::IDENTITY, |animation| animation.pose(ctx.now));
    let pulse = ctx
        .pulse
        .map_or(Pose::IDENTITY, |animation| animation.pose(ctx.now));
    let alpha = pose.opacity * ctx.content_opacity;

    let title = ctx
        .intro
        .map(|intro| intro.title.clone())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| ctx.i18n.tr("intro-default-title"));

    let mut content = column![]
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center);

    if let Some(warning) = ctx.warning {
        content = content.push(
            text(warning)
                .size(typography::CAPTION)
                .color(with_alpha(palette::GOLD_300, alpha)),
        );
    }

    if let Some(heart) = ctx.intro.and_then(|intro| intro.heart.clone()) {
        content = content.push(
            text(heart)
                .size(typography::HEART * pose.scale * pulse.scale)
                .color(with_alpha(palette::WHITE, alpha)),
        );
    }

    content = content.push(
        text(title)
            .size(typography::TITLE_XL * pose.scale)
            .color(with_alpha(palette::ROSE_100, alpha)),
    );

    if let Some(message) = ctx.intro.and_then(|intro| intro.message.clone()) {
        content = content.push(
            text(message)
                .size(typography::BODY_LG)
                .color(with_alpha(palette::TEXT_MUTED, alpha)),
        );
    }

    if let Some(enter) = ctx.intro.and_then(|intro| intro.enter.as_ref()) {
        content = content.push(enter_control(&enter.label, ctx.ripple, ctx.now, alpha));
    }

    // Fade-out lifts the panel; keep the layout height stable
    let lift = (-pose.offset_y).max(0.0);
    column![
        Space::new().height(Length::Fill),
        content,
        Space::new().height(Length::Fixed(lift)),
        Space::new().height(Length::Fill),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .into()
}

fn enter_control(
    label: &str,
    ripple: Option<ActiveRipple>,
    now: Instant,
    alpha: f32,
) -> Element<'static, Message> {
    let face = container(
        text(label.to_string())
            .size(typography::BODY_LG)
            .color(with_alpha(palette::WHITE, alpha)),
    )
    .center(Length::Fill)
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(with_alpha(palette::ROSE_500, alpha))),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::GLOW,
        ..Default::default()
    });

    container(stack![
        face,
        RippleLayer::new(ripple, now, Message::EnterPressed).into_element()
    ])
    .width(Length::Fixed(sizing::ENTER_BUTTON_WIDTH))
    .height(Length::Fixed(sizing::ENTER_BUTTON_HEIGHT))
    .into()
}
