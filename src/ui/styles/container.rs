// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window night background.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NIGHT_900)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Card behind a slide caption.
pub fn caption(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::NIGHT_700
        })),
        border: Border {
            radius: radius::LG.into(),
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::ROSE_300
            },
            width: 1.0,
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Status line at the bottom of the slideshow.
pub fn status(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::TEXT_MUTED),
        ..Default::default()
    }
}
