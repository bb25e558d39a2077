// SPDX-License-Identifier: MPL-2.0
//! Theme and color helpers shared by the card's views.

use iced::{Color, Theme};

/// The card always renders on its own night background.
pub fn app_theme() -> Theme {
    Theme::Dark
}

/// `color` with its alpha scaled by `alpha`, used to fade whole panels.
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alpha_scales_and_clamps() {
        let half = with_alpha(Color::WHITE, 0.5);
        assert_eq!(half.a, 0.5);
        assert_eq!(half.r, 1.0);
        assert_eq!(with_alpha(half, 2.0).a, 0.5);
        assert_eq!(with_alpha(Color::WHITE, -1.0).a, 0.0);
    }
}
