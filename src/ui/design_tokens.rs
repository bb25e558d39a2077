// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

All visual constants of the card: colors, opacity levels, spacing,
sizes, type scale, radii and shadows.

## Organization

- **Palette**: Base colors (rose and gold on a deep plum night)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use keepsake::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let veil = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::NIGHT_900
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Background night
    pub const NIGHT_900: Color = Color::from_rgb(0.09, 0.05, 0.12);
    pub const NIGHT_700: Color = Color::from_rgb(0.18, 0.10, 0.22);
    pub const NIGHT_500: Color = Color::from_rgb(0.30, 0.18, 0.35);

    // Rose scale
    pub const ROSE_100: Color = Color::from_rgb(1.0, 0.90, 0.93);
    pub const ROSE_300: Color = Color::from_rgb(0.98, 0.66, 0.76);
    pub const ROSE_500: Color = Color::from_rgb(0.91, 0.37, 0.55);
    pub const ROSE_700: Color = Color::from_rgb(0.70, 0.20, 0.38);

    // Accent
    pub const GOLD_300: Color = Color::from_rgb(1.0, 0.86, 0.55);
    pub const GOLD_500: Color = Color::from_rgb(0.93, 0.72, 0.33);

    pub const TEXT_MUTED: Color = Color::from_rgb(0.78, 0.70, 0.80);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Caption card behind slide text
    pub const SURFACE: f32 = 0.85;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ENTER_BUTTON_WIDTH: f32 = 240.0;
    pub const ENTER_BUTTON_HEIGHT: f32 = 56.0;

    /// Previous/next arrows; comfortable touch target
    pub const NAV_BUTTON: f32 = 48.0;

    pub const DOT: f32 = 12.0;
    pub const DOT_ACTIVE: f32 = 28.0;

    pub const MUSIC_TOGGLE: f32 = 44.0;

    pub const SLIDE_IMAGE_MAX_HEIGHT: f32 = 420.0;
    pub const CAPTION_MAX_WIDTH: f32 = 640.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Heart glyph above the intro title
    pub const HEART: f32 = 64.0;

    pub const TITLE_XL: f32 = 44.0;
    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 22.0;
    pub const BODY_LG: f32 = 18.0;
    pub const BODY: f32 = 15.0;
    pub const CAPTION: f32 = 13.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Rose halo around the enter control
    pub const GLOW: Shadow = Shadow {
        color: Color {
            r: 0.91,
            g: 0.37,
            b: 0.55,
            a: 0.6,
        },
        offset: Vector::ZERO,
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::DOT_ACTIVE > sizing::DOT);

    assert!(typography::TITLE_XL > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
