// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for every panel.

## Organization

- **Palette**: Base colors and the section backdrop stops
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let card_bg = Color {
    a: opacity::CARD,
    ..palette::WHITE
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
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    /// Home backdrop (`#2c3e50`).
    pub const MIDNIGHT: Color = Color::from_rgb8(0x2c, 0x3e, 0x50);

    // Section gradient stops
    pub const CORAL: Color = Color::from_rgb8(0xff, 0x6b, 0x6b);
    pub const SUNFLOWER: Color = Color::from_rgb8(0xff, 0xd9, 0x3d);
    pub const SKY: Color = Color::from_rgb8(0x74, 0xb9, 0xff);
    pub const OCEAN: Color = Color::from_rgb8(0x09, 0x84, 0xe3);
    pub const MINT: Color = Color::from_rgb8(0x00, 0xb8, 0x94);
    pub const AZURE: Color = Color::from_rgb8(0x55, 0xa3, 0xff);
    pub const TURQUOISE: Color = Color::from_rgb8(0x1a, 0xbc, 0x9c);
    pub const SEA_GREEN: Color = Color::from_rgb8(0x16, 0xa0, 0x85);

    /// Rating stars and highlights.
    pub const GOLD: Color = Color::from_rgb8(0xf1, 0xc4, 0x0f);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Content cards over a gradient backdrop.
    pub const CARD: f32 = 0.15;

    /// Card hover state.
    pub const CARD_HOVER: f32 = 0.25;

    /// Bubble fill at the start of its rise.
    pub const BUBBLE: f32 = 0.6;

    /// Toast surfaces.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Navigation icon tiles on the home panel.
    pub const NAV_ICON: f32 = 96.0;
    pub const NAV_GLYPH: f32 = 40.0;

    /// Profile photo diameter.
    pub const PROFILE_PHOTO: f32 = 240.0;

    pub const POSTER_WIDTH: f32 = 180.0;
    pub const POSTER_HEIGHT: f32 = 270.0;
    pub const ALBUM_COVER: f32 = 120.0;
    pub const DRAWING_WIDTH: f32 = 520.0;
    pub const DRAWING_HEIGHT: f32 = 360.0;

    /// Maximum width of the scrolling content column.
    pub const CONTENT_MAX_WIDTH: f32 = 960.0;

    pub const TOAST_WIDTH: f32 = 320.0;
    pub const ICON_SM: f32 = 16.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.

    /// Owner name on the home panel.
    pub const DISPLAY: f32 = 44.0;

    /// Panel headers.
    pub const TITLE_LG: f32 = 32.0;

    /// Card titles.
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 20.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };

    pub const LG: Shadow = Shadow {
        color: Color {
            a: 0.4,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 8.0 },
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
    assert!(opacity::CARD < opacity::CARD_HOVER);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::NAV_GLYPH < sizing::NAV_ICON);
    assert!(sizing::POSTER_HEIGHT > sizing::POSTER_WIDTH);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn home_backdrop_matches_hex() {
        let c = palette::MIDNIGHT;
        assert!((c.r - 44.0 / 255.0).abs() < 1e-6);
        assert!((c.g - 62.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 80.0 / 255.0).abs() < 1e-6);
    }
}
