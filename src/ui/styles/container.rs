// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Frosted card over the section backdrop (movie cards, album rows, the
/// resume document).
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::CARD,
            ..palette::WHITE
        })),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Home navigation tile; brighter while the pointer is over it.
pub fn nav_tile(hovered: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: if hovered {
                opacity::CARD_HOVER
            } else {
                opacity::CARD
            },
            ..palette::WHITE
        })),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: if hovered { shadow::LG } else { shadow::MD },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Frame shown in place of an image that is loading or failed to load.
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BLACK
        })),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Circular frame around the profile photo.
pub fn profile_frame(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: palette::WHITE,
            width: 4.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}
