// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn translucent(alpha: f32) -> Background {
    Background::Color(Color { a: alpha, ..WHITE })
}

/// "Back to Home" button: a translucent pill over the backdrop.
pub fn back(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::CARD_HOVER,
        button::Status::Pressed => opacity::OVERLAY_SUBTLE,
        _ => opacity::CARD,
    };
    button::Style {
        background: Some(translucent(alpha)),
        text_color: WHITE,
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Primary call to action (resume download).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Color {
            a: opacity::OPAQUE,
            ..palette::AZURE
        },
        button::Status::Disabled => palette::GRAY_400,
        _ => palette::OCEAN,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: match status {
            button::Status::Hovered => shadow::LG,
            _ => shadow::MD,
        },
        snap: true,
    }
}

/// Dismiss button inside a toast.
pub fn dismiss(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| button::Style {
        background: match status {
            button::Status::Hovered => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..text_color
            })),
            _ => None,
        },
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_button_brightens_on_hover() {
        let theme = Theme::Dark;
        let active = back(&theme, button::Status::Active);
        let hovered = back(&theme, button::Status::Hovered);
        assert_ne!(active.background, hovered.background);
    }

    #[test]
    fn primary_button_uses_ocean_when_idle() {
        let style = primary(&Theme::Light, button::Status::Active);
        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::OCEAN);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn dismiss_is_transparent_until_hovered() {
        let style_fn = dismiss(WHITE);
        assert!(style_fn(&Theme::Dark, button::Status::Active).background.is_none());
        assert!(style_fn(&Theme::Dark, button::Status::Hovered).background.is_some());
    }
}
