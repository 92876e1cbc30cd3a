// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use folio::domain::{BackdropClass, Section};
    use folio::ui::backdrop::{self, RootStyle};
    use folio::ui::design_tokens::{opacity, palette, sizing, spacing};
    use folio::ui::styles::{button, container};
    use folio::ui::theming::ThemeMode;
    use iced::{Background, Theme};

    #[test]
    fn all_styles_are_callable() {
        let theme = Theme::Dark;
        let _ = button::back(&theme, iced::widget::button::Status::Active);
        let _ = button::primary(&theme, iced::widget::button::Status::Hovered);
        let _ = container::card(&theme);
        let _ = container::placeholder(&theme);
        let _ = container::profile_frame(&theme);
        let _ = container::nav_tile(true)(&theme);
    }

    #[test]
    fn design_tokens_are_accessible() {
        let _ = palette::MIDNIGHT;
        let _ = spacing::MD;
        let _ = opacity::CARD;
        assert!(sizing::PROFILE_PHOTO > sizing::NAV_ICON);
    }

    #[test]
    fn every_section_has_its_own_background() {
        let backgrounds: Vec<Background> = Section::ALL
            .iter()
            .map(|section| backdrop::background(section.backdrop()))
            .collect();
        for (i, a) in backgrounds.iter().enumerate() {
            for b in &backgrounds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn root_container_falls_back_to_theme_after_revert() {
        let mut root = RootStyle::new();
        root.apply(BackdropClass::Movies);
        root.revert();
        let style = backdrop::root_container(&root)(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(
                Theme::Light.extended_palette().background.base.color
            ))
        );
    }

    #[test]
    fn theming_switches_correctly() {
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
    }
}
