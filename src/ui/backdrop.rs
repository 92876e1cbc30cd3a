// SPDX-License-Identifier: MPL-2.0
//! Window backdrop driven by the current section.
//!
//! [`RootStyle`] stands for the root surface of the window. It carries the set
//! of backdrop classes currently applied; the controller keeps it at exactly
//! one class while alive and clears it on teardown.

use crate::domain::BackdropClass;
use crate::ui::design_tokens::palette;
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Color, Degrees, Theme};
use std::collections::BTreeSet;

/// Classes applied to the root surface.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RootStyle {
    classes: BTreeSet<&'static str>,
}

impl RootStyle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every backdrop class, then adds `class`.
    pub fn apply(&mut self, class: BackdropClass) {
        for known in BackdropClass::ALL {
            self.classes.remove(known.class_name());
        }
        self.classes.insert(class.class_name());
    }

    /// Removes every backdrop class.
    pub fn revert(&mut self) {
        for known in BackdropClass::ALL {
            self.classes.remove(known.class_name());
        }
    }

    /// The single applied backdrop, if exactly one is present.
    #[must_use]
    pub fn active(&self) -> Option<BackdropClass> {
        let mut applied = BackdropClass::ALL
            .into_iter()
            .filter(|class| self.classes.contains(class.class_name()));
        match (applied.next(), applied.next()) {
            (Some(class), None) => Some(class),
            _ => None,
        }
    }

    pub fn classes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.classes.iter().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// Background painted for a backdrop class.
#[must_use]
pub fn background(class: BackdropClass) -> Background {
    let stops = match class {
        BackdropClass::Home => return Background::Color(palette::MIDNIGHT),
        BackdropClass::Movies => (palette::CORAL, palette::SUNFLOWER),
        BackdropClass::Drawings => (palette::SKY, palette::OCEAN),
        BackdropClass::Resume => (palette::MINT, palette::AZURE),
        BackdropClass::Music => (palette::TURQUOISE, palette::SEA_GREEN),
    };
    linear(stops.0, stops.1)
}

fn linear(from: Color, to: Color) -> Background {
    Linear::new(Degrees(45.0))
        .add_stop(0.0, from)
        .add_stop(1.0, to)
        .into()
}

/// Container style for the root surface. With no class applied the theme
/// background shows through.
pub fn root_container(style: &RootStyle) -> impl Fn(&Theme) -> container::Style + '_ {
    move |theme: &Theme| {
        let background = match style.active() {
            Some(class) => background(class),
            None => Background::Color(theme.extended_palette().background.base.color),
        };
        container::Style {
            background: Some(background),
            text_color: Some(palette::WHITE),
            ..Default::default()
        }
    }
}
