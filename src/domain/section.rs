// SPDX-License-Identifier: MPL-2.0
//! Section and hover enumerations with their pure mappings.
//!
//! Every mapping here is total over a closed enumeration, so none of the
//! functions can fail.

use std::fmt;
use std::str::FromStr;

/// One of the five top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    Movies,
    Drawings,
    Resume,
    Music,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Movies,
        Section::Drawings,
        Section::Resume,
        Section::Music,
    ];

    /// Stable lowercase identifier (`home`, `movies`, ...).
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Movies => "movies",
            Section::Drawings => "drawings",
            Section::Resume => "resume",
            Section::Music => "music",
        }
    }

    /// The panel rendered while this section is current.
    #[must_use]
    pub fn panel(self) -> Panel {
        match self {
            Section::Home => Panel::Home,
            Section::Movies => Panel::Movies,
            Section::Drawings => Panel::Drawings,
            Section::Resume => Panel::Resume,
            Section::Music => Panel::Music,
        }
    }

    /// The backdrop class applied to the root while this section is current.
    #[must_use]
    pub fn backdrop(self) -> BackdropClass {
        match self {
            Section::Home => BackdropClass::Home,
            Section::Movies => BackdropClass::Movies,
            Section::Drawings => BackdropClass::Drawings,
            Section::Resume => BackdropClass::Resume,
            Section::Music => BackdropClass::Music,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Error returned when parsing an unknown section name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section '{}'", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.slug() == lowered)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Which profile photo variant is shown on the home panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HoverTarget {
    #[default]
    Default,
    Movies,
    Drawings,
    Resume,
    Music,
}

impl HoverTarget {
    pub const ALL: [HoverTarget; 5] = [
        HoverTarget::Default,
        HoverTarget::Movies,
        HoverTarget::Drawings,
        HoverTarget::Resume,
        HoverTarget::Music,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            HoverTarget::Default => "default",
            HoverTarget::Movies => "movies",
            HoverTarget::Drawings => "drawings",
            HoverTarget::Resume => "resume",
            HoverTarget::Music => "music",
        }
    }

    /// The section a navigation icon with this target leads to.
    #[must_use]
    pub fn section(self) -> Option<Section> {
        match self {
            HoverTarget::Default => None,
            HoverTarget::Movies => Some(Section::Movies),
            HoverTarget::Drawings => Some(Section::Drawings),
            HoverTarget::Resume => Some(Section::Resume),
            HoverTarget::Music => Some(Section::Music),
        }
    }
}

/// The static fragment shown for the current section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Home,
    Movies,
    Drawings,
    Resume,
    Music,
}

/// Background class applied to the root surface, one per section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackdropClass {
    Home,
    Movies,
    Drawings,
    Resume,
    Music,
}

impl BackdropClass {
    pub const ALL: [BackdropClass; 5] = [
        BackdropClass::Home,
        BackdropClass::Movies,
        BackdropClass::Drawings,
        BackdropClass::Resume,
        BackdropClass::Music,
    ];

    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            BackdropClass::Home => "bg-home",
            BackdropClass::Movies => "bg-movies",
            BackdropClass::Drawings => "bg-drawings",
            BackdropClass::Resume => "bg-resume",
            BackdropClass::Music => "bg-music",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_section_maps_to_a_distinct_panel_and_backdrop() {
        let panels: HashSet<Panel> = Section::ALL.iter().map(|s| s.panel()).collect();
        let backdrops: HashSet<BackdropClass> =
            Section::ALL.iter().map(|s| s.backdrop()).collect();
        assert_eq!(panels.len(), Section::ALL.len());
        assert_eq!(backdrops.len(), Section::ALL.len());
    }

    #[test]
    fn backdrop_class_names_follow_slug() {
        for section in Section::ALL {
            assert_eq!(
                section.backdrop().class_name(),
                format!("bg-{}", section.slug())
            );
        }
    }

    #[test]
    fn parse_accepts_slugs_case_insensitively() {
        assert_eq!("music".parse::<Section>(), Ok(Section::Music));
        assert_eq!(" Resume ".parse::<Section>(), Ok(Section::Resume));
        assert_eq!(
            "gallery".parse::<Section>(),
            Err(UnknownSection("gallery".to_string()))
        );
    }

    #[test]
    fn every_icon_targets_a_distinct_section() {
        let sections: Vec<Section> = HoverTarget::ALL
            .into_iter()
            .filter_map(HoverTarget::section)
            .collect();
        assert_eq!(sections.len(), 4);
        assert!(!sections.contains(&Section::Home));
        for (i, a) in sections.iter().enumerate() {
            assert!(!sections[i + 1..].contains(a));
        }
        assert_eq!(HoverTarget::Default.section(), None);
    }

    #[test]
    fn defaults_match_initial_state() {
        assert_eq!(Section::default(), Section::Home);
        assert_eq!(HoverTarget::default(), HoverTarget::Default);
    }
}
