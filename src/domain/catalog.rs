// SPDX-License-Identifier: MPL-2.0
//! Static portfolio content.
//!
//! Asset paths are relative to the asset root configured at startup
//! (see [`crate::media::assets::AssetStore`]).

use super::section::HoverTarget;

/// Owner shown on the home panel.
pub const OWNER_NAME: &str = "Justin Rhodes";
pub const OWNER_TAGLINE: &str = "Computer Science Student & Developer";

/// A movie card on the movies panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movie {
    pub title: &'static str,
    pub year: &'static str,
    pub poster: &'static str,
}

impl Movie {
    /// Text shown when the poster cannot be loaded.
    #[must_use]
    pub fn placeholder(&self) -> String {
        format!("{} Poster", self.title)
    }
}

/// An album row on the music panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Album {
    pub title: &'static str,
    pub artist: &'static str,
    pub genre: &'static str,
    pub year: &'static str,
    pub favorite_track: &'static str,
    pub rating: &'static str,
    pub cover: &'static str,
}

impl Album {
    #[must_use]
    pub fn placeholder(&self) -> String {
        format!("{} Cover", self.title)
    }
}

/// A drawing on the drawings panel. `number` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drawing {
    pub number: u8,
    pub path: &'static str,
}

impl Drawing {
    #[must_use]
    pub fn label(&self) -> String {
        format!("Doodle {}", self.number)
    }

    #[must_use]
    pub fn placeholder(&self) -> String {
        self.label()
    }
}

/// The resume document offered for download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResumeDocument {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub path: &'static str,
    pub file_name: &'static str,
}

pub const RESUME: ResumeDocument = ResumeDocument {
    title: "Justin Rhodes Resume",
    subtitle: "Computer Science Junior at University of Pittsburgh",
    path: "justin-rhodes-resume.pdf",
    file_name: "justin-rhodes-resume.pdf",
};

/// Profile photo shown for a hover target.
#[must_use]
pub fn profile_photo(target: HoverTarget) -> &'static str {
    match target {
        HoverTarget::Default => "profile-photos/default.jpg",
        HoverTarget::Movies => "profile-photos/movies.jpg",
        HoverTarget::Drawings => "profile-photos/drawings.jpg",
        HoverTarget::Resume => "profile-photos/resume.jpg",
        HoverTarget::Music => "profile-photos/music.jpg",
    }
}

pub const MOVIES: [Movie; 6] = [
    Movie {
        title: "The Thing",
        year: "1982",
        poster: "movie-posters/the-thing.jpg",
    },
    Movie {
        title: "Taxi Driver",
        year: "1976",
        poster: "movie-posters/taxi-driver.jpg",
    },
    Movie {
        title: "Chinatown",
        year: "1974",
        poster: "movie-posters/chinatown.jpg",
    },
    Movie {
        title: "Jaws",
        year: "1975",
        poster: "movie-posters/jaws.jpg",
    },
    Movie {
        title: "Eternal Sunshine of the Spotless Mind",
        year: "2004",
        poster: "movie-posters/eternal-sunshine.jpg",
    },
    Movie {
        title: "Dr. Strangelove",
        year: "1964",
        poster: "movie-posters/dr-strangelove.jpg",
    },
];

pub const DRAWINGS: [Drawing; 4] = [
    Drawing {
        number: 1,
        path: "drawings/drawing1.jpg",
    },
    Drawing {
        number: 2,
        path: "drawings/drawing2.jpg",
    },
    Drawing {
        number: 3,
        path: "drawings/drawing3.jpg",
    },
    Drawing {
        number: 4,
        path: "drawings/drawing4.jpg",
    },
];

pub const ALBUMS: [Album; 6] = [
    Album {
        title: "The Stone Roses",
        artist: "The Stone Roses",
        genre: "Indie Rock, Madchester",
        year: "1989",
        favorite_track: "I Wanna Be Adored",
        rating: "4.9",
        cover: "album-covers/stone-roses.jpg",
    },
    Album {
        title: "Souvlaki",
        artist: "Slowdive",
        genre: "Shoegaze, Dream Pop",
        year: "1993",
        favorite_track: "Alison",
        rating: "4.8",
        cover: "album-covers/souvlaki.jpg",
    },
    Album {
        title: "Born to Run",
        artist: "Bruce Springsteen",
        genre: "Rock, Heartland Rock",
        year: "1975",
        favorite_track: "Thunder Road",
        rating: "4.7",
        cover: "album-covers/born-to-run.jpg",
    },
    Album {
        title: "Abbey Road",
        artist: "The Beatles",
        genre: "Rock, Pop",
        year: "1969",
        favorite_track: "Come Together",
        rating: "4.9",
        cover: "album-covers/abbey-road.jpg",
    },
    Album {
        title: "Rumours",
        artist: "Fleetwood Mac",
        genre: "Rock, Pop Rock",
        year: "1977",
        favorite_track: "Dreams",
        rating: "4.8",
        cover: "album-covers/rumours.jpg",
    },
    Album {
        title: "Doolittle",
        artist: "Pixies",
        genre: "Alternative Rock",
        year: "1989",
        favorite_track: "Debaser",
        rating: "4.6",
        cover: "album-covers/doolittle.jpg",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_sizes_match_panels() {
        assert_eq!(MOVIES.len(), 6);
        assert_eq!(DRAWINGS.len(), 4);
        assert_eq!(ALBUMS.len(), 6);
    }

    #[test]
    fn every_hover_target_has_its_own_photo() {
        let photos: HashSet<&str> = HoverTarget::ALL.iter().map(|t| profile_photo(*t)).collect();
        assert_eq!(photos.len(), HoverTarget::ALL.len());
        assert_eq!(
            profile_photo(HoverTarget::Default),
            "profile-photos/default.jpg"
        );
    }

    #[test]
    fn placeholders_use_titles() {
        let jaws = MOVIES.iter().find(|m| m.title == "Jaws").unwrap();
        assert_eq!(jaws.placeholder(), "Jaws Poster");
        assert_eq!(ALBUMS[1].placeholder(), "Souvlaki Cover");
        assert_eq!(DRAWINGS[2].placeholder(), "Doodle 3");
    }

    #[test]
    fn drawings_are_numbered_from_one() {
        for (index, drawing) in DRAWINGS.iter().enumerate() {
            assert_eq!(usize::from(drawing.number), index + 1);
        }
    }
}
