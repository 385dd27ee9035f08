use std::fmt;

use serde::{Deserialize, Serialize};

/// A song record as published by the songs API.
///
/// Field names on the wire are `song`, `artist`, `duration_ms` and `genre`.
/// Optional fields accept both `null` and a missing key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    #[serde(rename = "song")]
    pub title: Option<String>,
    pub artist: Option<String>,
    pub duration_ms: i64,
    pub genre: Option<String>,
}

impl Song {
    pub fn new(
        title: Option<&str>,
        artist: Option<&str>,
        duration_ms: i64,
        genre: Option<&str>,
    ) -> Self {
        Song {
            title: title.map(str::to_owned),
            artist: artist.map(str::to_owned),
            duration_ms,
            genre: genre.map(str::to_owned),
        }
    }

    // Case-insensitive on both sides; a song without genre never matches
    pub fn genre_contains(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.genre
            .as_deref()
            .is_some_and(|genre| genre.to_lowercase().contains(&needle))
    }
}

// Console output is English; only the text export header is Portuguese,
// as it is part of the file format.
impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Artist: {}, Duration: {} ms, Genre: {}",
            self.title.as_deref().unwrap_or("-"),
            self.artist.as_deref().unwrap_or("-"),
            self.duration_ms,
            self.genre.as_deref().unwrap_or("-"),
        )
    }
}
