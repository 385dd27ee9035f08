//! Read-only queries over a song collection.
//!
//! Every function borrows the collection and returns views into it; nothing
//! here mutates or clones songs.

use std::collections::HashSet;

use crate::clients::entities::Song;

/// Genres in first-seen order without duplicates.
///
/// Songs without genre contribute a single `None` entry at the position the
/// first of them appears.
pub fn distinct_genres(songs: &[Song]) -> Vec<Option<&str>> {
    let mut seen = HashSet::new();
    songs
        .iter()
        .map(|song| song.genre.as_deref())
        .filter(|genre| seen.insert(*genre))
        .collect()
}

/// Artists without duplicates, sorted ascending by byte-wise string order.
///
/// Songs without artist are left out.
pub fn sorted_artists(songs: &[Song]) -> Vec<&str> {
    let mut artists: Vec<&str> = songs
        .iter()
        .filter_map(|song| song.artist.as_deref())
        .collect();
    artists.sort_unstable();
    artists.dedup();
    artists
}

/// Artist of every song whose genre contains `needle`, ignoring case.
///
/// One entry per matching song, so duplicates are kept. A matching song
/// without artist yields `None`.
pub fn filter_by_genre_substring<'a>(songs: &'a [Song], needle: &str) -> Vec<Option<&'a str>> {
    songs
        .iter()
        .filter(|song| song.genre_contains(needle))
        .map(|song| song.artist.as_deref())
        .collect()
}

/// Songs whose artist equals `name` exactly (case-sensitive).
pub fn filter_by_exact_artist<'a>(songs: &'a [Song], name: &str) -> Vec<&'a Song> {
    songs
        .iter()
        .filter(|song| song.artist.as_deref() == Some(name))
        .collect()
}
