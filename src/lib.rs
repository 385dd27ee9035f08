//! Playlister - query a remote song catalog and export playlists
//!
//! This library fetches a JSON list of songs, answers a few questions about
//! it (genres, artists, filters) and writes playlists to disk as JSON or text.

/// Query functions over a song collection
pub mod catalog;
/// Client modules for the songs API and local file output
pub mod clients;
/// Playlist aggregate and its exports
pub mod playlist;

pub use clients::entities::Song;
pub use playlist::Playlist;
