/// Song record shared by the API client, the queries and playlists
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Playlist export directory
pub mod local_storage;
/// Songs API client
pub mod songs_api;

pub use local_storage::{ExportFormat, LocalStorage};
pub use songs_api::SongsApiClient;
