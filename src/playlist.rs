//! Named, ordered song collections and their JSON/text exports.

use std::fmt;
use std::path::{Component, Path};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::clients::{
    entities::Song,
    errors::{Error, Result},
};

/// Header line of the text export, followed by the playlist name
pub const TEXT_HEADER: &str = "Músicas favoritas do";

// On-disk JSON layout. Outer keys are fixed, songs keep their wire names.
#[derive(Serialize)]
struct PlaylistDocumentRef<'a> {
    nome: &'a str,
    musicas: &'a [Song],
}

#[derive(Deserialize)]
struct PlaylistDocument {
    nome: String,
    musicas: Vec<Song>,
}

/// A named playlist. Songs can only be appended, in order, duplicates allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    name: String,
    songs: Vec<Song>,
}

impl Playlist {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Playlist {
            name,
            songs: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn add(&mut self, song: Song) {
        self.songs.push(song);
    }

    pub fn extend(&mut self, songs: impl IntoIterator<Item = Song>) {
        for song in songs {
            self.add(song);
        }
    }

    /// Render as `{"nome": ..., "musicas": [...]}`
    pub fn to_json(&self) -> Result<String> {
        let document = PlaylistDocumentRef {
            nome: &self.name,
            musicas: &self.songs,
        };
        Ok(serde_json::to_string(&document)?)
    }

    /// Parse a document produced by [`Playlist::to_json`]
    pub fn from_json(json: &str) -> Result<Self> {
        let document: PlaylistDocument = serde_json::from_str(json)?;
        let mut playlist = Playlist::new(document.nome)?;
        playlist.extend(document.musicas);
        Ok(playlist)
    }

    /// Render the header, a blank line and one `- <title>` line per song
    pub fn to_text(&self) -> String {
        let mut text = format!("{TEXT_HEADER} {}\n\n", self.name);
        for song in &self.songs {
            text.push_str("- ");
            text.push_str(song.title.as_deref().unwrap_or_default());
            text.push('\n');
        }
        text
    }

    // Exports render fully in memory first, so a failed write never leaves an
    // open handle behind. Re-running overwrites the target.
    pub async fn export_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        tokio::fs::write(path, json).await?;
        debug!("Wrote playlist {:?} as JSON to {path:?}", self.name);
        Ok(())
    }

    pub async fn export_text(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        tokio::fs::write(path, self.to_text()).await?;
        debug!("Wrote playlist {:?} as text to {path:?}", self.name);
        Ok(())
    }
}

// Export file names derive from the playlist name, so it must be one plain
// path component: not empty, no separators, not `.` or `..`.
fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidArgument(
            "playlist name must not be empty".into(),
        ));
    }
    let mut components = Path::new(name).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(part)), None) if part == name
    );
    if !single_normal || name.contains(['/', '\\', '\0']) {
        return Err(Error::InvalidArgument(format!(
            "playlist name {name:?} must be a plain file name"
        )));
    }
    Ok(())
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.songs.len() == 1 { "song" } else { "songs" };
        writeln!(f, "Playlist: {} ({} {noun})", self.name, self.songs.len())?;
        for song in &self.songs {
            writeln!(f, "{song}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn song(title: &str) -> Song {
        Song::new(Some(title), Some("X"), 100, Some("Pop"))
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(Playlist::new(""), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn names_must_be_plain_file_names() {
        for name in [".", "..", "/tmp/x", "a/b", "a\\b", "dir/", "nul\0byte"] {
            assert!(
                matches!(Playlist::new(name), Err(Error::InvalidArgument(_))),
                "{name:?} was accepted"
            );
        }
        for name in ["Mix", "Road Trip", "..hidden", "a.b", "Músicas"] {
            assert_eq!(Playlist::new(name).unwrap().name(), name);
        }
    }

    #[test]
    fn display_counts_songs() {
        let mut playlist = Playlist::new("T").unwrap();
        assert!(playlist.to_string().starts_with("Playlist: T (0 songs)\n"));
        playlist.add(song("A"));
        playlist.add(song("B"));
        assert!(playlist.to_string().starts_with("Playlist: T (2 songs)\n"));
    }

    #[test]
    fn songs_keep_insertion_order_and_duplicates() {
        let mut playlist = Playlist::new("Mix").unwrap();
        assert!(playlist.is_empty());
        playlist.add(song("B"));
        playlist.add(song("A"));
        playlist.add(song("B"));

        let titles: Vec<_> = playlist
            .songs()
            .iter()
            .map(|s| s.title.as_deref().unwrap())
            .collect();
        assert_eq!(titles, vec!["B", "A", "B"]);
        assert_eq!(playlist.len(), 3);
    }

    #[test]
    fn json_uses_fixed_outer_keys() {
        let mut playlist = Playlist::new("T").unwrap();
        playlist.add(Song::new(Some("A"), None, 100, Some("Pop")));
        let value: serde_json::Value = serde_json::from_str(&playlist.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "nome": "T",
                "musicas": [{"song": "A", "artist": null, "duration_ms": 100, "genre": "Pop"}]
            })
        );
    }

    #[test]
    fn text_scenario() {
        let mut playlist = Playlist::new("T").unwrap();
        playlist.add(song("A"));
        assert_eq!(playlist.to_text(), "Músicas favoritas do T\n\n- A\n");
    }

    #[test]
    fn text_of_empty_playlist_and_untitled_song() {
        let mut playlist = Playlist::new("T").unwrap();
        assert_eq!(playlist.to_text(), "Músicas favoritas do T\n\n");
        playlist.add(Song::new(None, None, 0, None));
        assert_eq!(playlist.to_text(), "Músicas favoritas do T\n\n- \n");
    }

    #[test]
    fn display_lists_song_details() {
        let mut playlist = Playlist::new("T").unwrap();
        playlist.add(song("A"));
        assert_eq!(
            playlist.to_string(),
            "Playlist: T (1 song)\nTitle: A, Artist: X, Duration: 100 ms, Genre: Pop\n"
        );
    }

    #[tokio::test]
    async fn json_export_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("T.json");
        let mut playlist = Playlist::new("T").unwrap();
        playlist.add(song("A"));
        playlist.add(Song::new(None, None, 7, None));
        playlist.add(song("A"));

        playlist.export_json(&path).await.unwrap();
        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        let reloaded = Playlist::from_json(&contents).unwrap();

        assert_eq!(reloaded, playlist);
    }

    #[tokio::test]
    async fn export_overwrites_previous_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("T");
        let mut playlist = Playlist::new("T").unwrap();
        playlist.add(song("A"));
        playlist.add(song("B"));
        playlist.export_text(&path).await.unwrap();

        let mut shorter = Playlist::new("T").unwrap();
        shorter.add(song("C"));
        shorter.export_text(&path).await.unwrap();

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(contents, "Músicas favoritas do T\n\n- C\n");
    }

    #[tokio::test]
    async fn export_into_missing_directory_fails_with_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("T.json");
        let playlist = Playlist::new("T").unwrap();

        let err = playlist.export_json(&path).await.unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
        let err = playlist.export_text(&path).await.unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }

    #[test]
    fn reloading_rejects_empty_name() {
        let res = Playlist::from_json(r#"{"nome": "", "musicas": []}"#);
        assert!(matches!(res, Err(Error::InvalidArgument(_))));
    }
}
