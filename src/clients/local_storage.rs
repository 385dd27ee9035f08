use clap::ValueEnum;
use log::{debug, info};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::clients::errors::{Error, Result};
use crate::playlist::Playlist;

/// Which playlist documents to write
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Text,
    Both,
}

impl ExportFormat {
    pub fn json(self) -> bool {
        matches!(self, ExportFormat::Json | ExportFormat::Both)
    }

    pub fn text(self) -> bool {
        matches!(self, ExportFormat::Text | ExportFormat::Both)
    }
}

/// Directory playlists are exported to. File names derive from the playlist
/// name: `<name>.json` for JSON and `<name>` for text.
pub struct LocalStorage {
    dir: PathBuf,
}

impl LocalStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        LocalStorage { dir: dir.into() }
    }

    // PLAYLISTER_OUTPUT_DIR, falling back to the working directory
    pub fn try_default() -> Result<Self> {
        let dir = match std::env::var_os("PLAYLISTER_OUTPUT_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => std::env::current_dir()?,
        };
        debug!("Using output directory {dir:?}");
        Ok(LocalStorage { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn init_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        debug!("Output directory {:?} is ready", self.dir);
        Ok(())
    }

    pub fn json_path(&self, playlist: &Playlist) -> PathBuf {
        self.dir.join(format!("{}.json", playlist.name()))
    }

    pub fn text_path(&self, playlist: &Playlist) -> PathBuf {
        self.dir.join(playlist.name())
    }

    pub async fn save_json(&self, playlist: &Playlist) -> Result<PathBuf> {
        let mut written = self.save(playlist, ExportFormat::Json).await?;
        Ok(written.remove(0))
    }

    pub async fn save_text(&self, playlist: &Playlist) -> Result<PathBuf> {
        let mut written = self.save(playlist, ExportFormat::Text).await?;
        Ok(written.remove(0))
    }

    // Every document is rendered and every target checked before the first
    // write, so a rejected export leaves the directory untouched.
    pub async fn save(&self, playlist: &Playlist, format: ExportFormat) -> Result<Vec<PathBuf>> {
        let mut pending = Vec::new();
        if format.json() {
            pending.push((self.json_path(playlist), playlist.to_json()?));
        }
        if format.text() {
            pending.push((self.text_path(playlist), playlist.to_text()));
        }

        for (path, _) in &pending {
            check_target(path).await?;
        }

        let mut written = Vec::with_capacity(pending.len());
        for (path, contents) in pending {
            tokio::fs::write(&path, contents).await?;
            info!("Playlist file generated: {}", display_path(&path).await);
            written.push(path);
        }
        Ok(written)
    }
}

// Targets may be overwritten, but only when they are files
async fn check_target(path: &Path) -> Result<()> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_dir() => Err(Error::IoError(std::io::Error::new(
            ErrorKind::IsADirectory,
            format!("{} is a directory", path.display()),
        ))),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

// Absolute path for reporting; the relative one if it can't be resolved
async fn display_path(path: &Path) -> String {
    match tokio::fs::canonicalize(path).await {
        Ok(full) => full.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}
