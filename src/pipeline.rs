use log::{debug, info};
use playlister::catalog;
use playlister::clients::{ExportFormat, LocalStorage, SongsApiClient, errors::Result};
use playlister::{Playlist, Song};

// Configuration for the Pipeline struct
pub struct Config {
    pub songs_api: SongsApiClient,
    pub storage: LocalStorage,
}

pub struct ConfigBuilder {
    songs_api: Option<SongsApiClient>,
    storage: Option<LocalStorage>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            songs_api: None,
            storage: None,
        }
    }

    pub fn songs_api(mut self, songs_api: SongsApiClient) -> Self {
        self.songs_api = Some(songs_api);
        self
    }

    pub fn storage(mut self, storage: LocalStorage) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn build(self) -> Result<Config> {
        let songs_api = match self.songs_api {
            Some(s) => s,
            None => SongsApiClient::try_default()?,
        };
        let storage = match self.storage {
            Some(s) => s,
            None => LocalStorage::try_default()?,
        };
        Ok(Config { songs_api, storage })
    }
}

// Criteria for picking playlist songs; every given criterion must hold
#[derive(Debug, Default)]
pub struct Selection {
    pub artist: Option<String>,
    pub genre: Option<String>,
    pub titles: Vec<String>,
    pub limit: Option<usize>,
}

impl Selection {
    pub fn apply<'a>(&self, songs: &'a [Song]) -> Vec<&'a Song> {
        let candidates = match &self.artist {
            Some(artist) => catalog::filter_by_exact_artist(songs, artist),
            None => songs.iter().collect(),
        };
        candidates
            .into_iter()
            .filter(|song| self.genre.as_deref().is_none_or(|g| song.genre_contains(g)))
            .filter(|song| {
                self.titles.is_empty()
                    || song
                        .title
                        .as_deref()
                        .is_some_and(|title| self.titles.iter().any(|t| t == title))
            })
            .take(self.limit.unwrap_or(usize::MAX))
            .collect()
    }
}

// Runs fetch -> parse -> query -> export, aborting on the first error
pub struct Pipeline {
    config: Config,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Pipeline { config }
    }

    pub async fn songs(&self) -> Result<Vec<Song>> {
        info!("Fetching songs from {} ...", self.config.songs_api.url());
        let songs = self.config.songs_api.get_songs().await?;
        info!("Fetched {} songs", songs.len());
        Ok(songs)
    }

    pub async fn export_playlist(
        &self,
        name: &str,
        selection: &Selection,
        format: ExportFormat,
    ) -> Result<Playlist> {
        // Validate the name before any network traffic
        let mut playlist = Playlist::new(name)?;
        let songs = self.songs().await?;

        let selected = selection.apply(&songs);
        debug!("Selection {selection:?} matched {} songs", selected.len());
        playlist.extend(selected.into_iter().cloned());

        let storage = &self.config.storage;
        storage.init_dir().await?;
        storage.save(&playlist, format).await?;

        info!(
            "Playlist {:?} exported with {} songs",
            playlist.name(),
            playlist.len()
        );
        Ok(playlist)
    }
}
