use log::debug;

use crate::clients::{
    entities::Song,
    errors::{Error, Result},
};

/// Public song catalog used when no URL is configured
pub const DEFAULT_SONGS_URL: &str = "https://guilhermeonrails.github.io/api-csharp-songs/songs.json";

const USER_AGENT: &str = concat!("playlister/", env!("CARGO_PKG_VERSION"));

/// Parse the songs API body: a JSON array of song objects
pub fn parse_songs(body: &str) -> Result<Vec<Song>> {
    Ok(serde_json::from_str(body)?)
}

pub struct SongsApiClient {
    http: reqwest::Client,
    url: String,
}

impl SongsApiClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        SongsApiClient {
            http,
            url: url.into(),
        }
    }

    // Create a client for PLAYLISTER_SONGS_URL, or the public catalog when unset
    pub fn try_default() -> Result<Self> {
        let url = match std::env::var("PLAYLISTER_SONGS_URL") {
            Ok(url) => url,
            Err(std::env::VarError::NotPresent) => DEFAULT_SONGS_URL.to_string(),
            Err(e) => return Err(e.into()),
        };
        Self::with_url(url)
    }

    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::new(http, url))
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    // Single GET, no retry. Anything but a 2xx answer is a network error.
    pub async fn fetch_text(&self) -> Result<String> {
        debug!("Fetching songs from {} ...", self.url);
        let response = self.http.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::NetworkError(format!(
                "{} answered with status {status}",
                self.url
            )));
        }

        let body = response.text().await?;
        debug!("Received {} bytes from {}", body.len(), self.url);
        Ok(body)
    }

    pub async fn get_songs(&self) -> Result<Vec<Song>> {
        let body = self.fetch_text().await?;
        parse_songs(&body)
    }
}
