use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;
use playlister::catalog;
use playlister::clients::{ExportFormat, LocalStorage, SongsApiClient, errors::Result};

use crate::pipeline::{self, Selection};

#[derive(Parser)]
#[command(name = "playlister")]
#[command(version, about = "Query a song catalog and export playlists", long_about = None)]
struct Cli {
    /// Songs API URL (defaults to PLAYLISTER_SONGS_URL, then the public catalog)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Where playlists are written (defaults to PLAYLISTER_OUTPUT_DIR, then the working directory)
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the details of every song
    Songs,
    /// Print each genre once, in first-seen order
    Genres,
    /// Print each artist once, sorted
    Artists,
    /// Print the artist of every song whose genre contains NEEDLE
    ByGenre { needle: String },
    /// Print the titles of the songs by exactly NAME
    ByArtist { name: String },
    /// Build a playlist from the matching songs and export it
    Playlist {
        name: String,
        /// Only songs by exactly this artist
        #[arg(long)]
        artist: Option<String>,
        /// Only songs whose genre contains this text, ignoring case
        #[arg(long)]
        genre: Option<String>,
        /// Only songs with this exact title (repeatable)
        #[arg(long = "title")]
        titles: Vec<String>,
        /// Keep at most this many songs
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    info!("Building config ...");
    let mut builder = pipeline::ConfigBuilder::new();
    if let Some(url) = cli.url {
        builder = builder.songs_api(SongsApiClient::with_url(url)?);
    }
    if let Some(dir) = cli.output_dir {
        builder = builder.storage(LocalStorage::new(dir));
    }
    let pipeline = pipeline::Pipeline::new(builder.build()?);

    match cli.command {
        Commands::Songs => {
            for song in pipeline.songs().await? {
                println!("{song}");
            }
        }
        Commands::Genres => {
            let songs = pipeline.songs().await?;
            for genre in catalog::distinct_genres(&songs) {
                println!("{}", genre.unwrap_or("-"));
            }
        }
        Commands::Artists => {
            let songs = pipeline.songs().await?;
            for artist in catalog::sorted_artists(&songs) {
                println!("{artist}");
            }
        }
        Commands::ByGenre { needle } => {
            let songs = pipeline.songs().await?;
            for artist in catalog::filter_by_genre_substring(&songs, &needle) {
                println!("{}", artist.unwrap_or("-"));
            }
        }
        Commands::ByArtist { name } => {
            let songs = pipeline.songs().await?;
            for song in catalog::filter_by_exact_artist(&songs, &name) {
                println!("{}", song.title.as_deref().unwrap_or("-"));
            }
        }
        Commands::Playlist {
            name,
            artist,
            genre,
            titles,
            limit,
            format,
        } => {
            let selection = Selection {
                artist,
                genre,
                titles,
                limit,
            };
            let playlist = pipeline.export_playlist(&name, &selection, format).await?;
            print!("{playlist}");
        }
    }
    Ok(())
}
