mod cli;
mod pipeline;

use std::process::ExitCode;

use log::{debug, error};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before the logger so RUST_LOG can live there too
    let dotenv = dotenvy::dotenv();
    env_logger::init();
    if let Err(e) = dotenv {
        debug!("No .env file loaded: {e}");
    }

    match cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:?}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
