//! Trimly
//!
//! A command-line tool that trims silence from audio files with FFmpeg.
//!
//! # Usage
//!
//! ```bash
//! trimly trim voice.mp3
//! trimly trim voice.mp3 --threshold -40 --min-silence 0.2 --json
//! trimly info voice.mp3
//! trimly config --format json
//! ```

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use trimly::cli::{self, Cli};
use trimly::utils::logging::LoggingSystem;

/// Main entry point for the Trimly CLI application
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = LoggingSystem::new(cli.logging_config());
    logging.initialize();
    logging.log_system_info();

    match cli::run(cli).await {
        Ok(code) => {
            info!("Trimly finished");
            code
        }
        Err(e) => {
            error!("Command failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
