//! CLI module for Trimly
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::app::AppContainer;
use crate::config::ConfigOverrides;
use crate::config_initialization::configuration_store;
use crate::utils::logging::{LogFormat, LogLevel, LoggingConfig};

pub mod args;
pub mod commands;

/// Trimly
///
/// Removes silence from the start, end and middle of audio files using FFmpeg.
#[derive(Parser, Debug, Clone)]
#[command(name = "trimly")]
#[command(about = "Trimly - Silence trimming for audio files")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level (RUST_LOG takes precedence when set)
    #[arg(long, value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Log output format
    #[arg(long, value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormat,

    /// TOML configuration file (defaults to ./trimly.toml when present)
    #[arg(long, env = "TRIMLY_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Directory processed files are written to
    #[arg(long, global = true)]
    pub temp_dir: Option<PathBuf>,

    /// Processing timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// FFmpeg binary to run
    #[arg(long, global = true)]
    pub ffmpeg: Option<String>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Trim silence from an audio file
    Trim(args::TrimArgs),
    /// Check that FFmpeg is available
    Check,
    /// Show information about an input file
    Info(args::InfoArgs),
    /// Print the effective configuration
    Config(args::ConfigArgs),
    /// Remove processed files from the temp directory
    Clean,
}

impl Cli {
    /// Logging settings chosen on the command line
    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level,
            format: self.log_format,
            ..LoggingConfig::default()
        }
    }

    /// Configuration values set by global flags
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            temp_directory: self.temp_dir.clone(),
            processing_operation_timeout_seconds: self.timeout,
            ffmpeg_binary: self.ffmpeg.clone(),
            ..ConfigOverrides::default()
        }
    }
}

/// Resolve configuration, wire the container and run the selected command
pub async fn run(cli: Cli) -> Result<ExitCode> {
    let store = configuration_store(&cli);
    let config = store.get()?;
    debug!("Effective configuration: {:?}", config);

    let container = AppContainer::new(Arc::clone(&config));
    match cli.command {
        Commands::Trim(args) => commands::trim(&container, args).await,
        Commands::Check => commands::check(&container).await,
        Commands::Info(args) => commands::info(&container, args),
        Commands::Config(args) => commands::config(&container, args),
        Commands::Clean => commands::clean(&container),
    }
}
