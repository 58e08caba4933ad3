//! Command-line argument definitions

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::domain::model::{OutputNaming, TrimRequest};

/// Arguments for the trim command
#[derive(Args, Debug, Clone)]
pub struct TrimArgs {
    /// Input audio file path
    pub input: PathBuf,

    /// Silence threshold in dB (default from configuration)
    #[arg(long, allow_negative_numbers = true)]
    pub threshold: Option<f64>,

    /// Minimum silence duration in seconds
    #[arg(long)]
    pub min_silence: Option<f64>,

    /// Leading silence to keep in seconds
    #[arg(long)]
    pub start_silence: Option<f64>,

    /// Give the output a unique name instead of overwriting
    #[arg(long)]
    pub unique_output: bool,

    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

impl TrimArgs {
    pub fn to_request(&self) -> TrimRequest {
        TrimRequest {
            input: Some(self.input.clone()),
            threshold_db: self.threshold,
            min_silence_secs: self.min_silence,
            start_silence_secs: self.start_silence,
            naming: if self.unique_output {
                OutputNaming::Unique
            } else {
                OutputNaming::Stem
            },
        }
    }
}

/// Arguments for the info command
#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// File to inspect
    pub input: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the config command
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "toml")]
    pub format: ConfigFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Toml,
    Json,
}
