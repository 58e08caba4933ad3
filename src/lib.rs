//! Trimly Library
//!
//! Removes leading, trailing and internal silence from audio files by running
//! FFmpeg's `silenceremove` filter as a subprocess.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod config_initialization;
pub mod domain;
pub mod engine;
pub mod error;
pub mod output;
pub mod ports;
pub mod probe;
pub mod utils;

// Re-export commonly used types
pub use app::{AppContainer, TrimInteractor};
pub use config::{ConfigStore, TrimlyConfig};
pub use domain::model::{OutputNaming, SilenceParameters, TrimOutcome, TrimRequest};
pub use error::{ErrorKind, TrimlyError, TrimlyResult};
