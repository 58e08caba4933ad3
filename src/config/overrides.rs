//! Partial configuration layered on top of the defaults

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::TrimlyConfig;
use crate::error::{TrimlyError, TrimlyResult};

/// Environment variable names
pub mod env {
    pub const TEMP_DIRECTORY: &str = "TRIMLY_TEMP_DIRECTORY";
    pub const FILE_PREFIX: &str = "TRIMLY_FILE_PREFIX";
    pub const SILENCE_THRESHOLD_DB: &str = "TRIMLY_SILENCE_THRESHOLD_DB";
    pub const MIN_SILENCE_DURATION: &str = "TRIMLY_MIN_SILENCE_DURATION";
    pub const KEEP_START_DURATION: &str = "TRIMLY_KEEP_START_DURATION";
    pub const MIN_SILENCE_DB: &str = "TRIMLY_MIN_SILENCE_DB";
    pub const MAX_SILENCE_DB: &str = "TRIMLY_MAX_SILENCE_DB";
    pub const MIN_SILENCE_DUR: &str = "TRIMLY_MIN_SILENCE_DUR";
    pub const MAX_SILENCE_DUR: &str = "TRIMLY_MAX_SILENCE_DUR";
    pub const MAX_FILE_SIZE_MB: &str = "TRIMLY_MAX_FILE_SIZE_MB";
    pub const TIMEOUT_SECONDS: &str = "TRIMLY_TIMEOUT_SECONDS";
    pub const FFMPEG_PATH: &str = "TRIMLY_FFMPEG_PATH";
}

/// Configuration values that replace the current ones when set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub temp_directory: Option<PathBuf>,
    pub processed_file_prefix: Option<String>,
    pub supported_audio_formats: Option<BTreeSet<String>>,
    pub default_silence_threshold_db: Option<f64>,
    pub default_min_silence_duration_seconds: Option<f64>,
    pub default_start_silence_keep_duration_seconds: Option<f64>,
    pub min_silence_threshold_db: Option<f64>,
    pub max_silence_threshold_db: Option<f64>,
    pub min_processing_silence_duration_seconds: Option<f64>,
    pub max_processing_silence_duration_seconds: Option<f64>,
    pub max_input_file_size_mb: Option<f64>,
    pub processing_operation_timeout_seconds: Option<u64>,
    pub tool_check_timeout_seconds: Option<u64>,
    pub ffmpeg_binary: Option<String>,
    pub ffmpeg_silence_filter_template: Option<String>,
}

impl ConfigOverrides {
    /// Read overrides through `lookup`, keyed by `TRIMLY_*` variable names
    pub fn from_lookup<F>(lookup: F) -> TrimlyResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            temp_directory: lookup(env::TEMP_DIRECTORY).map(PathBuf::from),
            processed_file_prefix: lookup(env::FILE_PREFIX),
            supported_audio_formats: None,
            default_silence_threshold_db: parse_float(&lookup, env::SILENCE_THRESHOLD_DB)?,
            default_min_silence_duration_seconds: parse_float(&lookup, env::MIN_SILENCE_DURATION)?,
            default_start_silence_keep_duration_seconds: parse_float(
                &lookup,
                env::KEEP_START_DURATION,
            )?,
            min_silence_threshold_db: parse_float(&lookup, env::MIN_SILENCE_DB)?,
            max_silence_threshold_db: parse_float(&lookup, env::MAX_SILENCE_DB)?,
            min_processing_silence_duration_seconds: parse_float(&lookup, env::MIN_SILENCE_DUR)?,
            max_processing_silence_duration_seconds: parse_float(&lookup, env::MAX_SILENCE_DUR)?,
            max_input_file_size_mb: parse_float(&lookup, env::MAX_FILE_SIZE_MB)?,
            processing_operation_timeout_seconds: parse_int(&lookup, env::TIMEOUT_SECONDS)?,
            tool_check_timeout_seconds: None,
            ffmpeg_binary: lookup(env::FFMPEG_PATH),
            ffmpeg_silence_filter_template: None,
        })
    }

    /// Combine two layers; values set in `higher` win
    pub fn merge(self, higher: ConfigOverrides) -> Self {
        Self {
            temp_directory: higher.temp_directory.or(self.temp_directory),
            processed_file_prefix: higher.processed_file_prefix.or(self.processed_file_prefix),
            supported_audio_formats: higher
                .supported_audio_formats
                .or(self.supported_audio_formats),
            default_silence_threshold_db: higher
                .default_silence_threshold_db
                .or(self.default_silence_threshold_db),
            default_min_silence_duration_seconds: higher
                .default_min_silence_duration_seconds
                .or(self.default_min_silence_duration_seconds),
            default_start_silence_keep_duration_seconds: higher
                .default_start_silence_keep_duration_seconds
                .or(self.default_start_silence_keep_duration_seconds),
            min_silence_threshold_db: higher
                .min_silence_threshold_db
                .or(self.min_silence_threshold_db),
            max_silence_threshold_db: higher
                .max_silence_threshold_db
                .or(self.max_silence_threshold_db),
            min_processing_silence_duration_seconds: higher
                .min_processing_silence_duration_seconds
                .or(self.min_processing_silence_duration_seconds),
            max_processing_silence_duration_seconds: higher
                .max_processing_silence_duration_seconds
                .or(self.max_processing_silence_duration_seconds),
            max_input_file_size_mb: higher.max_input_file_size_mb.or(self.max_input_file_size_mb),
            processing_operation_timeout_seconds: higher
                .processing_operation_timeout_seconds
                .or(self.processing_operation_timeout_seconds),
            tool_check_timeout_seconds: higher
                .tool_check_timeout_seconds
                .or(self.tool_check_timeout_seconds),
            ffmpeg_binary: higher.ffmpeg_binary.or(self.ffmpeg_binary),
            ffmpeg_silence_filter_template: higher
                .ffmpeg_silence_filter_template
                .or(self.ffmpeg_silence_filter_template),
        }
    }

    /// Write every set value into `config`
    pub fn apply_to(&self, config: &mut TrimlyConfig) {
        if let Some(v) = &self.temp_directory {
            config.temp_directory = v.clone();
        }
        if let Some(v) = &self.processed_file_prefix {
            config.processed_file_prefix = v.clone();
        }
        if let Some(v) = &self.supported_audio_formats {
            config.supported_audio_formats = v.iter().map(|f| normalize_format(f)).collect();
        }
        if let Some(v) = self.default_silence_threshold_db {
            config.default_silence_threshold_db = v;
        }
        if let Some(v) = self.default_min_silence_duration_seconds {
            config.default_min_silence_duration_seconds = v;
        }
        if let Some(v) = self.default_start_silence_keep_duration_seconds {
            config.default_start_silence_keep_duration_seconds = v;
        }
        if let Some(v) = self.min_silence_threshold_db {
            config.min_silence_threshold_db = v;
        }
        if let Some(v) = self.max_silence_threshold_db {
            config.max_silence_threshold_db = v;
        }
        if let Some(v) = self.min_processing_silence_duration_seconds {
            config.min_processing_silence_duration_seconds = v;
        }
        if let Some(v) = self.max_processing_silence_duration_seconds {
            config.max_processing_silence_duration_seconds = v;
        }
        if let Some(v) = self.max_input_file_size_mb {
            config.max_input_file_size_mb = v;
        }
        if let Some(v) = self.processing_operation_timeout_seconds {
            config.processing_operation_timeout_seconds = v;
        }
        if let Some(v) = self.tool_check_timeout_seconds {
            config.tool_check_timeout_seconds = v;
        }
        if let Some(v) = &self.ffmpeg_binary {
            config.ffmpeg_binary = v.clone();
        }
        if let Some(v) = &self.ffmpeg_silence_filter_template {
            config.ffmpeg_silence_filter_template = v.clone();
        }
    }

    /// Number of values this layer sets
    pub fn count(&self) -> usize {
        [
            self.temp_directory.is_some(),
            self.processed_file_prefix.is_some(),
            self.supported_audio_formats.is_some(),
            self.default_silence_threshold_db.is_some(),
            self.default_min_silence_duration_seconds.is_some(),
            self.default_start_silence_keep_duration_seconds.is_some(),
            self.min_silence_threshold_db.is_some(),
            self.max_silence_threshold_db.is_some(),
            self.min_processing_silence_duration_seconds.is_some(),
            self.max_processing_silence_duration_seconds.is_some(),
            self.max_input_file_size_mb.is_some(),
            self.processing_operation_timeout_seconds.is_some(),
            self.tool_check_timeout_seconds.is_some(),
            self.ffmpeg_binary.is_some(),
            self.ffmpeg_silence_filter_template.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}

/// `MP3` / `.Mp3` -> `.mp3`
fn normalize_format(format: &str) -> String {
    let lower = format.trim().to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{}", lower)
    }
}

fn parse_float<F>(lookup: &F, var: &str) -> TrimlyResult<Option<f64>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value.trim().parse::<f64>().map(Some).map_err(|_| {
            TrimlyError::invalid_config(format!("Invalid float value for {}: {}", var, value))
        }),
    }
}

fn parse_int<F>(lookup: &F, var: &str) -> TrimlyResult<Option<u64>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => value.trim().parse::<u64>().map(Some).map_err(|_| {
            TrimlyError::invalid_config(format!("Invalid integer value for {}: {}", var, value))
        }),
    }
}
