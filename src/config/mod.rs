//! Configuration for Trimly
//!
//! [`TrimlyConfig`] is an immutable value: built from compiled-in defaults,
//! optionally layered with [`ConfigOverrides`] (file, environment, CLI) and
//! validated before use. [`ConfigStore`] owns the lazily built instance.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::model::SilenceParameters;
use crate::domain::rules::{Bounds, BoundsCheck, Unit};
use crate::error::{TrimlyError, TrimlyResult};
use crate::utils::path::absolutize;

pub mod overrides;
pub mod store;

pub use overrides::ConfigOverrides;
pub use store::ConfigStore;

// File and directory configuration
pub const DEFAULT_TEMP_DIRECTORY: &str = "storage/tmp";
pub const PROCESSED_FILE_PREFIX: &str = "trimmed_";
pub const OUTPUT_AUDIO_FORMAT: &str = ".wav";
pub const SUPPORTED_AUDIO_FORMATS: [&str; 5] = [".mp3", ".wav", ".m4a", ".flac", ".ogg"];

// Audio processing defaults
pub const DEFAULT_SILENCE_THRESHOLD_DB: f64 = -45.0;
pub const DEFAULT_MIN_SILENCE_DURATION_SECONDS: f64 = 0.05;
pub const DEFAULT_START_SILENCE_KEEP_DURATION_SECONDS: f64 = 0.1;

// Processing limits and validation ranges
pub const MIN_SILENCE_THRESHOLD_DB: f64 = -100.0;
pub const MAX_SILENCE_THRESHOLD_DB: f64 = 0.0;
pub const MIN_PROCESSING_SILENCE_DURATION_SECONDS: f64 = 0.001;
pub const MAX_PROCESSING_SILENCE_DURATION_SECONDS: f64 = 10.0;
pub const MAX_INPUT_FILE_SIZE_MB: f64 = 200.0;
pub const PROCESSING_OPERATION_TIMEOUT_SECONDS: u64 = 300;
pub const TOOL_CHECK_TIMEOUT_SECONDS: u64 = 10;

// External tool
pub const DEFAULT_FFMPEG_BINARY: &str = "ffmpeg";
pub const FFMPEG_SILENCE_FILTER_TEMPLATE: &str = "silenceremove=start_periods=1:start_silence={start_silence}:start_threshold={threshold}dB:stop_periods=-1:stop_silence={min_silence}:stop_threshold={threshold}dB:detection=peak";

/// Configuration settings for Trimly
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimlyConfig {
    // Directory and file settings
    pub temp_directory: PathBuf,
    pub processed_file_prefix: String,
    pub supported_audio_formats: BTreeSet<String>,

    // Audio processing defaults
    pub default_silence_threshold_db: f64,
    pub default_min_silence_duration_seconds: f64,
    pub default_start_silence_keep_duration_seconds: f64,

    // Operational limits
    pub max_input_file_size_mb: f64,
    pub processing_operation_timeout_seconds: u64,
    pub tool_check_timeout_seconds: u64,

    // Validation ranges
    pub min_silence_threshold_db: f64,
    pub max_silence_threshold_db: f64,
    pub min_processing_silence_duration_seconds: f64,
    pub max_processing_silence_duration_seconds: f64,

    // External tool
    pub ffmpeg_binary: String,
    pub ffmpeg_silence_filter_template: String,
}

impl Default for TrimlyConfig {
    fn default() -> Self {
        Self {
            temp_directory: absolutize(DEFAULT_TEMP_DIRECTORY),
            processed_file_prefix: PROCESSED_FILE_PREFIX.to_string(),
            supported_audio_formats: SUPPORTED_AUDIO_FORMATS
                .iter()
                .map(|f| f.to_string())
                .collect(),
            default_silence_threshold_db: DEFAULT_SILENCE_THRESHOLD_DB,
            default_min_silence_duration_seconds: DEFAULT_MIN_SILENCE_DURATION_SECONDS,
            default_start_silence_keep_duration_seconds:
                DEFAULT_START_SILENCE_KEEP_DURATION_SECONDS,
            max_input_file_size_mb: MAX_INPUT_FILE_SIZE_MB,
            processing_operation_timeout_seconds: PROCESSING_OPERATION_TIMEOUT_SECONDS,
            tool_check_timeout_seconds: TOOL_CHECK_TIMEOUT_SECONDS,
            min_silence_threshold_db: MIN_SILENCE_THRESHOLD_DB,
            max_silence_threshold_db: MAX_SILENCE_THRESHOLD_DB,
            min_processing_silence_duration_seconds: MIN_PROCESSING_SILENCE_DURATION_SECONDS,
            max_processing_silence_duration_seconds: MAX_PROCESSING_SILENCE_DURATION_SECONDS,
            ffmpeg_binary: DEFAULT_FFMPEG_BINARY.to_string(),
            ffmpeg_silence_filter_template: FFMPEG_SILENCE_FILTER_TEMPLATE.to_string(),
        }
    }
}

impl TrimlyConfig {
    /// Defaults overridden by `TRIMLY_*` environment variables
    pub fn from_env() -> TrimlyResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by values from `lookup`, keyed like the environment
    pub fn from_lookup<F>(lookup: F) -> TrimlyResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let overrides = ConfigOverrides::from_lookup(lookup)?;
        Ok(Self::default().with_overrides(&overrides))
    }

    /// Copy of this configuration with every set override applied
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        overrides.apply_to(&mut self);
        self.temp_directory = absolutize(&self.temp_directory);
        self
    }

    /// Validate the configured defaults against their ranges
    pub fn validate(&self) -> TrimlyResult<()> {
        self.validate_with(None, None, None)
    }

    /// Validate the configured defaults and any supplied runtime parameters.
    ///
    /// Every violation is reported in a single error.
    pub fn validate_with(
        &self,
        threshold: Option<f64>,
        min_silence: Option<f64>,
        start_silence: Option<f64>,
    ) -> TrimlyResult<()> {
        let durations = self.duration_bounds();
        let decibels = self.threshold_bounds();

        let mut check = BoundsCheck::new();
        check
            .check(
                "Default start silence keep duration",
                self.default_start_silence_keep_duration_seconds,
                Unit::Seconds,
                durations,
            )
            .check(
                "Default minimum silence duration",
                self.default_min_silence_duration_seconds,
                Unit::Seconds,
                durations,
            )
            .check(
                "Default silence threshold",
                self.default_silence_threshold_db,
                Unit::Decibels,
                decibels,
            )
            .check_positive(
                "Maximum input file size",
                self.max_input_file_size_mb,
                Unit::Megabytes,
            )
            .check_positive(
                "Processing timeout",
                self.processing_operation_timeout_seconds as f64,
                Unit::Seconds,
            )
            .check_positive(
                "Tool check timeout",
                self.tool_check_timeout_seconds as f64,
                Unit::Seconds,
            )
            .check_opt("Silence threshold", threshold, Unit::Decibels, decibels)
            .check_opt("Minimum silence duration", min_silence, Unit::Seconds, durations)
            .check_opt("Start silence duration", start_silence, Unit::Seconds, durations);

        if check.is_ok() {
            Ok(())
        } else {
            Err(TrimlyError::from_violations(check.violations()))
        }
    }

    /// Parameters used when a request leaves them unset
    pub fn default_parameters(&self) -> SilenceParameters {
        SilenceParameters {
            threshold_db: self.default_silence_threshold_db,
            min_silence_secs: self.default_min_silence_duration_seconds,
            start_silence_secs: self.default_start_silence_keep_duration_seconds,
        }
    }

    pub fn threshold_bounds(&self) -> Bounds {
        Bounds::new(self.min_silence_threshold_db, self.max_silence_threshold_db)
    }

    pub fn duration_bounds(&self) -> Bounds {
        Bounds::new(
            self.min_processing_silence_duration_seconds,
            self.max_processing_silence_duration_seconds,
        )
    }

    pub fn processing_timeout(&self) -> Duration {
        Duration::from_secs(self.processing_operation_timeout_seconds)
    }

    pub fn tool_check_timeout(&self) -> Duration {
        Duration::from_secs(self.tool_check_timeout_seconds)
    }

    /// Size ceiling in bytes
    pub fn max_input_file_size_bytes(&self) -> u64 {
        (self.max_input_file_size_mb * 1024.0 * 1024.0) as u64
    }

    /// Whether `extension` (with leading dot, any case) is accepted
    pub fn is_supported_format(&self, extension: &str) -> bool {
        self.supported_audio_formats
            .contains(&extension.to_lowercase())
    }

    /// Supported formats as a comma separated list
    pub fn supported_formats_list(&self) -> String {
        self.supported_audio_formats
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = TrimlyConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.temp_directory.is_absolute());
        assert_eq!(config.supported_audio_formats.len(), 5);
    }

    #[test]
    fn test_default_outside_bounds_fails() {
        let config = TrimlyConfig {
            default_silence_threshold_db: 3.0,
            ..TrimlyConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::InvalidConfiguration);
        assert!(err
            .to_string()
            .contains("Default silence threshold (3 dB) must be between -100 dB and 0 dB."));
    }

    #[test]
    fn test_all_violations_reported_together() {
        let config = TrimlyConfig {
            default_min_silence_duration_seconds: 0.0,
            default_start_silence_keep_duration_seconds: 11.0,
            ..TrimlyConfig::default()
        };
        let message = config
            .validate_with(Some(5.0), None, Some(-1.0))
            .unwrap_err()
            .to_string();
        assert!(message.starts_with("Configuration validation failed:\n"));
        assert_eq!(message.lines().filter(|l| l.starts_with("- ")).count(), 4);
        assert!(message.contains("Default start silence keep duration (11s)"));
        assert!(message.contains("Default minimum silence duration (0s)"));
        assert!(message.contains("Silence threshold (5 dB)"));
        assert!(message.contains("Start silence duration (-1s)"));
    }

    #[test]
    fn test_non_positive_limits_fail() {
        for size in [-1.0, 0.0, f64::NAN] {
            let config = TrimlyConfig {
                max_input_file_size_mb: size,
                ..TrimlyConfig::default()
            };
            let message = config.validate().unwrap_err().to_string();
            assert!(message.contains("Maximum input file size"), "{}", message);
        }

        let config = TrimlyConfig {
            processing_operation_timeout_seconds: 0,
            tool_check_timeout_seconds: 0,
            ..TrimlyConfig::default()
        };
        let message = config.validate().unwrap_err().to_string();
        assert!(message.contains("Processing timeout (0s) must be greater than 0."));
        assert!(message.contains("Tool check timeout (0s) must be greater than 0."));
    }

    #[test]
    fn test_validate_succeeds_iff_defaults_within_bounds() {
        let cases = [
            (-45.0, 0.05, 0.1, true),
            (-100.0, 0.001, 10.0, true),
            (0.0, 10.0, 0.001, true),
            (-100.1, 0.05, 0.1, false),
            (-45.0, 10.01, 0.1, false),
            (-45.0, 0.05, 0.0009, false),
        ];
        for (threshold, min_silence, start_silence, expected) in cases {
            let config = TrimlyConfig {
                default_silence_threshold_db: threshold,
                default_min_silence_duration_seconds: min_silence,
                default_start_silence_keep_duration_seconds: start_silence,
                ..TrimlyConfig::default()
            };
            assert_eq!(
                config.validate().is_ok(),
                expected,
                "threshold={} min_silence={} start_silence={}",
                threshold,
                min_silence,
                start_silence
            );
        }
    }

    #[test]
    fn test_lookup_overrides_defaults() {
        let config = TrimlyConfig::from_lookup(lookup_from(&[
            ("TRIMLY_SILENCE_THRESHOLD_DB", "-30"),
            ("TRIMLY_MIN_SILENCE_DURATION", "0.2"),
            ("TRIMLY_KEEP_START_DURATION", "0.3"),
            ("TRIMLY_FILE_PREFIX", "clean_"),
            ("TRIMLY_MAX_SILENCE_DB", "-10"),
        ]))
        .unwrap();
        assert_eq!(config.default_silence_threshold_db, -30.0);
        assert_eq!(config.default_min_silence_duration_seconds, 0.2);
        assert_eq!(config.default_start_silence_keep_duration_seconds, 0.3);
        assert_eq!(config.processed_file_prefix, "clean_");
        assert_eq!(config.max_silence_threshold_db, -10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_relative_temp_directory_becomes_absolute() {
        let config =
            TrimlyConfig::from_lookup(lookup_from(&[("TRIMLY_TEMP_DIRECTORY", "scratch/out")]))
                .unwrap();
        assert!(config.temp_directory.is_absolute());
        assert!(config.temp_directory.ends_with("scratch/out"));
    }

    #[test]
    fn test_malformed_float_fails_fast() {
        let err = TrimlyConfig::from_lookup(lookup_from(&[("TRIMLY_MIN_SILENCE_DB", "loud")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid float value for TRIMLY_MIN_SILENCE_DB: loud"
        );
    }

    #[test]
    fn test_supported_format_check_ignores_case() {
        let config = TrimlyConfig::default();
        assert!(config.is_supported_format(".MP3"));
        assert!(config.is_supported_format(".flac"));
        assert!(!config.is_supported_format(".aiff"));
        assert!(!config.is_supported_format(""));
        assert_eq!(
            config.supported_formats_list(),
            ".flac, .m4a, .mp3, .ogg, .wav"
        );
    }

    #[test]
    fn test_limits() {
        let config = TrimlyConfig::default();
        assert_eq!(config.processing_timeout(), Duration::from_secs(300));
        assert_eq!(config.tool_check_timeout(), Duration::from_secs(10));
        assert_eq!(config.max_input_file_size_bytes(), 200 * 1024 * 1024);
    }
}
