//! Error handling module for Trimly

use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

/// Main error type for Trimly operations
#[derive(Error, Debug)]
pub enum TrimlyError {
    /// External audio tool missing, failing or hanging on its version query
    #[error("FFmpeg is not installed or not found in system PATH. Details: {cause}")]
    ToolUnavailable { cause: String },

    /// Input path does not exist
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Input path exists but is not a regular file
    #[error("Path is not a file: {}", path.display())]
    NotAFile { path: PathBuf },

    /// Input extension is not in the supported set
    #[error("Unsupported file format: {extension}. Supported formats: {supported}")]
    UnsupportedFormat { extension: String, supported: String },

    /// Input exceeds the configured size ceiling
    #[error("File too large: {size_mb:.1} MB exceeds the {limit_mb:.1} MB limit")]
    FileTooLarge { size_mb: f64, limit_mb: f64 },

    /// Configuration or runtime parameters out of bounds, or malformed overrides
    #[error("{message}")]
    InvalidConfiguration { message: String },

    /// External tool did not finish in time
    #[error("Processing timed out")]
    Timeout { after: Duration },

    /// External tool failed or produced nothing
    #[error("Failed to process audio: {message}")]
    ProcessingFailed { message: String },

    /// Anything else
    #[error("Unexpected error: {0}")]
    Unexpected(String),

    /// I/O error
    #[error("Unexpected error: {0}")]
    Io(#[from] std::io::Error),
}

/// Closed set of failure kinds surfaced to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ToolUnavailable,
    FileNotFound,
    NotAFile,
    UnsupportedFormat,
    FileTooLarge,
    InvalidConfiguration,
    Timeout,
    ProcessingFailed,
    Unexpected,
}

impl TrimlyError {
    /// Build a configuration error out of collected bound violations
    pub fn from_violations(violations: &[String]) -> Self {
        let lines: Vec<String> = violations.iter().map(|v| format!("- {}", v)).collect();
        TrimlyError::InvalidConfiguration {
            message: format!("Configuration validation failed:\n{}", lines.join("\n")),
        }
    }

    /// Configuration error with a single free-form message
    pub fn invalid_config(message: impl Into<String>) -> Self {
        TrimlyError::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Processing failure with a free-form message
    pub fn processing_failed(message: impl Into<String>) -> Self {
        TrimlyError::ProcessingFailed {
            message: message.into(),
        }
    }

    /// Kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TrimlyError::ToolUnavailable { .. } => ErrorKind::ToolUnavailable,
            TrimlyError::FileNotFound { .. } => ErrorKind::FileNotFound,
            TrimlyError::NotAFile { .. } => ErrorKind::NotAFile,
            TrimlyError::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            TrimlyError::FileTooLarge { .. } => ErrorKind::FileTooLarge,
            TrimlyError::InvalidConfiguration { .. } => ErrorKind::InvalidConfiguration,
            TrimlyError::Timeout { .. } => ErrorKind::Timeout,
            TrimlyError::ProcessingFailed { .. } => ErrorKind::ProcessingFailed,
            TrimlyError::Unexpected(_) | TrimlyError::Io(_) => ErrorKind::Unexpected,
        }
    }
}

/// Result type alias for Trimly operations
pub type TrimlyResult<T> = std::result::Result<T, TrimlyError>;
