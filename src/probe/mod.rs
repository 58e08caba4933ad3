//! Input file validation and inspection module

use chrono::{DateTime, Utc};
use serde::Serialize;

pub mod inspector;
pub mod validator;

pub use inspector::FileInspector;
pub use validator::validate_audio_file;

/// Metadata about a candidate input file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileInfo {
    /// Whether the path exists
    pub exists: bool,
    /// File name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Human-readable size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_formatted: Option<String>,
    /// Extension as written, with leading dot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Whether the extension is in the supported set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_supported: Option<bool>,
    /// Last modification time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

impl FileInfo {
    /// Info for a path that does not exist
    pub fn missing() -> Self {
        Self {
            exists: false,
            name: None,
            size: None,
            size_formatted: None,
            extension: None,
            is_supported: None,
            modified: None,
        }
    }
}
