//! File metadata inspection

use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::TrimlyConfig;
use crate::error::TrimlyResult;
use crate::probe::FileInfo;
use crate::utils::path::{display_extension, dotted_extension};
use crate::utils::Utils;

/// Reads file metadata against the supported format set
pub struct FileInspector<'a> {
    config: &'a TrimlyConfig,
}

impl<'a> FileInspector<'a> {
    pub fn new(config: &'a TrimlyConfig) -> Self {
        Self { config }
    }

    /// Inspect `path`. A missing path is reported, not an error.
    pub fn inspect(&self, path: &Path) -> TrimlyResult<FileInfo> {
        if !path.exists() {
            debug!("Inspected missing path {}", path.display());
            return Ok(FileInfo::missing());
        }

        let metadata = std::fs::metadata(path)?;
        let size = metadata.len();
        let modified = metadata.modified().ok().map(DateTime::<Utc>::from);

        Ok(FileInfo {
            exists: true,
            name: path.file_name().map(|n| n.to_string_lossy().to_string()),
            size: Some(size),
            size_formatted: Some(Utils::format_file_size(size)),
            extension: Some(display_extension(path)),
            is_supported: Some(
                metadata.is_file() && self.config.is_supported_format(&dotted_extension(path)),
            ),
            modified,
        })
    }
}
