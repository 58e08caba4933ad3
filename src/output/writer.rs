//! Temp directory holding produced files

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::error::{TrimlyError, TrimlyResult};

/// Directory outputs are written to
#[derive(Debug, Clone)]
pub struct OutputDirectory {
    path: PathBuf,
}

/// Summary of a cleaning pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    pub removed_files: usize,
    pub removed_bytes: u64,
    pub failed: usize,
}

impl OutputDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the directory and its parents if absent
    pub fn ensure(&self) -> TrimlyResult<()> {
        std::fs::create_dir_all(&self.path).map_err(|e| {
            TrimlyError::Unexpected(format!(
                "Failed to create temporary directory {}: {}",
                self.path.display(),
                e
            ))
        })?;
        debug!("Temp directory ready: {}", self.path.display());
        Ok(())
    }

    /// Remove every regular file directly inside the directory.
    ///
    /// Subdirectories are left alone. A missing directory is already clean.
    pub fn clean(&self) -> TrimlyResult<CleanReport> {
        let mut report = CleanReport::default();
        if !self.path.exists() {
            return Ok(report);
        }

        for entry in WalkDir::new(&self.path).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| TrimlyError::Unexpected(e.to_string()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            match std::fs::remove_file(entry.path()) {
                Ok(()) => {
                    report.removed_files += 1;
                    report.removed_bytes += size;
                }
                Err(e) => {
                    warn!("Could not remove {}: {}", entry.path().display(), e);
                    report.failed += 1;
                }
            }
        }

        info!(
            removed_files = report.removed_files,
            removed_bytes = report.removed_bytes,
            "Cleaned temp directory {}",
            self.path.display()
        );
        Ok(report)
    }
}
