// Inspect interactor - File inspection and temp directory housekeeping

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::config::TrimlyConfig;
use crate::error::TrimlyResult;
use crate::output::{CleanReport, OutputDirectory};
use crate::probe::{FileInfo, FileInspector};

/// Interactor for the operations that never run the external tool
pub struct InspectInteractor {
    config: Arc<TrimlyConfig>,
    temp_dir: OutputDirectory,
}

impl InspectInteractor {
    pub fn new(config: Arc<TrimlyConfig>) -> Self {
        let temp_dir = OutputDirectory::new(config.temp_directory.clone());
        Self { config, temp_dir }
    }

    /// Metadata for `path`; a missing path yields `exists: false`
    pub fn inspect_file(&self, path: &Path) -> TrimlyResult<FileInfo> {
        info!("Inspecting file: {}", path.display());
        FileInspector::new(&self.config).inspect(path)
    }

    /// Remove every file left in the temp directory
    pub fn clean_temp_dir(&self) -> TrimlyResult<CleanReport> {
        self.temp_dir.clean()
    }

    pub fn temp_dir(&self) -> &OutputDirectory {
        &self.temp_dir
    }
}
