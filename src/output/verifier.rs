//! Output verification

use std::path::Path;

use tracing::warn;

use crate::error::{TrimlyError, TrimlyResult};

/// Confirm the tool left a non-empty file at `path`; returns its size
pub fn verify_output(path: &Path) -> TrimlyResult<u64> {
    let size = std::fs::metadata(path)
        .ok()
        .filter(|m| m.is_file())
        .map(|m| m.len())
        .unwrap_or(0);

    if size == 0 {
        warn!("Output missing or empty: {}", path.display());
        return Err(TrimlyError::processing_failed("Output file missing or empty"));
    }
    Ok(size)
}
