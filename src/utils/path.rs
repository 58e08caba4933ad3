//! Path utilities

use std::path::{Path, PathBuf};

/// Resolve a relative path against the current working directory.
///
/// Falls back to the path as given when the working directory is unavailable.
pub fn absolutize(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

/// Extension with a leading dot, lowercased: `Voice.MP3` -> `.mp3`.
///
/// Empty when the file has no extension.
pub fn dotted_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}

/// Extension as written in the file name, for messages: `Voice.MP3` -> `.MP3`
pub fn display_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}
