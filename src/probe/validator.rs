//! Input file validation

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::TrimlyConfig;
use crate::error::{TrimlyError, TrimlyResult};
use crate::utils::path::{display_extension, dotted_extension};

/// Check that `path` is an existing regular file with a supported extension,
/// no larger than the configured ceiling.
pub fn validate_audio_file(path: impl AsRef<Path>, config: &TrimlyConfig) -> TrimlyResult<PathBuf> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(TrimlyError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(TrimlyError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    if !config.is_supported_format(&dotted_extension(path)) {
        let extension = display_extension(path);
        return Err(TrimlyError::UnsupportedFormat {
            extension: if extension.is_empty() {
                "(none)".to_string()
            } else {
                extension
            },
            supported: config.supported_formats_list(),
        });
    }

    if metadata.len() > config.max_input_file_size_bytes() {
        return Err(TrimlyError::FileTooLarge {
            size_mb: metadata.len() as f64 / (1024.0 * 1024.0),
            limit_mb: config.max_input_file_size_mb,
        });
    }

    debug!("Validated input {} ({} bytes)", path.display(), metadata.len());
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_supported_file_passes() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "voice.mp3", b"ID3");
        let validated = validate_audio_file(&path, &TrimlyConfig::default()).unwrap();
        assert_eq!(validated, path);
    }

    #[test]
    fn test_extension_match_ignores_case() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "Voice.FLAC", b"fLaC");
        assert!(validate_audio_file(&path, &TrimlyConfig::default()).is_ok());
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = validate_audio_file(dir.path().join("nope.mp3"), &TrimlyConfig::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert!(err.to_string().starts_with("File not found: "));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("album.mp3");
        std::fs::create_dir(&sub).unwrap();
        let err = validate_audio_file(&sub, &TrimlyConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotAFile);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "notes.TXT", b"hello");
        let err = validate_audio_file(&path, &TrimlyConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
        assert_eq!(
            err.to_string(),
            "Unsupported file format: .TXT. Supported formats: .flac, .m4a, .mp3, .ogg, .wav"
        );
    }

    #[test]
    fn test_missing_extension() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "voice", b"data");
        let err = validate_audio_file(&path, &TrimlyConfig::default()).unwrap_err();
        assert!(err.to_string().starts_with("Unsupported file format: (none)."));
    }

    #[test]
    fn test_file_over_size_limit() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "voice.wav", &[0u8; 2048]);
        let config = TrimlyConfig {
            max_input_file_size_mb: 0.001,
            ..TrimlyConfig::default()
        };
        let err = validate_audio_file(&path, &config).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileTooLarge);
    }
}
