//! Output naming, verification and temp directory management

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::config::OUTPUT_AUDIO_FORMAT;
use crate::domain::model::OutputNaming;
use crate::error::{TrimlyError, TrimlyResult};

pub mod verifier;
pub mod writer;

pub use verifier::verify_output;
pub use writer::{CleanReport, OutputDirectory};

/// Naming scheme for produced files
#[derive(Debug, Clone)]
pub struct OutputNamer {
    /// Directory outputs are written to
    pub directory: PathBuf,
    /// Prefix for unique names
    pub prefix: String,
}

impl OutputNamer {
    pub fn new(directory: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            prefix: prefix.into(),
        }
    }

    /// Output path for `input`.
    ///
    /// Outputs are always `.wav`, whatever the input extension.
    /// `Stem` gives `{dir}/{stem}.wav`, `Unique` gives `{dir}/{prefix}{stem}-{id}.wav`.
    pub fn output_path(&self, input: &Path, naming: OutputNaming) -> TrimlyResult<PathBuf> {
        // stem is kept as OsStr so non-UTF-8 names survive
        let stem = input.file_stem().ok_or_else(|| {
            TrimlyError::Unexpected(format!("Input path has no file name: {}", input.display()))
        })?;

        let mut file_name = OsString::new();
        match naming {
            OutputNaming::Stem => file_name.push(stem),
            OutputNaming::Unique => {
                let id = Uuid::new_v4().simple().to_string();
                file_name.push(&self.prefix);
                file_name.push(stem);
                file_name.push(format!("-{}", &id[..8]));
            }
        }
        file_name.push(OUTPUT_AUDIO_FORMAT);
        Ok(self.directory.join(file_name))
    }
}
