// Domain models - Core types and data structures

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Serialize;

use crate::error::{ErrorKind, TrimlyError};

/// Resolved silence-removal parameters for one request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SilenceParameters {
    /// Level below which audio counts as silence (dB)
    pub threshold_db: f64,
    /// Minimum length of a quiet stretch before it is trimmed (seconds)
    pub min_silence_secs: f64,
    /// Leading silence kept before the first detected sound (seconds)
    pub start_silence_secs: f64,
}

/// How the output file is named inside the temp directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputNaming {
    /// `{stem}{format}`; an existing file with the same name is overwritten
    #[default]
    Stem,
    /// `{prefix}{stem}-{id}{format}`; safe for concurrent requests sharing a stem
    Unique,
}

/// Request for trimming silence out of one file
///
/// Parameters left as `None` take the configured defaults. An explicit
/// `Some(0.0)` is kept as is and goes through bound validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrimRequest {
    pub input: Option<PathBuf>,
    pub threshold_db: Option<f64>,
    pub min_silence_secs: Option<f64>,
    pub start_silence_secs: Option<f64>,
    pub naming: OutputNaming,
}

impl TrimRequest {
    /// Create a request for the given input file
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: Some(input.into()),
            ..Self::default()
        }
    }

    /// Request without any input file
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_threshold(mut self, threshold_db: f64) -> Self {
        self.threshold_db = Some(threshold_db);
        self
    }

    pub fn with_min_silence(mut self, secs: f64) -> Self {
        self.min_silence_secs = Some(secs);
        self
    }

    pub fn with_start_silence(mut self, secs: f64) -> Self {
        self.start_silence_secs = Some(secs);
        self
    }

    pub fn with_naming(mut self, naming: OutputNaming) -> Self {
        self.naming = naming;
        self
    }

    /// Fill unset parameters from `defaults`
    pub fn resolve(&self, defaults: &SilenceParameters) -> SilenceParameters {
        SilenceParameters {
            threshold_db: self.threshold_db.unwrap_or(defaults.threshold_db),
            min_silence_secs: self.min_silence_secs.unwrap_or(defaults.min_silence_secs),
            start_silence_secs: self
                .start_silence_secs
                .unwrap_or(defaults.start_silence_secs),
        }
    }
}

/// Result handed back to the UI layer: a message and, on success, the output path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrimOutcome {
    pub message: String,
    pub output_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl TrimOutcome {
    /// Successful trim producing `output_path`
    pub fn success(output_path: PathBuf) -> Self {
        let name = output_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            message: format!("Successfully trimmed: {}", name),
            output_path: Some(output_path),
            error_kind: None,
        }
    }

    /// Failed trim; the error text becomes the message
    pub fn failure(error: &TrimlyError) -> Self {
        Self {
            message: error.to_string(),
            output_path: None,
            error_kind: Some(error.kind()),
        }
    }

    /// Nothing to process
    pub fn no_file() -> Self {
        Self {
            message: "No file provided".to_string(),
            output_path: None,
            error_kind: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.output_path.is_some()
    }

    /// `(message, output path)` pair as shown by the UI
    pub fn into_pair(self) -> (String, Option<String>) {
        let path = self
            .output_path
            .map(|p| p.to_string_lossy().to_string());
        (self.message, path)
    }
}

/// A fully built external tool command line
///
/// Arguments are OS strings so file paths reach the tool byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<OsString>,
}

impl ToolInvocation {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Value following `flag`, if present
    pub fn arg_after(&self, flag: &str) -> Option<&OsStr> {
        self.args
            .iter()
            .position(|a| a == flag)
            .and_then(|i| self.args.get(i + 1))
            .map(OsString::as_os_str)
    }

    /// Last argument, which is the output path for FFmpeg invocations
    pub fn output(&self) -> Option<&Path> {
        self.args.last().map(Path::new)
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// What the external tool did
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionReport {
    /// Exit code; `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
    pub elapsed: Duration,
}

impl ExecutionReport {
    /// Captured error output, or a generic text when the tool printed nothing
    pub fn error_text(&self) -> String {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            "Unknown FFmpeg error".to_string()
        } else {
            stderr.to_string()
        }
    }
}
