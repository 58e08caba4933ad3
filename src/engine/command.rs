//! FFmpeg command builder

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::model::ToolInvocation;

/// Builder for FFmpeg commands.
#[derive(Debug, Clone)]
pub struct FfmpegCommand {
    /// Binary to run
    program: String,
    /// Input file path
    input: PathBuf,
    /// Output file path
    output: PathBuf,
    /// Output arguments (after -i)
    output_args: Vec<String>,
}

impl FfmpegCommand {
    /// Create a new FFmpeg command.
    pub fn new(program: impl Into<String>, input: impl AsRef<Path>, output: impl AsRef<Path>) -> Self {
        Self {
            program: program.into(),
            input: input.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
            output_args: Vec::new(),
        }
    }

    /// Add an output argument (after -i).
    pub fn output_arg(mut self, arg: impl Into<String>) -> Self {
        self.output_args.push(arg.into());
        self
    }

    /// Set audio filter.
    pub fn audio_filter(self, filter: impl Into<String>) -> Self {
        self.output_arg("-af").output_arg(filter)
    }

    /// Build the command arguments.
    pub fn build_args(&self) -> Vec<OsString> {
        // Overwrite without prompting
        let mut args = vec![OsString::from("-y")];

        args.push(OsString::from("-i"));
        args.push(self.input.clone().into_os_string());

        args.extend(self.output_args.iter().map(OsString::from));

        args.push(self.output.clone().into_os_string());

        args
    }

    /// Finish into a runnable invocation.
    pub fn build(&self) -> ToolInvocation {
        ToolInvocation::new(self.program.clone(), self.build_args())
    }
}

/// `<tool> -y -i <input> -af <filter> <output>`
pub fn silence_removal_command(
    program: &str,
    input: &Path,
    output: &Path,
    filter: &str,
) -> ToolInvocation {
    FfmpegCommand::new(program, input, output)
        .audio_filter(filter)
        .build()
}

/// `<tool> -version`
pub fn version_query(program: &str) -> ToolInvocation {
    ToolInvocation::new(program, ["-version"])
}
