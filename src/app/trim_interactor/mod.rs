// Trim interactor - Orchestrates the silence trimming use case

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::app::inspect_interactor::InspectInteractor;
use crate::config::TrimlyConfig;
use crate::domain::model::{SilenceParameters, TrimOutcome, TrimRequest};
use crate::engine::{build_silence_filter, silence_removal_command};
use crate::error::{TrimlyError, TrimlyResult};
use crate::output::{verify_output, CleanReport, OutputNamer};
use crate::ports::ExecutePort;
use crate::probe::{validate_audio_file, FileInfo};
use crate::utils::Utils;

/// Interactor for trimming silence from audio files
pub struct TrimInteractor {
    config: Arc<TrimlyConfig>,
    execute_port: Arc<dyn ExecutePort>,
    namer: OutputNamer,
    inspector: InspectInteractor,
}

impl TrimInteractor {
    /// Create the interactor, preparing the temp directory and confirming the
    /// external tool answers.
    pub async fn new(
        config: Arc<TrimlyConfig>,
        execute_port: Arc<dyn ExecutePort>,
    ) -> TrimlyResult<Self> {
        let inspector = InspectInteractor::new(Arc::clone(&config));
        inspector.temp_dir().ensure()?;

        execute_port
            .check_available(config.tool_check_timeout())
            .await?;
        info!("External tool available: {}", config.ffmpeg_binary);

        let namer = OutputNamer::new(
            config.temp_directory.clone(),
            config.processed_file_prefix.clone(),
        );

        Ok(Self {
            config,
            execute_port,
            namer,
            inspector,
        })
    }

    /// Check the input path; returns it unchanged when usable
    pub fn validate_file(&self, path: &Path) -> TrimlyResult<PathBuf> {
        validate_audio_file(path, &self.config)
    }

    /// Check the request's explicit parameters and the configured defaults
    pub fn validate_parameters(&self, request: &TrimRequest) -> TrimlyResult<()> {
        self.config.validate_with(
            request.threshold_db,
            request.min_silence_secs,
            request.start_silence_secs,
        )
    }

    /// Trim leading, trailing and internal silence from the request's file.
    ///
    /// Never fails: every error is folded into the returned outcome.
    pub async fn trim_audio(&self, request: TrimRequest) -> TrimOutcome {
        let input = match request.input.as_deref() {
            Some(input) => input.to_path_buf(),
            None => {
                debug!("Trim requested without a file");
                return TrimOutcome::no_file();
            }
        };

        match self.try_trim(&input, &request).await {
            Ok(output) => {
                info!("Trimmed {} -> {}", input.display(), output.display());
                TrimOutcome::success(output)
            }
            Err(e) => {
                match &e {
                    TrimlyError::Unexpected(_) | TrimlyError::Io(_) => {
                        error!("Trimming {} failed: {}", input.display(), e)
                    }
                    _ => warn!("Trimming {} failed: {}", input.display(), e),
                }
                TrimOutcome::failure(&e)
            }
        }
    }

    async fn try_trim(&self, input: &Path, request: &TrimRequest) -> TrimlyResult<PathBuf> {
        let input = self.validate_file(input)?;
        self.validate_parameters(request)?;
        let params: SilenceParameters = request.resolve(&self.config.default_parameters());

        let output = self.namer.output_path(&input, request.naming)?;
        let filter = build_silence_filter(&self.config.ffmpeg_silence_filter_template, &params);
        let invocation =
            silence_removal_command(&self.config.ffmpeg_binary, &input, &output, &filter);
        debug!("Running: {}", invocation);

        let report = self
            .execute_port
            .run(&invocation, self.config.processing_timeout())
            .await?;

        if !report.success {
            return Err(TrimlyError::processing_failed(report.error_text()));
        }

        let size = verify_output(&output)?;
        info!(
            "Produced {} ({}) in {}",
            output.display(),
            Utils::format_file_size(size),
            Utils::format_duration(report.elapsed)
        );
        Ok(output)
    }

    /// Metadata for `path`
    pub fn inspect_file(&self, path: &Path) -> TrimlyResult<FileInfo> {
        self.inspector.inspect_file(path)
    }

    /// Remove every file left in the temp directory
    pub fn clean_temp_dir(&self) -> TrimlyResult<CleanReport> {
        self.inspector.clean_temp_dir()
    }
}
