//! FFmpeg execution adapter
//!
//! Runs the external tool as a child process with a timeout. The process is
//! killed when the timeout elapses.

use std::process::Stdio;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::config::TrimlyConfig;
use crate::domain::model::{ExecutionReport, ToolInvocation};
use crate::engine::version_query;
use crate::error::{TrimlyError, TrimlyResult};
use crate::ports::ExecutePort;

/// Subprocess-based execution adapter
#[derive(Debug, Clone)]
pub struct FFmpegAdapter {
    program: String,
}

impl FFmpegAdapter {
    /// Adapter running `program` for availability checks
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Adapter for the binary named in `config`
    pub fn from_config(config: &TrimlyConfig) -> Self {
        Self::new(config.ffmpeg_binary.clone())
    }
}

#[async_trait]
impl ExecutePort for FFmpegAdapter {
    async fn check_available(&self, timeout: Duration) -> TrimlyResult<()> {
        let query = version_query(&self.program);
        debug!("Checking tool availability: {}", query);

        let mut child = Command::new(&query.program)
            .args(&query.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| TrimlyError::ToolUnavailable {
                cause: format!("failed to start {}: {}", query.program, e),
            })?;

        let waited = tokio::time::timeout(timeout, child.wait()).await;
        let status = match waited {
            Ok(Ok(status)) => status,
            Ok(Err(e)) => {
                return Err(TrimlyError::ToolUnavailable {
                    cause: e.to_string(),
                })
            }
            Err(_) => {
                let _ = child.kill().await;
                return Err(TrimlyError::ToolUnavailable {
                    cause: format!(
                        "{} did not answer within {} seconds",
                        query,
                        timeout.as_secs_f64()
                    ),
                });
            }
        };

        if status.success() {
            debug!("{} is available", self.program);
            Ok(())
        } else {
            Err(TrimlyError::ToolUnavailable {
                cause: format!("{} exited with {}", query, status),
            })
        }
    }

    async fn run(
        &self,
        invocation: &ToolInvocation,
        timeout: Duration,
    ) -> TrimlyResult<ExecutionReport> {
        debug!("Running: {}", invocation);
        let started = Instant::now();

        let child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => TrimlyError::ToolUnavailable {
                    cause: format!("failed to start {}: {}", invocation.program, e),
                },
                _ => TrimlyError::Io(e),
            })?;

        // Dropping the child on timeout kills it
        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(output) => output?,
            Err(_) => {
                warn!(
                    "{} timed out after {:.1} seconds, killing process",
                    invocation.program,
                    timeout.as_secs_f64()
                );
                return Err(TrimlyError::Timeout { after: timeout });
            }
        };

        let report = ExecutionReport {
            exit_code: output.status.code(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            elapsed: started.elapsed(),
        };
        debug!(
            exit_code = ?report.exit_code,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "Process finished"
        );
        Ok(report)
    }
}
