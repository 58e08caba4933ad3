// Ports - Interface definitions (contracts)

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::model::{ExecutionReport, ToolInvocation};
use crate::error::TrimlyResult;

/// Port for running the external audio tool
#[async_trait]
pub trait ExecutePort: Send + Sync {
    /// Confirm the tool starts and answers its version query within `timeout`.
    ///
    /// Missing binary, non-zero exit and timeout all map to `ToolUnavailable`.
    async fn check_available(&self, timeout: Duration) -> TrimlyResult<()>;

    /// Run `invocation` to completion, capturing its output.
    ///
    /// A non-zero exit is reported in the returned [`ExecutionReport`], not as
    /// an error. Exceeding `timeout` kills the process and yields `Timeout`.
    async fn run(
        &self,
        invocation: &ToolInvocation,
        timeout: Duration,
    ) -> TrimlyResult<ExecutionReport>;
}
