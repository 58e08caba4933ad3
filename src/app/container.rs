use std::sync::Arc;

use crate::adapters::FFmpegAdapter;
use crate::app::{inspect_interactor::InspectInteractor, trim_interactor::TrimInteractor};
use crate::config::TrimlyConfig;
use crate::error::TrimlyResult;
use crate::ports::ExecutePort;

/// Wires configuration and adapters into interactors
pub struct AppContainer {
    config: Arc<TrimlyConfig>,
    execute_port: Arc<dyn ExecutePort>,
    inspect_interactor: Arc<InspectInteractor>,
}

impl AppContainer {
    /// Container running the configured FFmpeg binary
    pub fn new(config: Arc<TrimlyConfig>) -> Self {
        let execute_port = Arc::new(FFmpegAdapter::from_config(&config));
        Self::with_executor(config, execute_port as Arc<dyn ExecutePort>)
    }

    /// Container using a caller-supplied executor
    pub fn with_executor(config: Arc<TrimlyConfig>, execute_port: Arc<dyn ExecutePort>) -> Self {
        let inspect_interactor = Arc::new(InspectInteractor::new(Arc::clone(&config)));
        Self {
            config,
            execute_port,
            inspect_interactor,
        }
    }

    pub fn config(&self) -> Arc<TrimlyConfig> {
        Arc::clone(&self.config)
    }

    pub fn execute_port(&self) -> Arc<dyn ExecutePort> {
        Arc::clone(&self.execute_port)
    }

    pub fn inspect_interactor(&self) -> Arc<InspectInteractor> {
        Arc::clone(&self.inspect_interactor)
    }

    /// Build the trim interactor; fails when the external tool is unavailable
    pub async fn trim_interactor(&self) -> TrimlyResult<TrimInteractor> {
        TrimInteractor::new(Arc::clone(&self.config), Arc::clone(&self.execute_port)).await
    }
}
