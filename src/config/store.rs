//! Lazily built, resettable configuration holder

use std::fmt;
use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use crate::config::TrimlyConfig;
use crate::error::{TrimlyError, TrimlyResult};

type ConfigFactory = Box<dyn Fn() -> TrimlyResult<TrimlyConfig> + Send + Sync>;

/// Holds the active configuration.
///
/// The first [`get`](ConfigStore::get) builds the configuration through the
/// factory, validates it and creates its temp directory. The store is meant
/// to be read while requests run; `set` and `reset` are for setup and tests.
pub struct ConfigStore {
    current: RwLock<Option<Arc<TrimlyConfig>>>,
    factory: ConfigFactory,
}

impl ConfigStore {
    /// Store building its configuration from the environment
    pub fn from_env() -> Self {
        Self::with_factory(TrimlyConfig::from_env)
    }

    /// Store building its configuration with `factory`
    pub fn with_factory<F>(factory: F) -> Self
    where
        F: Fn() -> TrimlyResult<TrimlyConfig> + Send + Sync + 'static,
    {
        Self {
            current: RwLock::new(None),
            factory: Box::new(factory),
        }
    }

    /// Active configuration, built on first use
    pub fn get(&self) -> TrimlyResult<Arc<TrimlyConfig>> {
        if let Some(config) = self.read_current() {
            return Ok(config);
        }

        let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
        // Another caller may have built it while we waited for the lock
        if let Some(config) = current.as_ref() {
            return Ok(Arc::clone(config));
        }

        let config = (self.factory)()?;
        config.validate()?;
        std::fs::create_dir_all(&config.temp_directory).map_err(|e| {
            TrimlyError::Unexpected(format!(
                "Failed to create temporary directory {}: {}",
                config.temp_directory.display(),
                e
            ))
        })?;
        info!(
            temp_directory = %config.temp_directory.display(),
            "Configuration loaded"
        );

        let config = Arc::new(config);
        *current = Some(Arc::clone(&config));
        Ok(config)
    }

    /// Validate `config` and make it the active configuration
    pub fn set(&self, config: TrimlyConfig) -> TrimlyResult<()> {
        config.validate()?;
        let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
        *current = Some(Arc::new(config));
        debug!("Configuration replaced");
        Ok(())
    }

    /// Drop the active configuration; the next `get` rebuilds it
    pub fn reset(&self) {
        let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
        *current = None;
        debug!("Configuration reset");
    }

    fn read_current(&self) -> Option<Arc<TrimlyConfig>> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .as_ref()
            .map(Arc::clone)
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::from_env()
    }
}

impl fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("current", &self.read_current())
            .finish_non_exhaustive()
    }
}
