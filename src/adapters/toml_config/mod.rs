// TOML config adapter - Configuration files with a [trimly] table

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{ConfigOverrides, TrimlyConfig};
use crate::error::{TrimlyError, TrimlyResult};

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "trimly.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OverridesFile {
    trimly: ConfigOverrides,
}

#[derive(Serialize)]
struct ConfigFile<'a> {
    trimly: &'a TrimlyConfig,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Path of the config file to load, if any.
    ///
    /// An explicit path is always returned; otherwise the default file is used
    /// only when it exists.
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                default.is_file().then_some(default)
            }
        }
    }

    /// Read overrides from a TOML file
    pub fn load(path: &Path) -> TrimlyResult<ConfigOverrides> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TrimlyError::invalid_config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let overrides = Self::parse(&content).map_err(|e| {
            TrimlyError::invalid_config(format!("{}: {}", path.display(), e))
        })?;
        info!(
            "Loaded {} setting(s) from {}",
            overrides.count(),
            path.display()
        );
        Ok(overrides)
    }

    /// Parse the `[trimly]` table of a TOML document
    pub fn parse(content: &str) -> TrimlyResult<ConfigOverrides> {
        let file: OverridesFile = toml::from_str(content).map_err(|e| {
            TrimlyError::invalid_config(format!("Failed to parse TOML config: {}", e))
        })?;
        debug!("Parsed config overrides: {:?}", file.trimly);
        Ok(file.trimly)
    }

    /// Render a full configuration as a `[trimly]` table
    pub fn render(config: &TrimlyConfig) -> TrimlyResult<String> {
        toml::to_string(&ConfigFile { trimly: config })
            .map_err(|e| TrimlyError::Unexpected(format!("Failed to serialize config: {}", e)))
    }
}
