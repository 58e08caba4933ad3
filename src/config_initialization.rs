//! Configuration initialization and hierarchy management

use std::path::Path;

use tracing::info;

use crate::adapters::TomlConfigAdapter;
use crate::cli::Cli;
use crate::config::{ConfigOverrides, ConfigStore, TrimlyConfig};
use crate::error::TrimlyResult;

/// Store whose configuration follows precedence: CLI > Env > File > Defaults
pub fn configuration_store(cli: &Cli) -> ConfigStore {
    let config_file = cli.config.clone();
    let cli_overrides = cli.overrides();
    ConfigStore::with_factory(move || {
        build_configuration(
            config_file.as_deref(),
            &cli_overrides,
            |key| std::env::var(key).ok(),
        )
    })
}

/// Layer file, environment (read through `lookup`) and CLI overrides on the
/// defaults. The result is not validated.
pub fn build_configuration<F>(
    config_file: Option<&Path>,
    cli_overrides: &ConfigOverrides,
    lookup: F,
) -> TrimlyResult<TrimlyConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let file_overrides = match TomlConfigAdapter::locate(config_file) {
        Some(path) => load_config_file(&path)?,
        None => ConfigOverrides::default(),
    };

    let env_overrides = ConfigOverrides::from_lookup(lookup)?;
    if env_overrides.count() > 0 {
        info!("Applied {} environment variable overrides", env_overrides.count());
    }
    if cli_overrides.count() > 0 {
        info!("Applied {} CLI configuration overrides", cli_overrides.count());
    }

    let merged = file_overrides
        .merge(env_overrides)
        .merge(cli_overrides.clone());
    Ok(TrimlyConfig::default().with_overrides(&merged))
}

fn load_config_file(path: &Path) -> TrimlyResult<ConfigOverrides> {
    info!("Loading configuration from: {}", path.display());
    TomlConfigAdapter::load(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::overrides::env;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_precedence_cli_over_env_over_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("trimly.toml");
        std::fs::write(
            &file,
            "[trimly]\n\
             default_silence_threshold_db = -60\n\
             default_min_silence_duration_seconds = 0.5\n\
             processed_file_prefix = \"file_\"\n",
        )
        .unwrap();

        let cli = ConfigOverrides {
            default_silence_threshold_db: Some(-20.0),
            ..ConfigOverrides::default()
        };
        let config = build_configuration(Some(file.as_path()), &cli, |key| match key {
            env::SILENCE_THRESHOLD_DB => Some("-30".to_string()),
            env::MIN_SILENCE_DURATION => Some("0.25".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.default_silence_threshold_db, -20.0);
        assert_eq!(config.default_min_silence_duration_seconds, 0.25);
        assert_eq!(config.processed_file_prefix, "file_");
        assert_eq!(config.default_start_silence_keep_duration_seconds, 0.1);
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = build_configuration(
            Some(dir.path().join("absent.toml").as_path()),
            &ConfigOverrides::default(),
            |_| None,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    }

    #[test]
    fn test_bad_env_value_fails_fast() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("empty.toml");
        std::fs::write(&file, "").unwrap();

        let err = build_configuration(Some(file.as_path()), &ConfigOverrides::default(), |key| {
            (key == env::MAX_SILENCE_DB).then(|| "loud".to_string())
        })
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid float value for TRIMLY_MAX_SILENCE_DB: loud"
        );
    }
}
