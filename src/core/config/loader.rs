#![allow(clippy::result_large_err)]

use super::EtlConfig;
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use std::env;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from the working directory (./hackreg.toml)
    /// Environment variables override config file values
    pub fn load_from_dir(dir: &Path) -> Result<EtlConfig, AppError> {
        let config_path = dir.join("hackreg.toml");
        let config_file = Self::load_from_file(&config_path)?;

        let mut config = config_file.unwrap_or_default();
        Self::apply_env_overrides(&mut config);

        Ok(config)
    }

    /// Load config from specific file path
    /// Returns Ok(None) if file doesn't exist
    pub fn load_from_file(path: &Path) -> Result<Option<EtlConfig>, AppError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::new(
                ErrorCategory::IoError,
                format!("Failed to read config file {}: {}", path.display(), e),
            )
        })?;

        let config: EtlConfig = toml::from_str(&content).map_err(|e| {
            AppError::new(
                ErrorCategory::ConfigError,
                format!("Failed to parse config file {}: {}", path.display(), e),
            )
        })?;

        Ok(Some(config))
    }

    /// Apply environment variable overrides to the configuration
    /// Environment variables take precedence over config file values
    fn apply_env_overrides(config: &mut EtlConfig) {
        if let Ok(path) = env::var("HACKREG_SOURCE_PATH") {
            config.source.path = PathBuf::from(path);
        }

        if let Ok(host) = env::var("HACKREG_SINK_HOST") {
            config.sink.host = host;
        }

        if let Ok(port_str) = env::var("HACKREG_SINK_PORT") {
            if let Ok(port) = port_str.parse::<u16>() {
                config.sink.port = port;
            }
        }

        if let Ok(user) = env::var("HACKREG_SINK_USER") {
            config.sink.user = user;
        }

        if let Ok(password) = env::var("HACKREG_SINK_PASSWORD") {
            config.sink.password = password;
        }

        if let Ok(database) = env::var("HACKREG_SINK_DATABASE") {
            config.sink.database = database;
        }

        if let Ok(table) = env::var("HACKREG_SINK_TABLE") {
            config.sink.table = table;
        }
    }

    /// Get documentation for supported environment variables
    pub fn env_var_documentation() -> &'static [&'static str] {
        &[
            "HACKREG_SOURCE_PATH - Override source CSV path",
            "HACKREG_SINK_HOST - Override sink host (default: localhost)",
            "HACKREG_SINK_PORT - Override sink port (default: 5432)",
            "HACKREG_SINK_USER - Override sink user (default: postgres)",
            "HACKREG_SINK_PASSWORD - Override sink password",
            "HACKREG_SINK_DATABASE - Override sink database (default: hackreg)",
            "HACKREG_SINK_TABLE - Override sink table (default: participant)",
        ]
    }

    /// Validate configuration values
    pub fn validate_config(config: &EtlConfig) -> Result<(), AppError> {
        if config.sink.host.is_empty() {
            return Err(AppError::new(
                ErrorCategory::ValidationError,
                "Sink host cannot be empty".to_string(),
            ));
        }

        if config.sink.database.is_empty() {
            return Err(AppError::new(
                ErrorCategory::ValidationError,
                "Sink database cannot be empty".to_string(),
            ));
        }

        if config.sink.table.is_empty() {
            return Err(AppError::new(
                ErrorCategory::ValidationError,
                "Sink table cannot be empty".to_string(),
            ));
        }

        if config.sink.chunk_size == 0 {
            return Err(AppError::new(
                ErrorCategory::ValidationError,
                "Sink chunk_size must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
