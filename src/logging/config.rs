use crate::logging::layers::console::ConsoleOutput;
use crate::Result;
use anyhow::anyhow;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_LEVEL: &str = "info";

/// Resolved logging configuration after reading environment overrides.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_dir: Option<PathBuf>,
    pub default_level: String,
    pub enable_file: bool,
    pub console_output: Option<ConsoleOutput>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            default_level: DEFAULT_LEVEL.to_string(),
            enable_file: false,
            console_output: None,
        }
    }
}

impl LoggingConfig {
    /// Load configuration with deterministic precedence: defaults, then
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = LoggingConfig::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(level) = env::var("HACKREG_LOG_LEVEL") {
            if !level.trim().is_empty() {
                self.default_level = level;
            }
        }

        if let Ok(dir) = env::var("HACKREG_LOG_DIR") {
            if !dir.trim().is_empty() {
                self.log_dir = Some(PathBuf::from(dir));
                self.enable_file = true;
            }
        }

        if let Ok(enable) = env::var("HACKREG_LOG_FILE") {
            self.enable_file = enable
                .trim()
                .parse::<bool>()
                .map_err(|_| anyhow!("invalid HACKREG_LOG_FILE '{}'; expected true or false", enable))?;
        }

        if let Ok(console) = env::var("HACKREG_LOG_CONSOLE") {
            self.console_output = Some(ConsoleOutput::from_str(&console).map_err(|e| anyhow!(e))?);
        }

        Ok(())
    }
}
