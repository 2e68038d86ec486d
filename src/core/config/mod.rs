mod loader;

pub use loader::ConfigLoader;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration loaded from hackreg.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EtlConfig {
    /// Source CSV configuration
    #[serde(default)]
    pub source: SourceConfig,

    /// Relational sink configuration
    #[serde(default)]
    pub sink: SinkConfig,
}

/// Source CSV configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Path to the registration CSV
    #[serde(default = "default_source_path")]
    pub path: PathBuf,
}

/// Relational sink configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SinkConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default)]
    pub password: String,

    #[serde(default = "default_database")]
    pub database: String,

    /// Target table, named for the record type
    #[serde(default = "default_table")]
    pub table: String,

    /// Rows per multi-value INSERT statement
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            path: default_source_path(),
        }
    }
}

impl Default for SinkConfig {
    fn default() -> Self {
        SinkConfig {
            host: default_host(),
            port: default_port(),
            user: default_user(),
            password: String::new(),
            database: default_database(),
            table: default_table(),
            chunk_size: default_chunk_size(),
        }
    }
}

impl SinkConfig {
    /// Connection string in tokio-postgres key/value form.
    pub fn connection_string(&self) -> String {
        format!(
            "host={} port={} user={} password={} dbname={}",
            self.host, self.port, self.user, self.password, self.database
        )
    }
}

// Default functions
fn default_source_path() -> PathBuf {
    PathBuf::from("participants.csv")
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_user() -> String {
    "postgres".to_string()
}

fn default_database() -> String {
    "hackreg".to_string()
}

fn default_table() -> String {
    "participant".to_string()
}

fn default_chunk_size() -> usize {
    1000
}
