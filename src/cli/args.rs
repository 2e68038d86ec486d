use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Output rendering for run summaries.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct RunArgs {
    /// Directory containing hackreg.toml (defaults to current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Source CSV path, overriding the configured one
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Path to custom config file (default: {path}/hackreg.toml)
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<PathBuf>,

    /// Sink table override
    #[arg(long, value_name = "TABLE", help_heading = "Configuration")]
    pub table: Option<String>,

    /// Extract and derive only; skip the sink write
    #[arg(long, help_heading = "Output Options")]
    pub dry_run: bool,

    /// Summary output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output Options")]
    pub format: OutputFormat,

    /// Enable verbose (debug-level) logging
    #[arg(long, help_heading = "Output Options")]
    pub verbose: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Directory containing hackreg.toml (defaults to current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Source CSV path, overriding the configured one
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Path to custom config file (default: {path}/hackreg.toml)
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<PathBuf>,

    /// Also test sink connectivity
    #[arg(long)]
    pub sink: bool,

    /// Enable verbose (debug-level) logging
    #[arg(long, help_heading = "Output Options")]
    pub verbose: bool,
}
