pub mod args;
pub mod commands;

pub use args::{CheckArgs, OutputFormat, RunArgs};
use clap::{Parser, Subcommand};

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nOPTIONS:\n{options}\n\
COMMANDS:\n{subcommands}\n";

#[derive(Parser)]
#[command(name = "hackreg")]
#[command(version = crate::VERSION)]
#[command(about = "ETL for hackathon registration data")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Typical flow: check the source and config, then run the full pipeline against the sink."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(
        about = "Run the full ETL pass",
        long_about = "Run extracts the registration CSV, derives the enrichment fields for every record, and bulk-appends the result to the configured sink table.",
        after_help = "Example:\n    hackreg run ./workspace --input participants.csv"
    )]
    Run(RunArgs),
    #[command(
        about = "Validate the source and configuration",
        long_about = "Check loads the configuration, parses and derives the source CSV without touching the sink, and optionally tests sink connectivity.",
        after_help = "Example:\n    hackreg check ./workspace --sink"
    )]
    Check(CheckArgs),
}

impl Command {
    /// Whether the selected subcommand requested verbose logging.
    pub fn verbose(&self) -> bool {
        match self {
            Command::Run(args) => args.verbose,
            Command::Check(args) => args.verbose,
        }
    }
}

pub async fn run(args: Args) -> crate::Result<()> {
    match args.command {
        Command::Run(run_args) => commands::run(run_args).await,
        Command::Check(check_args) => commands::check(check_args).await,
    }
}
