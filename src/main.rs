use clap::Parser;
use hackreg::{cli, logging, Result};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let _guard = logging::init(&args.command)?;
    cli::run(args).await
}
