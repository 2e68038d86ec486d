use crate::{
    cli::args::{CheckArgs, OutputFormat, RunArgs},
    core::{entities::RunSummary, ConfigLoader, EtlConfig, EtlPipeline},
    Result,
};
use anyhow::anyhow;
use std::env;
use std::path::PathBuf;

/// Resolve the effective configuration for a command invocation: explicit
/// config file if given, otherwise {path}/hackreg.toml, with CLI overrides
/// applied last.
fn resolve_config(
    path: Option<PathBuf>,
    config_file: Option<PathBuf>,
    input: Option<PathBuf>,
    table: Option<String>,
) -> Result<EtlConfig> {
    let workspace = match path {
        Some(p) => p,
        None => env::current_dir()?,
    };

    let mut config = if let Some(ref file) = config_file {
        ConfigLoader::load_from_file(file)?
            .ok_or_else(|| anyhow!("config file {} does not exist", file.display()))?
    } else {
        ConfigLoader::load_from_dir(&workspace)?
    };

    if let Some(input) = input {
        config.source.path = input;
    } else if config.source.path.is_relative() {
        config.source.path = workspace.join(&config.source.path);
    }
    if let Some(table) = table {
        config.sink.table = table;
    }

    ConfigLoader::validate_config(&config)?;
    Ok(config)
}

fn report_summary(summary: &RunSummary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(summary)?);
        }
        OutputFormat::Text => {
            println!(
                "Processed {} records from {} ({} written)",
                summary.records_read,
                summary.source_path.display(),
                summary.records_written
            );
            if let Some(completed_at) = summary.completed_at {
                println!(
                    "Duration: {}",
                    completed_at.signed_duration_since(summary.started_at)
                );
            }
        }
    }
    Ok(())
}

pub async fn run(args: RunArgs) -> Result<()> {
    tracing::info!("Starting registration ETL run");

    let config = resolve_config(args.path, args.config, args.input, args.table)?;
    let pipeline = EtlPipeline::new(config);

    let summary = if args.dry_run {
        pipeline.dry_run()?
    } else {
        pipeline.run().await?
    };

    report_summary(&summary, args.format)
}

pub async fn check(args: CheckArgs) -> Result<()> {
    let config = resolve_config(args.path, args.config, args.input, None)?;
    let test_sink = args.sink;
    let pipeline = EtlPipeline::new(config);

    let summary = pipeline.dry_run()?;
    println!(
        "Source OK: {} records derived from {}",
        summary.records_read,
        summary.source_path.display()
    );

    if test_sink {
        let sink = &pipeline.config().sink;
        let (client, connection) =
            tokio_postgres::connect(&sink.connection_string(), tokio_postgres::NoTls).await?;
        let driver = tokio::spawn(async move {
            let _ = connection.await;
        });
        client.query_one("SELECT 1", &[]).await?;
        driver.abort();
        println!(
            "Sink OK: connected to {}:{}/{}",
            sink.host, sink.port, sink.database
        );
    }

    Ok(())
}
