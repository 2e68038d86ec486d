use crate::core::config::EtlConfig;
use crate::core::derive::FieldDeriver;
use crate::core::entities::{ParticipantRecord, RunSummary};
use crate::core::error::AppError;
use crate::core::{extract, load};

/// Single-pass ETL over the registration dataset: extract the source CSV,
/// derive each record independently, then bulk-append to the sink.
///
/// Records carry no cross-record state, so the first derivation failure
/// aborts the whole run; there is no partial-progress checkpoint.
pub struct EtlPipeline {
    config: EtlConfig,
    deriver: FieldDeriver,
}

impl EtlPipeline {
    pub fn new(config: EtlConfig) -> Self {
        EtlPipeline {
            config,
            deriver: FieldDeriver::new(),
        }
    }

    pub fn config(&self) -> &EtlConfig {
        &self.config
    }

    /// Extract and derive only; no sink connection is opened.
    pub fn derive_all(&self) -> Result<(RunSummary, Vec<ParticipantRecord>), AppError> {
        let mut summary = RunSummary::started(self.config.source.path.clone());

        let sources = extract::read_source(&self.config.source.path)?;
        summary.records_read = sources.len();
        tracing::info!(records = sources.len(), "extraction complete");

        let mut derived = Vec::with_capacity(sources.len());
        for source in &sources {
            derived.push(self.deriver.derive(source)?);
        }
        tracing::info!(records = derived.len(), "derivation complete");

        Ok((summary, derived))
    }

    /// Full run: extract, derive, and append to the sink.
    pub async fn run(&self) -> Result<RunSummary, AppError> {
        let (mut summary, derived) = self.derive_all()?;

        let written = load::append_records(&self.config.sink, &derived).await?;
        summary.records_written = written as usize;
        summary.complete();

        Ok(summary)
    }

    /// Dry run: extract and derive, skipping the sink entirely.
    pub fn dry_run(&self) -> Result<RunSummary, AppError> {
        let (mut summary, derived) = self.derive_all()?;
        summary.records_written = 0;
        summary.complete();
        tracing::info!(records = derived.len(), "dry run complete, sink skipped");
        Ok(summary)
    }
}
