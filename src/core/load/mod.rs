//! Relational sink write path.
//!
//! Appends derived participant records to PostgreSQL via batched multi-value
//! INSERT statements. The table is created implicitly when missing; conflicts
//! are left to the sink's own constraints.

use crate::core::config::SinkConfig;
use crate::core::entities::ParticipantRecord;
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use std::fmt::Write as _;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, NoTls};

/// Column count of the sink table.
const NUM_COLUMNS: usize = ParticipantRecord::COLUMNS.len();

/// Sink client scoped to a single bulk append. The connection driver task is
/// aborted when this drops, on success or failure alike.
struct SinkClient {
    client: Client,
    driver: tokio::task::JoinHandle<()>,
}

impl Drop for SinkClient {
    fn drop(&mut self) {
        self.driver.abort();
    }
}

async fn connect(config: &SinkConfig) -> Result<SinkClient, AppError> {
    let (client, connection) = tokio_postgres::connect(&config.connection_string(), NoTls)
        .await
        .map_err(|e| {
            AppError::new(
                ErrorCategory::LoadError,
                format!(
                    "Connection to {}:{}/{} failed: {}",
                    config.host, config.port, config.database, e
                ),
            )
        })?;

    let driver = tokio::spawn(async move {
        if let Err(e) = connection.await {
            tracing::error!("sink connection error: {}", e);
        }
    });

    Ok(SinkClient { client, driver })
}

/// Quote a PostgreSQL identifier.
pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// DDL for the sink table, column types matching the derived record.
pub fn create_table_sql(table: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\
         participant_id TEXT, \
         first_name TEXT, \
         last_name TEXT, \
         birth_date DATE, \
         address TEXT, \
         phone_number TEXT, \
         country TEXT, \
         institute TEXT, \
         occupation TEXT, \
         register_time BIGINT, \
         postal_code TEXT, \
         city TEXT, \
         github_profile TEXT, \
         cleaned_phone_number TEXT, \
         team_name TEXT, \
         email TEXT, \
         register_at TIMESTAMP)",
        quote_identifier(table)
    )
}

/// Build a multi-value INSERT statement for `num_rows` rows.
pub fn build_insert_sql(table: &str, num_rows: usize) -> String {
    let col_list = ParticipantRecord::COLUMNS
        .iter()
        .map(|c| quote_identifier(c))
        .collect::<Vec<_>>()
        .join(", ");

    let header = format!("INSERT INTO {} ({}) VALUES ", quote_identifier(table), col_list);
    let mut sql = String::with_capacity(header.len() + num_rows * NUM_COLUMNS * 6);
    sql.push_str(&header);

    let mut param = 0usize;
    for row in 0..num_rows {
        if row > 0 {
            sql.push_str(", ");
        }
        sql.push('(');
        for col in 0..NUM_COLUMNS {
            if col > 0 {
                sql.push_str(", ");
            }
            param += 1;
            let _ = write!(sql, "${}", param);
        }
        sql.push(')');
    }
    sql
}

fn row_params(record: &ParticipantRecord) -> [&(dyn ToSql + Sync); NUM_COLUMNS] {
    [
        &record.participant_id,
        &record.first_name,
        &record.last_name,
        &record.birth_date,
        &record.address,
        &record.phone_number,
        &record.country,
        &record.institute,
        &record.occupation,
        &record.register_time,
        &record.postal_code,
        &record.city,
        &record.github_profile,
        &record.cleaned_phone_number,
        &record.team_name,
        &record.email,
        &record.register_at,
    ]
}

/// Append all records to the sink table in one pass. Returns rows written.
///
/// The connection lives only for the duration of this call. Chunked at
/// `config.chunk_size` rows per INSERT; a failed chunk aborts the run with
/// no retry.
pub async fn append_records(
    config: &SinkConfig,
    records: &[ParticipantRecord],
) -> Result<u64, AppError> {
    if records.is_empty() {
        return Ok(0);
    }

    let sink = connect(config).await?;

    sink.client
        .execute(&create_table_sql(&config.table), &[])
        .await
        .map_err(|e| {
            AppError::new(
                ErrorCategory::LoadError,
                format!("Failed to ensure table {}: {}", config.table, e),
            )
        })?;

    let mut total_rows: u64 = 0;
    for chunk in records.chunks(config.chunk_size) {
        let sql = build_insert_sql(&config.table, chunk.len());
        let mut params: Vec<&(dyn ToSql + Sync)> = Vec::with_capacity(chunk.len() * NUM_COLUMNS);
        for record in chunk {
            params.extend_from_slice(&row_params(record));
        }

        let written = sink.client.execute(&sql, &params).await.map_err(|e| {
            AppError::new(
                ErrorCategory::LoadError,
                format!(
                    "INSERT failed for {}, rows {}-{}: {}",
                    config.table,
                    total_rows,
                    total_rows + chunk.len() as u64,
                    e
                ),
            )
        })?;
        total_rows += written;
    }

    tracing::info!(rows = total_rows, table = %config.table, "sink append complete");
    Ok(total_rows)
}
