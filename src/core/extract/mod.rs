use crate::core::entities::SourceRecord;
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

/// Read every registration row from the source CSV.
///
/// The first row is a header and is discarded; the ten remaining columns must
/// match the source schema in order. A malformed row (wrong arity, an
/// unparseable `register_time`) aborts the extraction.
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<Vec<SourceRecord>, AppError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        AppError::new(
            ErrorCategory::ExtractError,
            format!("Failed to open source file {}: {}", path.display(), e),
        )
    })?;

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let mut records = Vec::new();
    for (row, result) in reader.deserialize::<SourceRecord>().enumerate() {
        let record = result.map_err(|e| {
            AppError::new(
                ErrorCategory::ExtractError,
                format!("Failed to parse row {} of {}: {}", row + 1, path.display(), e),
            )
        })?;
        records.push(record);
    }

    tracing::debug!(rows = records.len(), path = %path.display(), "source extracted");
    Ok(records)
}
