use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::core::types::RunStatus;

/// One row of the registration CSV, before derivation.
///
/// Field order matches the source header; `register_time` is epoch seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub participant_id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub address: String,
    pub phone_number: String,
    pub country: String,
    pub institute: String,
    pub occupation: String,
    pub register_time: i64,
}

/// A fully derived participant record, ready for the sink.
///
/// Carries every source column plus the seven derived columns. `postal_code`
/// and `city` are best-effort extractions and may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantRecord {
    pub participant_id: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub address: String,
    pub phone_number: String,
    pub country: String,
    pub institute: String,
    pub occupation: String,
    pub register_time: i64,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub github_profile: String,
    pub cleaned_phone_number: String,
    pub team_name: String,
    pub email: String,
    pub register_at: NaiveDateTime,
}

impl ParticipantRecord {
    /// Column names in sink order, source columns first.
    pub const COLUMNS: [&'static str; 17] = [
        "participant_id",
        "first_name",
        "last_name",
        "birth_date",
        "address",
        "phone_number",
        "country",
        "institute",
        "occupation",
        "register_time",
        "postal_code",
        "city",
        "github_profile",
        "cleaned_phone_number",
        "team_name",
        "email",
        "register_at",
    ];
}

/// Outcome of a single ETL run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub status: RunStatus,
    pub source_path: std::path::PathBuf,
    pub records_read: usize,
    pub records_written: usize,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl RunSummary {
    pub fn started(source_path: std::path::PathBuf) -> Self {
        RunSummary {
            status: RunStatus::Running,
            source_path,
            records_read: 0,
            records_written: 0,
            started_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn complete(&mut self) {
        self.status = RunStatus::Completed;
        self.completed_at = Some(Utc::now());
    }
}
