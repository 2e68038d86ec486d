pub mod config;
pub mod derive;
pub mod entities;
pub mod error;
pub mod extract;
pub mod load;
pub mod pipeline;
pub mod types;

pub use config::{ConfigLoader, EtlConfig};
pub use derive::FieldDeriver;
pub use entities::{ParticipantRecord, RunSummary, SourceRecord};
pub use error::AppError;
pub use pipeline::EtlPipeline;
pub use types::*;
