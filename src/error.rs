//! Error types for record validation and JSON archives.
//!
//! The share codec itself never errors; it returns `None` for anything it
//! cannot encode or decode.

use chrono::NaiveDate;
use thiserror::Error;

/// Error returned when a measurement breaks the stored-record rules
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    /// Weight is zero, negative, or not a finite number
    #[error("weight {weight} on {date} must be positive")]
    WeightNotPositive { date: NaiveDate, weight: f64 },
    /// Fat rate is outside [0, 100] or not a finite number
    #[error("fat rate {fat_rate} on {date} must be within 0..=100")]
    FatRateOutOfRange { date: NaiveDate, fat_rate: f64 },
}

/// Error returned when reading or writing a JSON archive
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Input is not valid JSON or does not have an archive shape
    #[error("invalid archive: {0}")]
    Json(#[from] serde_json::Error),
    /// A record failed validation; the whole import is rejected
    #[error("record {index} is invalid: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: ValidationError,
    },
}
