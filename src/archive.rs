//! JSON export and import of measurement records.
//!
//! Exports are written as `{"version": 1, "records": [...]}` with records
//! newest first. Imports also accept the older plain-array form.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::EXPORT_VERSION;
use crate::error::ArchiveError;
use crate::ledger::{ImportReport, Ledger};
use crate::measurement::Measurement;

/// Versioned export document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportData {
    pub version: u32,
    pub records: Vec<Measurement>,
}

/// Accepted import shapes
#[derive(Deserialize)]
#[serde(untagged)]
enum ImportData {
    Legacy(Vec<Measurement>),
    Versioned(ExportData),
}

impl ImportData {
    fn into_records(self) -> Vec<Measurement> {
        match self {
            Self::Legacy(records) => records,
            Self::Versioned(data) => data.records,
        }
    }
}

/// Snapshot every ledger record, newest first
#[must_use]
pub fn export(ledger: &Ledger) -> ExportData {
    ExportData {
        version: EXPORT_VERSION,
        records: ledger.records_desc(),
    }
}

/// Pretty-printed JSON for an export
///
/// # Errors
/// Returns [`ArchiveError::Json`] if a value cannot be represented in JSON.
pub fn to_json(data: &ExportData) -> Result<String, ArchiveError> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Default download name for an export made on `today`
#[must_use]
pub fn export_file_name(today: NaiveDate) -> String {
    format!("weight-records-{}.json", today.format("%Y-%m-%d"))
}

/// Parse and validate an import document
///
/// Either archive shape is accepted. Every record must pass
/// [`Measurement::validate`]; one bad record rejects the whole document.
///
/// # Errors
/// * [`ArchiveError::Json`] - Not JSON, or neither archive shape
/// * [`ArchiveError::InvalidRecord`] - First record that fails validation
pub fn parse_import(json: &str) -> Result<Vec<Measurement>, ArchiveError> {
    let records = serde_json::from_str::<ImportData>(json)?.into_records();
    for (index, record) in records.iter().enumerate() {
        record
            .validate()
            .map_err(|source| ArchiveError::InvalidRecord { index, source })?;
    }
    Ok(records)
}

/// Parse an import document and upsert its records into `ledger`
///
/// # Errors
/// Same as [`parse_import`]; the ledger is untouched on error.
pub fn import_into(ledger: &mut Ledger, json: &str) -> Result<ImportReport, ArchiveError> {
    let records = parse_import(json)?;
    tracing::debug!(count = records.len(), "importing records");
    Ok(ledger.import(&records))
}
