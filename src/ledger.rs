//! In-memory record store keyed by calendar day.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::measurement::Measurement;
use crate::stats::month_bounds;

/// Outcome of a bulk import
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ImportReport {
    pub successful: usize,
    pub failed: usize,
    pub message: String,
}

impl ImportReport {
    fn new(successful: usize, failed: usize) -> Self {
        Self {
            successful,
            failed,
            message: format!("Import complete: {successful} records processed, {failed} failed"),
        }
    }
}

/// One measurement per day, with upsert-on-date semantics
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: BTreeMap<NaiveDate, Measurement>,
    next_id: u64,
}

impl Ledger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from existing records, keeping their ids
    ///
    /// Later records replace earlier ones on the same date.
    ///
    /// # Errors
    /// Returns the first record that fails validation.
    pub fn from_records(records: impl IntoIterator<Item = Measurement>) -> Result<Self, ValidationError> {
        let mut ledger = Self::new();
        for record in records {
            record.validate()?;
            let date = record.date;
            let id = match record.id.as_deref() {
                Some(id) => {
                    if let Ok(n) = id.parse::<u64>() {
                        ledger.next_id = ledger.next_id.max(n);
                    }
                    id.to_owned()
                }
                None => ledger.allocate_id(),
            };
            ledger.records.insert(date, record.with_id(id));
        }
        Ok(ledger)
    }

    /// Insert or update the record for `date`
    ///
    /// An existing record keeps its id; weight and fat rate are overwritten.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] and leaves the ledger untouched when the
    /// values break the stored-record rules.
    pub fn save(&mut self, date: NaiveDate, weight: f64, fat_rate: f64) -> Result<&Measurement, ValidationError> {
        let candidate = Measurement::new(date, weight, fat_rate);
        candidate.validate()?;

        let next_id = &mut self.next_id;
        let stored = self
            .records
            .entry(date)
            .and_modify(|m| {
                m.weight = weight;
                m.fat_rate = fat_rate;
            })
            .or_insert_with(|| {
                *next_id += 1;
                candidate.with_id(next_id.to_string())
            });
        Ok(&*stored)
    }

    /// Upsert every input; invalid inputs are counted as failed
    pub fn import(&mut self, inputs: &[Measurement]) -> ImportReport {
        let mut successful = 0;
        let mut failed = 0;
        for input in inputs {
            match self.save(input.date, input.weight, input.fat_rate) {
                Ok(_) => successful += 1,
                Err(err) => {
                    tracing::warn!(date = %input.date, error = %err, "skipping record during import");
                    failed += 1;
                }
            }
        }
        tracing::debug!(successful, failed, "import finished");
        ImportReport::new(successful, failed)
    }

    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&Measurement> {
        self.records.get(&date)
    }

    /// Remove the record for `date`, returning whether one existed
    pub fn delete(&mut self, date: NaiveDate) -> bool {
        self.records.remove(&date).is_some()
    }

    /// Most recent record by date
    #[must_use]
    pub fn latest(&self) -> Option<&Measurement> {
        self.records.values().next_back()
    }

    /// Every record, newest first
    #[must_use]
    pub fn records_desc(&self) -> Vec<Measurement> {
        self.records.values().rev().cloned().collect()
    }

    /// Records from `start` to `end` inclusive, oldest first
    #[must_use]
    pub fn range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Measurement> {
        if start > end {
            return Vec::new();
        }
        self.records.range(start..=end).map(|(_, m)| m.clone()).collect()
    }

    /// Records within one calendar month, oldest first
    #[must_use]
    pub fn month(&self, year: i32, month: u32) -> Vec<Measurement> {
        month_bounds(year, month).map_or_else(Vec::new, |(start, end)| self.range(start, end))
    }

    /// Drop every record
    pub fn reset(&mut self) {
        self.records.clear();
        self.next_id = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn allocate_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }
}
