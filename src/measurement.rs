//! Measurement struct for daily weight and body-fat records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A single day's weight and body-fat reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Record identifier (`shared-<i>` for decoded share data)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Calendar day, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Body weight in kilograms
    pub weight: f64,
    /// Body-fat percentage
    pub fat_rate: f64,
}

impl Measurement {
    /// Create a measurement without an identifier
    #[inline]
    #[must_use]
    pub fn new(date: NaiveDate, weight: f64, fat_rate: f64) -> Self {
        Self {
            id: None,
            date,
            weight,
            fat_rate,
        }
    }

    /// Attach an identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Check the stored-record rules: positive weight, fat rate within [0, 100]
    ///
    /// # Errors
    /// Returns the first rule the measurement breaks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(ValidationError::WeightNotPositive {
                date: self.date,
                weight: self.weight,
            });
        }
        if !self.fat_rate.is_finite() || !(0.0..=100.0).contains(&self.fat_rate) {
            return Err(ValidationError::FatRateOutOfRange {
                date: self.date,
                fat_rate: self.fat_rate,
            });
        }
        Ok(())
    }

    /// Whether the share codec treats this as a real measurement
    ///
    /// Stricter than [`validate`](Self::validate): a fat rate of 0 is dropped.
    #[inline]
    #[must_use]
    pub fn is_shareable(&self) -> bool {
        self.weight > 0.0 && self.fat_rate > 0.0
    }

    /// Body-fat mass in kilograms
    #[inline]
    #[must_use]
    pub fn fat_mass(&self) -> f64 {
        self.weight * self.fat_rate / 100.0
    }

    /// Lean body mass in kilograms
    #[inline]
    #[must_use]
    pub fn lean_mass(&self) -> f64 {
        self.weight - self.fat_mass()
    }
}
