//! Summary statistics over measurement sets.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::measurement::Measurement;

/// First and last day of a calendar month
#[must_use]
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next.pred_opt()?))
}

/// Number of records logged in one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    pub year: i32,
    pub month: u32,
    pub count: usize,
}

/// Months that contain records, newest first
#[must_use]
pub fn available_months(records: &[Measurement]) -> Vec<MonthCount> {
    let mut months: Vec<MonthCount> = Vec::new();
    for m in newest_first(records) {
        let (year, month) = (m.date.year(), m.date.month());
        match months.last_mut() {
            Some(last) if last.year == year && last.month == month => last.count += 1,
            _ => months.push(MonthCount { year, month, count: 1 }),
        }
    }
    months
}

/// Statistics across every stored record
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OverallStats {
    pub total_records: usize,
    pub latest_weight: f64,
    pub latest_fat: f64,
    pub average_weight: f64,
    pub average_fat: f64,
    pub min_weight: f64,
    pub max_weight: f64,
    /// Latest minus the record before it
    pub weight_change: f64,
    pub fat_change: f64,
}

impl OverallStats {
    /// Compute over `records` in any order; all zero when empty
    #[must_use]
    pub fn of(records: &[Measurement]) -> Self {
        let sorted = newest_first(records);
        let Some(latest) = sorted.first() else {
            return Self::default();
        };
        let (weight_change, fat_change) = sorted.get(1).map_or((0.0, 0.0), |prev| {
            (latest.weight - prev.weight, latest.fat_rate - prev.fat_rate)
        });
        let weights = Extent::of(records.iter().map(|m| m.weight));
        let fats = Extent::of(records.iter().map(|m| m.fat_rate));

        Self {
            total_records: records.len(),
            latest_weight: latest.weight,
            latest_fat: latest.fat_rate,
            average_weight: weights.mean,
            average_fat: fats.mean,
            min_weight: weights.min,
            max_weight: weights.max,
            weight_change,
            fat_change,
        }
    }
}

/// Statistics for one month of records
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthlyStats {
    pub total_records: usize,
    pub average_weight: f64,
    pub average_fat: f64,
    pub min_weight: f64,
    pub max_weight: f64,
    pub min_fat: f64,
    pub max_fat: f64,
    /// Last day's value minus first day's value
    pub weight_change: f64,
    pub fat_change: f64,
    pub first_record: Option<Measurement>,
    pub last_record: Option<Measurement>,
}

impl MonthlyStats {
    /// Compute over `records` in any order; zeroed when empty
    #[must_use]
    pub fn of(records: &[Measurement]) -> Self {
        let mut sorted: Vec<&Measurement> = records.iter().collect();
        sorted.sort_by_key(|m| m.date);
        let (Some(&first), Some(&last)) = (sorted.first(), sorted.last()) else {
            return Self::default();
        };
        let weights = Extent::of(records.iter().map(|m| m.weight));
        let fats = Extent::of(records.iter().map(|m| m.fat_rate));

        Self {
            total_records: records.len(),
            average_weight: weights.mean,
            average_fat: fats.mean,
            min_weight: weights.min,
            max_weight: weights.max,
            min_fat: fats.min,
            max_fat: fats.max,
            weight_change: last.weight - first.weight,
            fat_change: last.fat_rate - first.fat_rate,
            first_record: Some(first.clone()),
            last_record: Some(last.clone()),
        }
    }
}

/// Overview shown above a shared date range
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareSummary {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub record_count: usize,
    pub average_weight: f64,
    pub average_fat: f64,
    pub weight_change: f64,
    pub fat_change: f64,
}

impl ShareSummary {
    /// Summarize records in the order given (decoded share data is already
    /// date-ordered); `None` when empty
    #[must_use]
    pub fn of(records: &[Measurement]) -> Option<Self> {
        let first = records.first()?;
        let last = records.last()?;
        let weights = Extent::of(records.iter().map(|m| m.weight));
        let fats = Extent::of(records.iter().map(|m| m.fat_rate));

        Some(Self {
            start: first.date,
            end: last.date,
            record_count: records.len(),
            average_weight: weights.mean,
            average_fat: fats.mean,
            weight_change: last.weight - first.weight,
            fat_change: last.fat_rate - first.fat_rate,
        })
    }
}

/// Records sorted by date, newest first (stable for equal dates)
fn newest_first(records: &[Measurement]) -> Vec<&Measurement> {
    let mut sorted: Vec<&Measurement> = records.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Min, max and mean of a non-empty series (zeros when empty)
#[derive(Debug, Clone, Copy, Default)]
struct Extent {
    min: f64,
    max: f64,
    mean: f64,
}

impl Extent {
    fn of(values: impl Iterator<Item = f64>) -> Self {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values {
            count += 1;
            sum += v;
            min = min.min(v);
            max = max.max(v);
        }
        if count == 0 {
            return Self::default();
        }
        #[allow(clippy::cast_precision_loss)]
        let mean = sum / count as f64;
        Self { min, max, mean }
    }
}
