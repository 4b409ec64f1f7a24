//! Encoder for share payloads.

use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::NaiveDate;

use crate::constants::{round_to_u64, DigitWidth, DATE_DIGITS, FAT_DIGITS, TENTHS};
use crate::measurement::Measurement;
use crate::url::share_url;

/// Encode measurements into a full share URL
///
/// # Arguments
/// * `records` - Measurements in any order; entries with a non-positive weight
///   or fat rate are ignored
/// * `origin` - Absolute base URL (`scheme://host[:port]`)
///
/// # Returns
/// `<origin>/share?<payload>`, or `None` when no shareable record remains.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use weightshare::{encode, Measurement};
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let url = encode(&[Measurement::new(day, 70.5, 18.5)], "http://localhost:5173");
/// assert_eq!(url.as_deref(), Some("http://localhost:5173/share?20240115-3-071-185"));
/// ```
#[must_use]
pub fn encode(records: &[Measurement], origin: &str) -> Option<String> {
    let payload = encode_payload(records)?;
    Some(share_url(origin, &payload))
}

/// Encode measurements into the bare payload (`YYYYMMDD-n-weights-fats`)
///
/// Records are filtered, sorted and gap-filled first (see [`fill_gaps`]).
/// The weight field width is picked once from the largest weight in the
/// filled range and applied to every day.
#[must_use]
pub fn encode_payload(records: &[Measurement]) -> Option<String> {
    let filled = fill_gaps(records);
    let first = filled.first()?;

    let max_weight = filled
        .iter()
        .map(|m| m.weight)
        .fold(f64::NEG_INFINITY, f64::max);
    let width = DigitWidth::for_max_weight(max_weight);
    let w = width.chars();

    let mut out = String::with_capacity(DATE_DIGITS + 5 + filled.len() * (w + FAT_DIGITS));

    // Writing into a String cannot fail
    let _ = write!(out, "{}-{w}-", first.date.format("%Y%m%d"));
    for m in &filled {
        let _ = write!(out, "{:0w$}", width.scale_weight(m.weight));
    }
    out.push('-');
    for m in &filled {
        let _ = write!(out, "{:0width$}", round_to_u64(m.fat_rate * TENTHS), width = FAT_DIGITS);
    }

    Some(out)
}

/// Build a dense, date-ordered sequence covering every day of the input range
///
/// Unshareable records (weight or fat rate `<= 0`) are dropped. When a date
/// appears more than once, the earliest occurrence in the input wins. Days
/// without a record repeat the most recent earlier day's values; nothing is
/// interpolated or back-filled.
#[must_use]
pub fn fill_gaps(records: &[Measurement]) -> Vec<Measurement> {
    let mut by_date: BTreeMap<NaiveDate, &Measurement> = BTreeMap::new();
    for m in records.iter().filter(|m| m.is_shareable()) {
        by_date.entry(m.date).or_insert(m);
    }

    let (Some((&first, &seed)), Some((&last, _))) =
        (by_date.first_key_value(), by_date.last_key_value())
    else {
        return Vec::new();
    };

    let span = usize::try_from((last - first).num_days()).unwrap_or(0) + 1;
    let mut filled = Vec::with_capacity(span);
    let mut last_seen = seed;

    for day in first.iter_days().take_while(|day| *day <= last) {
        if let Some(&m) = by_date.get(&day) {
            last_seen = m;
            filled.push(m.clone());
        } else {
            filled.push(Measurement::new(day, last_seen.weight, last_seen.fat_rate));
        }
    }

    filled
}
