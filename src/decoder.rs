//! Decoding functionality for share payloads.

use chrono::{Days, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::{parse_digits, DigitWidth, FAT_DIGITS, TENTHS};
use crate::measurement::Measurement;

lazy_static! {
    // Blobs are greedy, so a stray '-' inside the data ends up in the weights
    static ref PAYLOAD_REGEX: Regex =
        Regex::new(r"^([0-9]{8})-([0-9])-(.+)-(.+)$").expect("payload pattern is valid");
}

/// Decode a share payload back to measurements
///
/// # Arguments
/// * `payload` - Query-string content without the leading `?`
///
/// # Returns
/// * `Some(records)` - One record per consecutive day from the start date,
///   identified as `shared-0`, `shared-1`, ...
/// * `None` - The payload is malformed or holds no complete value pair
///
/// Weight and fat blobs are chunked independently and the result is cut to the
/// shorter of the two; a trailing partial chunk and any chunk that is not all
/// digits are dropped. The start day is only range-checked to 1..=31, so a day
/// past the end of its month rolls into the next month.
///
/// # Example
/// ```
/// use weightshare::decode;
///
/// let records = decode("20240101-3-070071-180185").unwrap();
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[1].date.to_string(), "2024-01-02");
/// ```
#[must_use = "decoding returns records that should be used"]
pub fn decode(payload: &str) -> Option<Vec<Measurement>> {
    let caps = PAYLOAD_REGEX.captures(payload)?;
    let date_digits = caps.get(1)?.as_str().as_bytes();
    let width_digit = caps.get(2)?.as_str().as_bytes();
    let weights_blob = caps.get(3)?.as_str().as_bytes();
    let fats_blob = caps.get(4)?.as_str().as_bytes();

    let width = DigitWidth::from_digit(*width_digit.first()? - b'0')?;
    let start = start_date(date_digits)?;

    let weights: Vec<f64> = weights_blob
        .chunks_exact(width.chars())
        .filter_map(parse_digits)
        .map(|raw| width.unscale_weight(raw))
        .collect();
    let fats: Vec<f64> = fats_blob
        .chunks_exact(FAT_DIGITS)
        .filter_map(parse_digits)
        .map(|raw| f64::from(raw) / TENTHS)
        .collect();

    let count = weights.len().min(fats.len());
    if count == 0 {
        return None;
    }

    let mut records = Vec::with_capacity(count);
    for (i, (&weight, &fat_rate)) in weights.iter().zip(&fats).enumerate() {
        let date = start.checked_add_days(Days::new(i as u64))?;
        records.push(Measurement::new(date, weight, fat_rate).with_id(format!("shared-{i}")));
    }

    Some(records)
}

/// Parse the compact `YYYYMMDD` start date
///
/// Rejects a zero year, month outside 1..=12 and day outside 1..=31. The day
/// is then added to the first of the month, so `20230231` lands on 2023-03-03.
fn start_date(digits: &[u8]) -> Option<NaiveDate> {
    let year = parse_digits(digits.get(0..4)?)?;
    let month = parse_digits(digits.get(4..6)?)?;
    let day = parse_digits(digits.get(6..8)?)?;

    if year == 0 || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    let first_of_month = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, 1)?;
    first_of_month.checked_add_days(Days::new(u64::from(day - 1)))
}
