//! `weightshare` - Compact share links for daily weight and body-fat logs
//!
//! Turns a run of daily (weight, body-fat %) measurements into a short,
//! URL-safe text payload and back. A shared link carries a read-only snapshot
//! of a date range with no server round trip.
//!
//! # Features
//! - **Dense by construction**: every day in the range is present; missing days
//!   repeat the previous day's values (forward-fill)
//! - **Adaptive width**: weights are 3 digits, or 4 when any weight is 100 kg or
//!   more
//! - **Lenient decode**: malformed input yields `None`, never a panic; weight
//!   and fat columns of different length are cut to the shorter one
//! - **Record utilities**: validation, an in-memory ledger, monthly and overall
//!   statistics, and JSON export/import
//!
//! # Lossy vs Lossless
//!
//! Dates round-trip exactly. Values are rounded on encode: weight to whole
//! kilograms at width 3 or to 0.1 kg at width 4, fat rate always to 0.1%.
//! Gap-filled days come back as real records.
//!
//! # Example
//! ```
//! use chrono::NaiveDate;
//! use weightshare::{decode, encode, payload_from_url, Measurement};
//!
//! let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
//! let records = [
//!     Measurement::new(day(1), 70.0, 18.0),
//!     Measurement::new(day(3), 70.5, 18.5),
//! ];
//!
//! let url = encode(&records, "http://localhost:5173").unwrap();
//! assert_eq!(url, "http://localhost:5173/share?20240101-3-070070071-180180185");
//!
//! let shared = decode(payload_from_url(&url).unwrap()).unwrap();
//! assert_eq!(shared.len(), 3); // Jan 2 was filled from Jan 1
//! ```
//!
//! # Wire Format
//!
//! ```text
//! <YYYYMMDD>-<n>-<weights>-<fats>
//! ```
//!
//! | Field | Size | Description |
//! |-------|------|-------------|
//! | `YYYYMMDD` | 8 | First day of the range |
//! | `n` | 1 | Weight field width, `3` or `4` |
//! | `weights` | N × n | Zero-padded weights, one per consecutive day. Width 3: whole kg. Width 4: kg × 10. |
//! | `fats` | N × 3 | Zero-padded fat rate × 10, one per consecutive day |
//!
//! The full link is `<origin>/share?<payload>`; the payload is a bare query key,
//! not a `key=value` pair.
//!
//! ## Decoding Rules
//!
//! | Input | Result |
//! |-------|--------|
//! | Not four `-` separated fields, or non-digit date/width | `None` |
//! | Width other than 3 or 4 | `None` |
//! | Year 0, month outside 1-12, day outside 1-31 | `None` |
//! | Day past the end of its month (e.g. Feb 31) | Rolls into the next month |
//! | Trailing partial chunk | Dropped |
//! | Chunk containing a non-digit | Skipped |
//! | Different weight and fat counts | Shorter count wins |
//! | No complete pair | `None` |

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

mod archive;
mod constants;
mod decoder;
mod encoder;
mod error;
mod ledger;
mod measurement;
mod stats;
mod url;

#[cfg(test)]
mod tests;

// Re-export public API
pub use archive::{export, export_file_name, import_into, parse_import, to_json, ExportData};
pub use constants::DigitWidth;
pub use decoder::decode;
pub use encoder::{encode, encode_payload, fill_gaps};
pub use error::{ArchiveError, ValidationError};
pub use ledger::{ImportReport, Ledger};
pub use measurement::Measurement;
pub use stats::{available_months, month_bounds, MonthCount, MonthlyStats, OverallStats, ShareSummary};
pub use url::{payload_from_url, share_url};
