//! Internal constants and helper functions for share payload encoding.

/// Path segment the share page is served under
pub(crate) const SHARE_PATH: &str = "/share";

/// Number of digits in the compact start date (`YYYYMMDD`)
pub(crate) const DATE_DIGITS: usize = 8;

/// Fat rate field width; always one implied decimal
pub(crate) const FAT_DIGITS: usize = 3;

/// Weights at or above this value switch the payload to 4-digit fields
pub(crate) const WIDE_WEIGHT_THRESHOLD: f64 = 100.0;

/// Scale for one implied decimal digit
pub(crate) const TENTHS: f64 = 10.0;

/// Version written into JSON exports
pub(crate) const EXPORT_VERSION: u32 = 1;

/// Per-payload weight field width
///
/// Chosen once per payload from the maximum weight; never per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitWidth {
    /// Whole kilograms, 3 digits (weights below 100)
    Three,
    /// Tenths of a kilogram, 4 digits (any weight at or above 100)
    Four,
}

impl DigitWidth {
    /// Pick the width that fits `max_weight`
    #[inline]
    #[must_use]
    pub fn for_max_weight(max_weight: f64) -> Self {
        if max_weight >= WIDE_WEIGHT_THRESHOLD {
            Self::Four
        } else {
            Self::Three
        }
    }

    /// Parse the single-digit selector from a payload
    #[inline]
    #[must_use]
    pub fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            _ => None,
        }
    }

    /// Field width in characters
    #[inline]
    #[must_use]
    pub const fn chars(self) -> usize {
        match self {
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Integer written for `weight` at this width
    #[inline]
    #[must_use]
    pub fn scale_weight(self, weight: f64) -> u64 {
        match self {
            Self::Three => round_to_u64(weight),
            Self::Four => round_to_u64(weight * TENTHS),
        }
    }

    /// Weight restored from a parsed field
    #[inline]
    #[must_use]
    pub fn unscale_weight(self, raw: u32) -> f64 {
        match self {
            Self::Three => f64::from(raw),
            Self::Four => f64::from(raw) / TENTHS,
        }
    }
}

/// Round half away from zero, saturating into `u64`
///
/// Encoded values are always positive, so this matches round-half-up.
#[inline]
pub(crate) fn round_to_u64(x: f64) -> u64 {
    x.round() as u64
}

/// Parse a fixed-width field made only of ASCII digits
#[inline]
pub(crate) fn parse_digits(chunk: &[u8]) -> Option<u32> {
    if chunk.is_empty() || !chunk.iter().all(u8::is_ascii_digit) {
        return None;
    }
    chunk
        .iter()
        .try_fold(0u32, |acc, &b| acc.checked_mul(10)?.checked_add(u32::from(b - b'0')))
}
