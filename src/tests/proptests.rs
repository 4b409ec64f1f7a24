use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use crate::{decode, encode_payload, fill_gaps, Measurement};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()
}

prop_compose! {
    /// Generate unsorted records scattered over ~4 months, with some days repeated
    fn arb_records()(
        entries in prop::collection::vec((0u64..120, 30.0f64..200.0, 1.0f64..60.0), 1..60),
    ) -> Vec<Measurement> {
        entries
            .into_iter()
            .map(|(offset, weight, fat_rate)| {
                let date = base_date().checked_add_days(Days::new(offset)).unwrap();
                Measurement::new(date, weight, fat_rate)
            })
            .collect()
    }
}

prop_compose! {
    /// Like `arb_records` but every weight stays below 100
    fn arb_light_records()(
        entries in prop::collection::vec((0u64..120, 30.0f64..99.0, 1.0f64..60.0), 1..60),
    ) -> Vec<Measurement> {
        entries
            .into_iter()
            .map(|(offset, weight, fat_rate)| {
                let date = base_date().checked_add_days(Days::new(offset)).unwrap();
                Measurement::new(date, weight, fat_rate)
            })
            .collect()
    }
}

proptest! {
    /// Property: the filled sequence covers every day between first and last
    #[test]
    fn prop_fill_is_dense(records in arb_records()) {
        let filled = fill_gaps(&records);
        let first = records.iter().map(|r| r.date).min().unwrap();
        let last = records.iter().map(|r| r.date).max().unwrap();

        prop_assert_eq!(filled.len() as i64, (last - first).num_days() + 1);
        for (i, r) in filled.iter().enumerate() {
            prop_assert_eq!(r.date, first.checked_add_days(Days::new(i as u64)).unwrap());
        }
    }

    /// Property: filled days copy the closest earlier real record
    #[test]
    fn prop_fill_is_forward_only(records in arb_records()) {
        let filled = fill_gaps(&records);
        for pair in filled.windows(2) {
            let is_real = records.iter().any(|r| r.date == pair[1].date);
            if !is_real {
                prop_assert_eq!(pair[1].weight, pair[0].weight);
                prop_assert_eq!(pair[1].fat_rate, pair[0].fat_rate);
            }
        }
    }

    /// Property: input order never changes the payload
    #[test]
    fn prop_order_independent(records in arb_records()) {
        // Duplicate dates resolve to the first occurrence, so dedupe first
        let mut seen = std::collections::BTreeSet::new();
        let unique: Vec<Measurement> = records.into_iter().filter(|r| seen.insert(r.date)).collect();
        let mut reversed = unique.clone();
        reversed.reverse();

        prop_assert_eq!(encode_payload(&unique), encode_payload(&reversed));
    }

    /// Property: decode(encode(x)) restores every filled day within rounding
    #[test]
    fn prop_roundtrip_within_precision(records in arb_records()) {
        let filled = fill_gaps(&records);
        let payload = encode_payload(&records).unwrap();
        let decoded = decode(&payload).unwrap();

        let wide = filled.iter().any(|r| r.weight >= 100.0);
        let weight_tolerance = if wide { 0.05 } else { 0.5 } + 1e-9;

        prop_assert_eq!(decoded.len(), filled.len());
        for (d, f) in decoded.iter().zip(&filled) {
            prop_assert_eq!(d.date, f.date);
            prop_assert!((d.weight - f.weight).abs() <= weight_tolerance,
                "weight {} decoded as {}", f.weight, d.weight);
            prop_assert!((d.fat_rate - f.fat_rate).abs() <= 0.05 + 1e-9,
                "fat rate {} decoded as {}", f.fat_rate, d.fat_rate);
        }
    }

    /// Property: light ranges use 3-digit fields
    #[test]
    fn prop_light_ranges_are_narrow(records in arb_light_records()) {
        let payload = encode_payload(&records).unwrap();
        let filled = fill_gaps(&records);
        prop_assert_eq!(&payload[9..10], "3");
        prop_assert_eq!(payload.len(), 8 + 1 + 1 + 1 + filled.len() * 3 + 1 + filled.len() * 3);
    }

    /// Property: re-encoding decoded data is a fixed point
    #[test]
    fn prop_reencode_is_stable(records in arb_records()) {
        let max = fill_gaps(&records).iter().map(|r| r.weight).fold(0.0, f64::max);
        // A narrow range whose maximum rounds up to 100 widens on the second pass
        prop_assume!(max >= 100.0 || max.round() < 100.0);

        let payload = encode_payload(&records).unwrap();
        let decoded = decode(&payload).unwrap();
        prop_assert_eq!(encode_payload(&decoded), Some(payload));
    }

    /// Property: arbitrary text never panics the decoder
    #[test]
    fn prop_decode_never_panics(input in "\\PC{0,64}") {
        let _ = decode(&input);
    }

    /// Property: decoded count never exceeds the shorter column
    #[test]
    fn prop_decode_truncates(
        width in 3u8..=4,
        weights in "[0-9]{1,40}",
        fats in "[0-9]{1,40}",
    ) {
        let payload = format!("20240101-{width}-{weights}-{fats}");
        let expected = (weights.len() / usize::from(width)).min(fats.len() / 3);
        match decode(&payload) {
            Some(records) => prop_assert_eq!(records.len(), expected),
            None => prop_assert_eq!(expected, 0),
        }
    }
}
