#![no_main]

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use libfuzzer_sys::fuzz_target;
use weightshare::{fill_gaps, Measurement};

fuzz_target!(|data: &[u8]| {
    let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();

    // Each 3 bytes = (day offset, weight, fat rate); zero values are dropped
    let records: Vec<Measurement> = data
        .chunks_exact(3)
        .map(|c| {
            let date = start.checked_add_days(Days::new(u64::from(c[0]))).unwrap();
            Measurement::new(date, f64::from(c[1]), f64::from(c[2] % 101))
        })
        .collect();

    // Earliest occurrence per day among shareable records
    let mut expected: BTreeMap<NaiveDate, &Measurement> = BTreeMap::new();
    for r in records.iter().filter(|r| r.is_shareable()) {
        expected.entry(r.date).or_insert(r);
    }

    let filled = fill_gaps(&records);
    if expected.is_empty() {
        assert!(filled.is_empty());
        return;
    }

    // Property: one record per day, real days untouched, gaps copy the day before
    let first = *expected.keys().next().unwrap();
    let last = *expected.keys().next_back().unwrap();
    assert_eq!(filled.len() as i64, (last - first).num_days() + 1);

    for (i, r) in filled.iter().enumerate() {
        assert_eq!(r.date, first.checked_add_days(Days::new(i as u64)).unwrap());
        match expected.get(&r.date) {
            Some(real) => {
                assert_eq!(r.weight, real.weight);
                assert_eq!(r.fat_rate, real.fat_rate);
            }
            None => {
                let prev = &filled[i - 1];
                assert_eq!(r.weight, prev.weight);
                assert_eq!(r.fat_rate, prev.fat_rate);
            }
        }
    }
});
