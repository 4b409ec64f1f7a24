#![no_main]

use chrono::{Days, NaiveDate};
use libfuzzer_sys::fuzz_target;
use weightshare::{decode, encode_payload, fill_gaps, Measurement};

fuzz_target!(|data: &[u8]| {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    // Each 4 bytes = (day offset, weight kg, weight tenths, fat rate)
    let records: Vec<Measurement> = data
        .chunks_exact(4)
        .map(|c| {
            let date = start.checked_add_days(Days::new(u64::from(c[0]))).unwrap();
            let weight = f64::from(c[1]) + f64::from(c[2] % 10) / 10.0;
            let fat_rate = f64::from(c[3] % 100);
            Measurement::new(date, weight, fat_rate)
        })
        .collect();

    let filled = fill_gaps(&records);
    let Some(payload) = encode_payload(&records) else {
        assert!(filled.is_empty(), "filled records but no payload");
        return;
    };

    // Property: every filled day comes back, in order
    let decoded = decode(&payload).expect("encoder output must decode");
    assert_eq!(decoded.len(), filled.len(), "payload {payload}");

    let wide = filled.iter().any(|r| r.weight >= 100.0);
    let tolerance = if wide { 0.05 } else { 0.5 } + 1e-9;
    for (d, f) in decoded.iter().zip(&filled) {
        assert_eq!(d.date, f.date);
        assert!((d.weight - f.weight).abs() <= tolerance, "weight {} -> {}", f.weight, d.weight);
        assert!((d.fat_rate - f.fat_rate).abs() <= 0.05 + 1e-9, "fat {} -> {}", f.fat_rate, d.fat_rate);
    }
});
