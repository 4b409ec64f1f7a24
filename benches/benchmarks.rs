use chrono::{Days, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use weightshare::{decode, encode_payload, Measurement};

/// Daily records with every third day missing
fn sample_records(days: u64) -> Vec<Measurement> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    (0..days)
        .filter(|i| i % 3 != 2)
        .map(|i| {
            let date = start.checked_add_days(Days::new(i)).unwrap();
            Measurement::new(date, 72.0 + (i % 7) as f64 * 0.3, 20.0 + (i % 5) as f64 * 0.2)
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for days in [30, 365, 3650] {
        let records = sample_records(days);
        group.throughput(Throughput::Elements(days));
        group.bench_function(format!("{days}_days"), |b| {
            b.iter(|| black_box(encode_payload(black_box(&records))))
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let payload = encode_payload(&sample_records(3650)).unwrap();

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(3650));
    group.bench_function("3650_days", |b| b.iter(|| black_box(decode(black_box(&payload)))));
    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let records = sample_records(365);

    let mut group = c.benchmark_group("roundtrip");
    group.throughput(Throughput::Elements(365));
    group.bench_function("365_days", |b| {
        b.iter(|| {
            let payload = encode_payload(black_box(&records)).unwrap();
            black_box(decode(&payload))
        })
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_roundtrip);
criterion_main!(benches);
