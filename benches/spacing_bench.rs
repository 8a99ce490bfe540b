use std::hint::black_box;

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use timeline_rs::core::{SpacingConstraints, Viewport, cumulative_separation};
use timeline_rs::host::{TimelineHost, TimelineHostConfig};

fn generated_dates(count: i64) -> Vec<DateTime<Utc>> {
    let start = Utc
        .with_ymd_and_hms(1970, 1, 1, 0, 0, 0)
        .single()
        .expect("valid epoch");

    let mut current = start;
    (0..count)
        .map(|i| {
            current = current + Duration::days(i % 90);
            current
        })
        .collect()
}

fn bench_cumulative_separation_10k(c: &mut Criterion) {
    let dates = generated_dates(10_000);
    let spacing = SpacingConstraints::default();

    c.bench_function("cumulative_separation_10k", |b| {
        b.iter(|| {
            let _ = cumulative_separation(black_box(&dates), black_box(spacing))
                .expect("layout should succeed");
        })
    });
}

fn bench_host_layout_1k(c: &mut Criterion) {
    let config = TimelineHostConfig::new(Viewport::new(1600, 100));
    let host = TimelineHost::new(config).expect("host init");

    let start = Utc
        .with_ymd_and_hms(1970, 1, 1, 0, 0, 0)
        .single()
        .expect("valid epoch");
    let values: Vec<String> = (0..1_000)
        .map(|i| (start + Duration::days(i * 3)).format("%Y-%m-%d").to_string())
        .collect();
    let names: Vec<String> = (0..1_000).map(|i| format!("event-{i}")).collect();

    c.bench_function("host_layout_1k", |b| {
        b.iter(|| {
            let _ = host
                .layout(black_box(&values), black_box(&names))
                .expect("layout should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_cumulative_separation_10k,
    bench_host_layout_1k
);
criterion_main!(benches);
