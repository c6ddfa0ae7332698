use chrono::{DateTime, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wastemap_model::{danube_basin, Country, Size, Status, WasteRecord, WasteType};
use wastemap_query::{facet_counts, FilterSelection};

fn cutoff() -> DateTime<Utc> {
    "2022-01-01T00:00:00Z".parse().expect("timestamp")
}

fn synthetic_records(count: usize) -> Vec<WasteRecord> {
    let rivers = ["TISZA", "SZAMOS", "DUNA", "ZAGYVA", "UNKNOWN_RIVER"];
    let countries = Country::ALL;
    let sizes = Size::ALL;
    let statuses = Status::ALL;
    (0..count)
        .map(|i| {
            let types = if i % 3 == 0 {
                [WasteType::Plastic, WasteType::Metal].into_iter().collect()
            } else {
                std::collections::BTreeSet::new()
            };
            WasteRecord::new(
                i as u64,
                46.0 + (i % 100) as f64 * 0.01,
                18.0 + (i % 100) as f64 * 0.01,
                countries[i % countries.len()],
                sizes[i % sizes.len()],
                statuses[i % statuses.len()],
                types,
                rivers[i % rivers.len()].to_string(),
                "2023-06-01T00:00:00Z".parse().expect("timestamp"),
                i % 17 == 0,
            )
        })
        .collect()
}

fn bench_facet_counts(c: &mut Criterion) {
    let basin = danube_basin();
    let records = synthetic_records(2_000);
    let selection = FilterSelection::from_tokens(basin, ["HUNGARY", "BAG", "STILLHERE", "TISZA"]);

    c.bench_function("facet_counts_2k_records", |b| {
        b.iter(|| {
            facet_counts(
                black_box(&records),
                basin,
                black_box(&selection),
                cutoff(),
                false,
            )
        })
    });
}

criterion_group!(benches, bench_facet_counts);
criterion_main!(benches);
