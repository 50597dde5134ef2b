// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the roster filter.
//!
//! Measures the performance of:
//! - Decoding a large animal array
//! - Applying each filter tag
//! - Tallying the per-button counts

use criterion::{criterion_group, criterion_main, Criterion};
use pet_roster::domain::{filter, Animal, FilterCounts, FilterTag, Species};
use pet_roster::infrastructure::http::decode::decode_animals;
use std::hint::black_box;

const RECORD_COUNT: i64 = 5_000;

fn sample_animals() -> Vec<Animal> {
    (0..RECORD_COUNT)
        .map(|id| {
            let species = Species::from_code(id % 3 + 1);
            let description = match id % 4 {
                0 => "Weiblich",
                1 => "Männlich, kastriert",
                2 => "Männlich",
                _ => "unbekannt",
            };
            Animal::new(id, format!("Pet {id}"), species).with_description(description)
        })
        .collect()
}

fn sample_body() -> String {
    let elements: Vec<String> = (0..RECORD_COUNT)
        .map(|id| {
            format!(
                r#"{{"id":{id},"name":"Pet {id}","image_url":"","description":"Weiblich","species_id":{}}}"#,
                id % 3 + 1
            )
        })
        .collect();
    format!("[{}]", elements.join(","))
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtering");
    let animals = sample_animals();

    for tag in FilterTag::ALL_TAGS {
        group.bench_function(format!("apply_{tag}"), |b| {
            b.iter(|| black_box(filter::apply(black_box(&animals), tag)));
        });
    }

    group.bench_function("tally", |b| {
        b.iter(|| black_box(FilterCounts::tally(black_box(&animals))));
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtering");
    let body = sample_body();

    group.bench_function("decode_animals", |b| {
        b.iter(|| black_box(decode_animals(black_box(body.as_bytes()))));
    });

    group.finish();
}

criterion_group!(benches, bench_apply, bench_decode);
criterion_main!(benches);
