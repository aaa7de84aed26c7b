//! This bench test sorts and queries a large, shuffled course catalog.

#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use planner::{storage::parse_catalog, Catalog, Config, CourseId};

/// Generates catalog text with interleaved departments, so the lines are far
/// from sorted order.
fn catalog_text(courses: usize) -> String {
    const DEPARTMENTS: [&str; 5] = ["MATH", "CSCI", "PHYS", "BIOL", "CHEM"];

    (0..courses)
        .map(|i| {
            let department = DEPARTMENTS[i % DEPARTMENTS.len()];
            let number = (i * 7919) % 10_000;
            format!("{department}{number:04},Course {i},{department}{:04}\n", number / 2)
        })
        .collect()
}

fn sort_catalog(c: &mut Criterion) {
    let text = catalog_text(10_000);
    let parsed = parse_catalog(&text, &Config::default());

    c.bench_function("sort 10k courses", |b| {
        b.iter_batched(
            || parsed.courses.iter().cloned().collect::<Catalog>(),
            |mut catalog| catalog.sort(),
            BatchSize::LargeInput,
        );
    });

    let mut catalog: Catalog = parsed.courses.into_iter().collect();
    catalog.sort();
    let query = CourseId::new("PHYS5000").unwrap();

    c.bench_function("find in 10k courses", |b| {
        b.iter(|| catalog.find(&query));
    });
}

fn parse_large_catalog(c: &mut Criterion) {
    let text = catalog_text(10_000);

    c.bench_function("parse 10k lines", |b| {
        b.iter(|| parse_catalog(&text, &Config::default()));
    });
}

criterion_group!(benches, sort_catalog, parse_large_catalog);
criterion_main!(benches);
