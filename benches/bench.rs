//! Criterion benchmarks for opfind.
//!
//! - Query tokenization
//! - Ranking the built-in catalog per keystroke
//! - Ranking a large synthetic catalog

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use opfind::analysis::token_set::TokenSet;
use opfind::catalog::{Catalog, CatalogEntry};
use opfind::search::RankedResults;
use std::hint::black_box;

/// Generate a catalog of operator-like names for benchmarking.
fn generate_catalog(count: usize) -> Catalog {
    let words = [
        "band", "maths", "terrain", "correction", "speckle", "filter", "resample", "subset",
        "mosaic", "merge", "calibration", "orbit", "deburst", "split", "collocate", "mask",
        "land", "sea", "thermal", "noise", "phase", "coherence", "multilook", "binning",
    ];

    let entries = (0..count)
        .map(|i| {
            let first = words[(i * 7) % words.len()];
            let second = words[(i * 13 + 5) % words.len()];
            CatalogEntry::new(format!("{first}-{second}-{i}"))
                .with_category(format!("Raster/{}", words[(i * 3) % words.len()]))
                .with_description(format!("Applies {first} and {second} to a product."))
        })
        .collect();

    Catalog::new(entries).expect("generated names are unique")
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    for query in ["res", "terrain corr", "S1.TOPSAR.deburst split"] {
        group.bench_function(query, |b| b.iter(|| TokenSet::from_query(black_box(query))));
    }
    group.finish();
}

fn bench_keystrokes(c: &mut Criterion) {
    let catalog = Catalog::builtin().expect("built-in catalog parses");
    let ranker = RankedResults::default();
    let typed = "terrain correction";
    let prefixes: Vec<&str> = (1..=typed.len()).map(|n| &typed[..n]).collect();

    let mut group = c.benchmark_group("builtin_catalog");
    group.throughput(Throughput::Elements(prefixes.len() as u64));
    group.bench_function("type_query", |b| {
        b.iter(|| {
            for prefix in &prefixes {
                black_box(ranker.refresh(prefix, &catalog));
            }
        })
    });
    group.finish();
}

fn bench_large_catalog(c: &mut Criterion) {
    let ranker = RankedResults::default();
    let mut group = c.benchmark_group("synthetic_catalog");

    for size in [1_000, 10_000] {
        let catalog = generate_catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("rank_{size}"), |b| {
            b.iter(|| black_box(ranker.rank(black_box("spekle filt"), &catalog)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_keystrokes, bench_large_catalog);
criterion_main!(benches);
