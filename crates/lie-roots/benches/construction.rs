//! Construction benchmarks across the families.
//!
//! Construction is the only real work in the crate — every query
//! afterward is a plain read — so the benchmark surface is one
//! function per representative system.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lie_roots::{RootSystem, Series};

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for (name, series, rank) in [
        ("A_8", Series::A, 8),
        ("B_8", Series::B, 8),
        ("D_8", Series::D, 8),
        ("E_8", Series::E, 8),
        ("F_4", Series::F, 4),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| RootSystem::new(black_box(series), black_box(rank)).unwrap());
        });
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let e8 = RootSystem::new(Series::E, 8).unwrap();
    let theta = e8.highest_root().clone();

    c.bench_function("contains_highest_root_e8", |b| {
        b.iter(|| e8.contains(black_box(&theta)));
    });

    c.bench_function("scalar_product_e8", |b| {
        b.iter(|| e8.scalar_product(black_box(&theta), black_box(&theta)));
    });
}

criterion_group!(benches, bench_construction, bench_queries);
criterion_main!(benches);
