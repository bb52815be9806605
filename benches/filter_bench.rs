//! Benchmark for specification filtering.
//!
//! Compares the hard-coded `ProductFilter` with `BetterFilter` driven by
//! composed specifications.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use solid::prelude::*;
use std::hint::black_box;

fn catalogue(size: usize) -> Vec<Product> {
    (0..size)
        .map(|index| {
            Product::new(
                format!("product-{index}"),
                Color::ALL[index % Color::ALL.len()],
                Size::ALL[(index / Color::ALL.len()) % Size::ALL.len()],
            )
        })
        .collect()
}

// =============================================================================
// Single Criterion
// =============================================================================

fn benchmark_filter_by_color(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter_by_color");

    for size in [100, 1000, 10000] {
        let products = catalogue(size);
        let green = ColorSpecification::new(Color::Green);

        group.bench_with_input(
            BenchmarkId::new("ProductFilter", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(ProductFilter.by_color(&products, Color::Green)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BetterFilter", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(BetterFilter.filter(&products, &green)));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Conjunction
// =============================================================================

fn benchmark_filter_by_conjunction(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter_by_conjunction");

    for size in [100, 1000, 10000] {
        let products = catalogue(size);
        let green_and_large =
            ColorSpecification::new(Color::Green).and(SizeSpecification::new(Size::Large));
        let folded = SharedSpecification::combine_all([
            ColorSpecification::new(Color::Green).shared(),
            SizeSpecification::new(Size::Large).shared(),
        ]);

        group.bench_with_input(
            BenchmarkId::new("ProductFilter", size),
            &size,
            |bencher, _| {
                bencher.iter(|| {
                    black_box(ProductFilter.by_size_and_color(
                        &products,
                        Color::Green,
                        Size::Large,
                    ))
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("AndSpecification", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(BetterFilter.filter(&products, &green_and_large)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("combine_all", size),
            &size,
            |bencher, _| {
                bencher.iter(|| black_box(BetterFilter.filter(&products, &folded)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_filter_by_color,
    benchmark_filter_by_conjunction
);

criterion_main!(benches);
