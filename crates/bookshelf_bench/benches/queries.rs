//! Catalog query benchmarks.

use bookshelf_core::Library;
use bookshelf_testkit::fixtures;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const BOOKS_PER_AUTHOR: usize = 4;

fn synthetic(author_count: usize) -> Library {
    fixtures::synthetic_library(author_count, BOOKS_PER_AUTHOR)
}

/// Benchmark the active-author scan.
fn bench_active_authors(c: &mut Criterion) {
    let mut group = c.benchmark_group("active_authors");

    for size in [10usize, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let library = synthetic(size);
            b.iter(|| black_box(&library).active_authors().count());
        });
    }
    group.finish();
}

/// Benchmark the flatten-and-filter over all books.
fn bench_published_books(c: &mut Criterion) {
    let mut group = c.benchmark_group("published_books");

    for size in [10usize, 100, 1000].iter() {
        group.throughput(Throughput::Elements((*size * BOOKS_PER_AUTHOR) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let library = synthetic(size);
            b.iter(|| black_box(&library).published_books().count());
        });
    }
    group.finish();
}

/// Benchmark the average-price aggregate.
fn bench_average_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("average_price");

    for size in [10usize, 100, 1000].iter() {
        group.throughput(Throughput::Elements((*size * BOOKS_PER_AUTHOR) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let library = synthetic(size);
            b.iter(|| black_box(&library).average_price());
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_active_authors,
    bench_published_books,
    bench_average_price
);
criterion_main!(benches);
