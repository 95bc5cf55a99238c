//! Criterion benchmark for the sum_of_primes program
//!
//! This provides detailed performance analysis using the Criterion benchmarking framework.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use primesum::{PrimalityTable, Sieve, Summary, sum_of_primes};

fn bench_sum_of_primes(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_of_primes");

    for bound in [100usize, 10_000, 1_000_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(bound), bound, |b, &bound| {
            b.iter(|| sum_of_primes(black_box(bound)))
        });
    }

    group.finish();
}

fn bench_sieve_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve_only");

    // Excludes the final summation pass
    for bound in [10_000usize, 1_000_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(bound), bound, |b, &bound| {
            b.iter(|| {
                let mut table = PrimalityTable::new(black_box(bound));
                table.sieve();
                table
            })
        });
    }

    group.finish();
}

fn bench_summary(c: &mut Criterion) {
    let sieve = Sieve::run(1_000_000);

    c.bench_function("summary_1000000", |b| {
        b.iter(|| Summary::new(black_box(&sieve)).to_string())
    });
}

criterion_group!(benches, bench_sum_of_primes, bench_sieve_only, bench_summary);
criterion_main!(benches);
