//! # BD-01 Name Index Benchmarks
//!
//! | Operation | Expected cost |
//! |-----------|---------------|
//! | `add` / `remove` / `search` | O(log n) |
//! | `digest` | O(n), full recomputation |
//! | `verify` | O(n) |
//!
//! Keys arrive in random order, as hex SHA-256 digests would.

use bd_01_name_index::{IndexRecord, NameIndex, NameKey};
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};
use shared_types::Transaction;
use std::time::Duration;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn entries(n: usize) -> Vec<(NameKey, IndexRecord)> {
    let mut entries: Vec<_> = (0..n)
        .map(|i| {
            let domain = format!("bench{i}.bdns");
            let tx = Transaction::register(i as u64, domain.clone(), "10.0.0.1", [0u8; 32], 0);
            (NameKey::from_domain(&domain), IndexRecord::new(tx, 0))
        })
        .collect();
    entries.shuffle(&mut StdRng::seed_from_u64(42));
    entries
}

fn filled(entries: &[(NameKey, IndexRecord)]) -> NameIndex {
    let mut index = NameIndex::new();
    for (key, record) in entries {
        index.add(key.clone(), record.clone());
    }
    index
}

pub fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("bd-01-insert");
    group.measurement_time(Duration::from_secs(10));

    for size in SIZES {
        let data = entries(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("build", size), &data, |b, data| {
            b.iter(|| black_box(filled(data)))
        });
    }
    group.finish();
}

pub fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("bd-01-search");

    for size in SIZES {
        let data = entries(size);
        let index = filled(&data);
        let probe = &data[size / 2].0;
        group.bench_with_input(BenchmarkId::new("hit", size), &index, |b, index| {
            b.iter(|| black_box(index.search(probe)))
        });
    }
    group.finish();
}

pub fn bench_update_and_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("bd-01-mutate");

    for size in SIZES {
        let data = entries(size);
        let index = filled(&data);
        let (key, record) = data[size / 3].clone();

        group.bench_with_input(BenchmarkId::new("update", size), &index, |b, index| {
            b.iter_batched(
                || index.clone(),
                |mut index| {
                    index.update(key.clone(), record.clone());
                    index
                },
                criterion::BatchSize::LargeInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("remove", size), &index, |b, index| {
            b.iter_batched(
                || index.clone(),
                |mut index| {
                    black_box(index.remove(&key));
                    index
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

pub fn bench_digest_and_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("bd-01-digest");
    group.measurement_time(Duration::from_secs(10));

    for size in SIZES {
        let index = filled(&entries(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("digest", size), &index, |b, index| {
            b.iter(|| black_box(index.digest()))
        });
        group.bench_with_input(BenchmarkId::new("verify", size), &index, |b, index| {
            b.iter(|| black_box(index.verify().is_ok()))
        });
    }
    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_insert(c);
    bench_search(c);
    bench_update_and_remove(c);
    bench_digest_and_verify(c);
}
