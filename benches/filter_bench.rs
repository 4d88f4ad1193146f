//! Benchmark suite for BloomFilter
//!
//! Measures:
//! - Single insert and query cost at several filter sizes
//! - Batch insert under one lock acquisition against per-item inserts
//! - Query throughput with concurrent readers and a writer
//! - Parameter estimation
//!
//! Run with: cargo bench --bench filter_bench

use bloomguard::hash::{BloomHasher, DoubleHashing, Fnv1aHasher};
use bloomguard::{estimate_parameters, BloomFilter};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use std::thread;

const SIZES: [usize; 3] = [10_000, 100_000, 1_000_000];

fn random_keys(count: usize, seed: u64) -> Vec<[u8; 16]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen()).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert/single_thread");
    group.throughput(Throughput::Elements(1));

    for size in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let filter = BloomFilter::from_estimate(size, 0.01).unwrap();
            let mut counter = 0u64;
            b.iter(|| {
                filter.insert(black_box(&counter.to_le_bytes()));
                counter = counter.wrapping_add(1);
            });
        });
    }

    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains/single_thread");
    group.throughput(Throughput::Elements(1));

    for size in SIZES {
        let filter = BloomFilter::from_estimate(size, 0.01).unwrap();
        for i in 0..size as u64 {
            filter.insert(&(i * 2).to_le_bytes());
        }

        group.bench_with_input(BenchmarkId::new("all_hits", size), &size, |b, &size| {
            let mut counter = 0u64;
            b.iter(|| {
                let hit = filter.contains(black_box(&(counter * 2).to_le_bytes()));
                counter = (counter + 1) % size as u64;
                black_box(hit)
            });
        });

        // Misses usually stop at the first unset probe.
        group.bench_with_input(BenchmarkId::new("all_misses", size), &size, |b, _| {
            let mut counter = 1u64;
            b.iter(|| {
                let hit = filter.contains(black_box(&counter.to_le_bytes()));
                counter = counter.wrapping_add(2);
                black_box(hit)
            });
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let keys = random_keys(10_000, 42);
    group.throughput(Throughput::Elements(keys.len() as u64));

    group.bench_function("insert_batch", |b| {
        b.iter(|| {
            let filter = BloomFilter::from_estimate(keys.len(), 0.01).unwrap();
            filter.insert_batch(keys.iter().map(|k| k.as_slice()));
            black_box(filter)
        });
    });

    group.bench_function("insert_each", |b| {
        b.iter(|| {
            let filter = BloomFilter::from_estimate(keys.len(), 0.01).unwrap();
            for k in &keys {
                filter.insert(k);
            }
            black_box(filter)
        });
    });

    let filter = BloomFilter::from_estimate(keys.len(), 0.01).unwrap();
    filter.insert_batch(keys.iter().map(|k| k.as_slice()));
    group.bench_function("contains_batch", |b| {
        b.iter(|| black_box(filter.contains_batch(keys.iter().map(|k| k.as_slice()))));
    });

    group.finish();
}

fn bench_concurrent_readers(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent");
    let keys = Arc::new(random_keys(10_000, 7));

    for threads in [1usize, 2, 4, 8] {
        group.throughput(Throughput::Elements((threads * keys.len()) as u64));
        group.bench_with_input(
            BenchmarkId::new("readers", threads),
            &threads,
            |b, &threads| {
                let filter = Arc::new(BloomFilter::from_estimate(keys.len(), 0.01).unwrap());
                filter.insert_batch(keys.iter().map(|k| k.as_slice()));

                b.iter(|| {
                    let handles: Vec<_> = (0..threads)
                        .map(|_| {
                            let f = Arc::clone(&filter);
                            let ks = Arc::clone(&keys);
                            thread::spawn(move || ks.iter().filter(|k| f.contains(k.as_slice())).count())
                        })
                        .collect();
                    for h in handles {
                        black_box(h.join().unwrap());
                    }
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("readers_with_writer", threads),
            &threads,
            |b, &threads| {
                let filter = Arc::new(BloomFilter::from_estimate(keys.len() * 2, 0.01).unwrap());

                b.iter(|| {
                    let writer = {
                        let f = Arc::clone(&filter);
                        let ks = Arc::clone(&keys);
                        thread::spawn(move || {
                            for k in ks.iter() {
                                f.insert(k);
                            }
                        })
                    };
                    let readers: Vec<_> = (0..threads)
                        .map(|_| {
                            let f = Arc::clone(&filter);
                            let ks = Arc::clone(&keys);
                            thread::spawn(move || ks.iter().filter(|k| f.contains(k.as_slice())).count())
                        })
                        .collect();
                    writer.join().unwrap();
                    for h in readers {
                        black_box(h.join().unwrap());
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_hashing(c: &mut Criterion) {
    let mut group = c.benchmark_group("hashing");

    for len in [8usize, 64, 512] {
        let data = vec![0xa5u8; len];
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("fnv1a_probes_k7", len), &data, |b, data| {
            b.iter(|| {
                let hash = Fnv1aHasher.hash_bytes(black_box(data));
                DoubleHashing.probes(hash, 7, 95_851).sum::<usize>()
            });
        });
    }

    group.finish();
}

fn bench_estimate(c: &mut Criterion) {
    c.bench_function("estimate_parameters", |b| {
        b.iter(|| estimate_parameters(black_box(1_000_000), black_box(0.001)))
    });
}

criterion_group!(
    benches,
    bench_insert,
    bench_contains,
    bench_batch,
    bench_concurrent_readers,
    bench_hashing,
    bench_estimate,
);
criterion_main!(benches);
