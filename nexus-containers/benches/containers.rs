//! Benchmarks for priority queue and randomized queue throughput.
//!
//! Compares the heap engine against `std::collections::BinaryHeap`.

use std::collections::BinaryHeap;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nexus_containers::{MaxPriorityQueue, MinPriorityQueue, RandomizedQueue};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 3] = [64, 1024, 16384];

fn scrambled(n: usize) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(12345);
    (0..n).map(|_| rng.gen()).collect()
}

// ============================================================================
// Priority queue
// ============================================================================

fn bench_fill_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_drain");

    for n in SIZES {
        let values = scrambled(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("nexus_max", n), &values, |b, values| {
            b.iter(|| {
                let mut pq: MaxPriorityQueue<u64> = MaxPriorityQueue::new();
                for &v in values {
                    pq.insert(v);
                }
                while let Ok(v) = pq.del_max() {
                    black_box(v);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("std_binary_heap", n), &values, |b, values| {
            b.iter(|| {
                let mut heap = BinaryHeap::new();
                for &v in values {
                    heap.push(v);
                }
                while let Some(v) = heap.pop() {
                    black_box(v);
                }
            });
        });
    }

    group.finish();
}

fn bench_steady_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("steady_state");

    for n in SIZES {
        let values = scrambled(n);

        group.bench_function(BenchmarkId::new("nexus_min/insert_del_min", n), |b| {
            let mut pq: MinPriorityQueue<u64> = values.iter().copied().collect();
            let mut next = 0u64;
            b.iter(|| {
                next = next.wrapping_add(0x9E37_79B9_7F4A_7C15);
                pq.insert(black_box(next));
                black_box(pq.del_min().unwrap())
            });
        });
    }

    group.finish();
}

// ============================================================================
// Randomized queue
// ============================================================================

fn bench_randomized(c: &mut Criterion) {
    let mut group = c.benchmark_group("randomized");

    for n in SIZES {
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(BenchmarkId::new("enqueue_dequeue", n), |b| {
            b.iter(|| {
                let mut rq = RandomizedQueue::with_rng(SmallRng::seed_from_u64(1));
                for i in 0..n as u64 {
                    rq.enqueue(i);
                }
                while let Ok(v) = rq.dequeue() {
                    black_box(v);
                }
            });
        });

        group.bench_function(BenchmarkId::new("sample", n), |b| {
            let mut rq = RandomizedQueue::with_rng(SmallRng::seed_from_u64(1));
            rq.extend(0..n as u64);
            b.iter(|| black_box(*rq.sample().unwrap()));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = bench_fill_drain, bench_steady_state, bench_randomized
}
criterion_main!(benches);
