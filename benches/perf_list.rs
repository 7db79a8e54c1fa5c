//! Benchmarks for list operations.
//!
//! Compares the arena-backed lists against `std::collections::VecDeque`
//! for the front/back operations both can express, and measures the O(n)
//! positional operations at a few list sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use listkit::{OwnedDoublyList, OwnedSinglyList};
use std::collections::VecDeque;

fn bench_push_pop_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop_front");

    group.bench_function("singly/u64", |b| {
        let mut list: OwnedSinglyList<u64> = OwnedSinglyList::with_capacity(1024);
        b.iter(|| {
            list.push_front(black_box(42));
            black_box(list.pop_front())
        });
    });

    group.bench_function("doubly/u64", |b| {
        let mut list: OwnedDoublyList<u64> = OwnedDoublyList::with_capacity(1024);
        b.iter(|| {
            list.push_front(black_box(42));
            black_box(list.pop_front())
        });
    });

    group.bench_function("vecdeque/u64", |b| {
        let mut deque: VecDeque<u64> = VecDeque::with_capacity(1024);
        b.iter(|| {
            deque.push_front(black_box(42));
            black_box(deque.pop_front())
        });
    });

    group.finish();
}

fn bench_pop_back(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop_back");

    for size in [16usize, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("singly", size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let mut list: OwnedSinglyList<u64> = OwnedSinglyList::with_capacity(size);
                    for i in 0..size as u64 {
                        list.push_front(i);
                    }
                    list
                },
                |mut list| black_box(list.pop_back()),
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("doubly", size), &size, |b, &size| {
            b.iter_batched(
                || {
                    let mut list: OwnedDoublyList<u64> = OwnedDoublyList::with_capacity(size);
                    for i in 0..size as u64 {
                        list.push_front(i);
                    }
                    list
                },
                |mut list| black_box(list.pop_back()),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_positional(c: &mut Criterion) {
    let mut group = c.benchmark_group("positional");

    for size in [16usize, 256, 1024] {
        group.bench_with_input(
            BenchmarkId::new("singly_insert_middle", size),
            &size,
            |b, &size| {
                b.iter_batched(
                    || {
                        let mut list: OwnedSinglyList<u64> = OwnedSinglyList::with_capacity(size);
                        for i in 0..size as u64 {
                            list.push_front(i);
                        }
                        list
                    },
                    |mut list| list.insert(black_box(size / 2), 42),
                    criterion::BatchSize::SmallInput,
                );
            },
        );

        group.bench_with_input(
            BenchmarkId::new("doubly_position_of", size),
            &size,
            |b, &size| {
                let mut list: OwnedDoublyList<u64> = OwnedDoublyList::with_capacity(size);
                for i in 0..size as u64 {
                    list.push_front(i);
                }
                b.iter(|| black_box(list.position_of(black_box(&0))));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_push_pop_front,
    bench_pop_back,
    bench_positional
);
criterion_main!(benches);
