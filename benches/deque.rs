use std::{
    collections::{LinkedList, VecDeque},
    hint::black_box,
};

use criterion::{Criterion, criterion_group, criterion_main};
use linked_deque::Deque;

const N: u64 = 1_000;

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back then pop_front (1000)");

    group.bench_function("linked_deque::Deque", |b| {
        b.iter(|| {
            let mut d = Deque::new();
            for i in 0..N {
                d.push_back(black_box(i));
            }
            while let Some(v) = d.pop_front() {
                black_box(v);
            }
        })
    });

    group.bench_function("std::collections::LinkedList", |b| {
        b.iter(|| {
            let mut d = LinkedList::new();
            for i in 0..N {
                d.push_back(black_box(i));
            }
            while let Some(v) = d.pop_front() {
                black_box(v);
            }
        })
    });

    group.bench_function("std::collections::VecDeque", |b| {
        b.iter(|| {
            let mut d = VecDeque::new();
            for i in 0..N {
                d.push_back(black_box(i));
            }
            while let Some(v) = d.pop_front() {
                black_box(v);
            }
        })
    });

    group.finish();
}

fn bench_splice(c: &mut Criterion) {
    let mut group = c.benchmark_group("splice (1000 + 1000)");

    group.bench_function("linked_deque::Deque", |b| {
        b.iter_batched(
            || {
                let a: Deque<u64> = (0..N).collect();
                let other: Deque<u64> = (0..N).collect();
                (a, other)
            },
            |(mut a, mut other)| {
                a.splice(&mut other);
                a
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("std::collections::VecDeque::append", |b| {
        b.iter_batched(
            || {
                let a: VecDeque<u64> = (0..N).collect();
                let other: VecDeque<u64> = (0..N).collect();
                (a, other)
            },
            |(mut a, mut other)| {
                a.append(&mut other);
                a
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let source: Deque<u64> = (0..N).collect();
    c.bench_function("clone (1000)", |b| b.iter(|| black_box(&source).clone()));
}

criterion_group!(benches, bench_push_pop, bench_splice, bench_clone);
criterion_main!(benches);
