//! Benchmarks for ordered notify set operations.
//!
//! Compares positional insert/remove against a `Vec` that has to search and
//! shift, at a few resident sizes.

use std::cell::Cell;
use std::hint::black_box;
use std::rc::Rc;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use nexus_notify_set::{OrderedNotifySet, SetChange};

const SIZES: [u64; 3] = [16, 1_024, 65_536];

fn populated(size: u64) -> OrderedNotifySet<u64> {
    let mut set = OrderedNotifySet::with_capacity(size as usize + 1);
    for v in 0..size {
        set.add_last(v).unwrap();
    }
    set
}

// ============================================================================
// Positional insert + remove
// ============================================================================

fn bench_insert_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_remove_middle");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("notify_set", size), &size, |b, &size| {
            let mut set = populated(size);
            let anchor = size / 2;
            b.iter(|| {
                set.add_after(black_box(&anchor), size).unwrap();
                black_box(set.remove(&size).unwrap())
            });
        });

        group.bench_with_input(BenchmarkId::new("vec", size), &size, |b, &size| {
            let mut vec: Vec<u64> = (0..size).collect();
            let anchor = size / 2;
            b.iter(|| {
                let pos = vec.iter().position(|&v| v == black_box(anchor)).unwrap();
                vec.insert(pos + 1, size);
                let pos = vec.iter().position(|&v| v == size).unwrap();
                black_box(vec.remove(pos))
            });
        });
    }

    group.finish();
}

// ============================================================================
// Membership
// ============================================================================

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains");

    for size in SIZES {
        let set = populated(size);
        let probe = size - 1;
        group.bench_with_input(BenchmarkId::from_parameter(size), &probe, |b, probe| {
            b.iter(|| black_box(set.contains(black_box(probe)).unwrap()));
        });
    }

    group.finish();
}

// ============================================================================
// Notification overhead
// ============================================================================

fn bench_observers(c: &mut Criterion) {
    let mut group = c.benchmark_group("observers");

    for observers in [0usize, 1, 4] {
        group.bench_with_input(
            BenchmarkId::from_parameter(observers),
            &observers,
            |b, &observers| {
                let mut set = populated(1_024);
                let hits = Rc::new(Cell::new(0u64));
                for _ in 0..observers {
                    let hits = Rc::clone(&hits);
                    let _ = set.subscribe(move |_: SetChange<&u64>| hits.set(hits.get() + 1));
                }
                b.iter(|| {
                    set.add_first(u64::MAX).unwrap();
                    set.remove(&u64::MAX).unwrap()
                });
                black_box(hits.get());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_insert_remove, bench_contains, bench_observers);
criterion_main!(benches);
