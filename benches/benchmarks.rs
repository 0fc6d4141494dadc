use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use pairmap::{BiMap, SetOptions};

const ENTRIES: u32 = 10_000;

/// Build a map of `i -> i * 2` for every `i` below `ENTRIES`
fn populated() -> BiMap<u32, u64> {
    BiMap::from_entries((0..ENTRIES).map(|i| (i, u64::from(i) * 2))).unwrap()
}

/// Fill an empty map one pair at a time
fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");
    group.throughput(Throughput::Elements(u64::from(ENTRIES)));
    group.bench_function("fresh", |b| {
        b.iter(|| {
            let mut map = BiMap::with_capacity(ENTRIES as usize);
            for i in 0..ENTRIES {
                map.set(i, u64::from(i) * 2).unwrap();
            }
            map
        })
    });

    // Every pair steals the value of its neighbour
    group.bench_function("forced_steal", |b| {
        b.iter_batched(
            populated,
            |mut map| {
                for i in 0..ENTRIES {
                    map.set_with(i + ENTRIES, u64::from(i) * 2, SetOptions::forced())
                        .unwrap();
                }
                map
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

/// Look pairs up from both directions
fn bench_get(c: &mut Criterion) {
    let map = populated();

    let mut group = c.benchmark_group("get");
    group.throughput(Throughput::Elements(u64::from(ENTRIES)));
    group.bench_function("forward", |b| {
        b.iter(|| (0..ENTRIES).filter_map(|i| map.get(black_box(&i))).count())
    });
    group.bench_function("inverse", |b| {
        b.iter(|| {
            (0..ENTRIES)
                .filter_map(|i| map.inverse().get(black_box(&(u64::from(i) * 2))))
                .count()
        })
    });
    group.finish();
}

/// Remove every pair, from the oldest
fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete");
    group.throughput(Throughput::Elements(u64::from(ENTRIES)));
    group.bench_function("oldest_first", |b| {
        b.iter_batched(
            populated,
            |mut map| {
                for i in 0..ENTRIES {
                    map.delete(&i);
                }
                map
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

/// Walk every pair in insertion order
fn bench_iter(c: &mut Criterion) {
    let map = populated();

    let mut group = c.benchmark_group("iter");
    group.throughput(Throughput::Elements(u64::from(ENTRIES)));
    group.bench_function("pairs", |b| b.iter(|| map.iter().map(|(k, _)| u64::from(*k)).sum::<u64>()));
    group.finish();
}

// Generate a main function
criterion_group!(benches, bench_set, bench_get, bench_delete, bench_iter);
criterion_main!(benches);
