use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lrucache::LruCache;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn filled(capacity: usize) -> LruCache<u64, u64> {
    let mut cache = LruCache::new(capacity).unwrap();
    for i in 0..capacity as u64 {
        cache.put(i, i);
    }
    cache
}

fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_hit");
    group.throughput(Throughput::Elements(1));

    for size in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut cache = filled(size);
            let mut counter = 0u64;
            b.iter(|| {
                // Stride through keys so hits hit every part of the list
                black_box(cache.get(&(counter % size as u64)));
                counter = counter.wrapping_add(7919);
            });
        });
    }

    group.finish();
}

fn bench_put_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_update");
    group.throughput(Throughput::Elements(1));

    for size in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut cache = filled(size);
            let mut counter = 0u64;
            b.iter(|| {
                cache.put(black_box(counter % size as u64), counter);
                counter = counter.wrapping_add(7919);
            });
        });
    }

    group.finish();
}

fn bench_put_evict(c: &mut Criterion) {
    let mut group = c.benchmark_group("put_evict");
    group.throughput(Throughput::Elements(1));

    for size in SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut cache = filled(size);
            // Every key past the fill range is new, so each put evicts
            let mut next = size as u64;
            b.iter(|| {
                black_box(cache.push(next, next));
                next += 1;
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_get_hit, bench_put_update, bench_put_evict);
criterion_main!(benches);
