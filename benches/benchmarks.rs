use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use primemap::PrimeMap;
use std::collections::HashMap;

// Benchmarking module for PrimeMap.
// These benchmarks are not exhaustive, and they focus on KPIs like insert, get, remove, etc.
// To run benchmarks, use the following command:
// cargo bench --bench benchmarks

fn make_keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("key{}", i)).collect()
}

fn bench_insert(c: &mut Criterion) {
    let keys = make_keys(10_000);
    c.bench_function("PrimeMap, N=1e4, insert", |b| {
        let mut map = PrimeMap::new();
        b.iter(|| {
            for key in &keys {
                black_box(map.insert(key.clone(), key.clone()));
            }
        })
    });
}

fn bench_insert_hashmap(c: &mut Criterion) {
    let keys = make_keys(10_000);
    c.bench_function("HashMap, N=1e4, insert", |b| {
        let mut map = HashMap::new();
        b.iter(|| {
            for key in &keys {
                black_box(map.insert(key.clone(), key.clone()));
            }
        })
    });
}

fn bench_get(c: &mut Criterion) {
    let keys = make_keys(10_000);
    let mut map = PrimeMap::new();
    for key in &keys {
        map.insert(key.clone(), key.clone());
    }
    c.bench_function("PrimeMap, N=1e4, get", |b| {
        b.iter(|| {
            black_box(map.get("key5000"));
        })
    });
}

fn bench_get_hashmap(c: &mut Criterion) {
    let keys = make_keys(10_000);
    let mut map = HashMap::new();
    for key in &keys {
        map.insert(key.clone(), key.clone());
    }
    c.bench_function("HashMap, N=1e4, get", |b| {
        b.iter(|| {
            black_box(map.get("key5000"));
        })
    });
}

fn bench_remove(c: &mut Criterion) {
    let keys = make_keys(10_000);
    c.bench_function("PrimeMap, N=1e4, remove at N/2", |b| {
        let mut map = PrimeMap::new();
        for key in &keys {
            map.insert(key.clone(), key.clone());
        }
        b.iter(|| {
            black_box(map.remove("key5000"));
        })
    });
}

fn bench_remove_hashmap(c: &mut Criterion) {
    let keys = make_keys(10_000);
    c.bench_function("HashMap, N=1e4, remove at N/2", |b| {
        let mut map = HashMap::new();
        for key in &keys {
            map.insert(key.clone(), key.clone());
        }
        b.iter(|| {
            black_box(map.remove("key5000"));
        })
    });
}

fn bench_grow_from_floor(c: &mut Criterion) {
    let keys = make_keys(1_000);
    c.bench_function("PrimeMap, N=1e3, insert with resizes from floor capacity", |b| {
        b.iter(|| {
            let mut map = PrimeMap::new();
            for key in &keys {
                map.insert(key.clone(), key.clone());
            }
            black_box(map.capacity());
        })
    });
}

fn bench_presized(c: &mut Criterion) {
    let keys = make_keys(1_000);
    c.bench_function("PrimeMap, N=1e3, insert pre-sized", |b| {
        b.iter(|| {
            let mut map = PrimeMap::with_capacity(2_000);
            for key in &keys {
                map.insert(key.clone(), key.clone());
            }
            black_box(map.capacity());
        })
    });
}

criterion_group!(
    benches_insert_get,
    bench_insert,
    bench_insert_hashmap,
    bench_get,
    bench_get_hashmap,
);

criterion_group!(benches_remove_ops, bench_remove, bench_remove_hashmap,);

criterion_group!(benches_resize_ops, bench_grow_from_floor, bench_presized,);

criterion_main!(benches_insert_get, benches_remove_ops, benches_resize_ops);
