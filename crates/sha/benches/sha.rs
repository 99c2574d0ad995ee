// Copyright (C) Microsoft Corporation. All rights reserved.

#![allow(clippy::unwrap_used, clippy::expect_used, missing_docs)]

use std::hint::black_box;

use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use keyvault_sha::*;

fn bench_one_shot(c: &mut Criterion) {
    let mut group = c.benchmark_group("one_shot");
    for size in [64usize, 1024, 64 * 1024] {
        let data = vec![0x5au8; size];
        group.throughput(Throughput::Bytes(size as u64));
        for algo in ShaAlgo::ALL {
            group.bench_with_input(BenchmarkId::new(algo.name(), size), &data, |b, data| {
                b.iter(|| digest(algo, black_box(data)).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_chunked(c: &mut Criterion) {
    let data = vec![0xa5u8; 1024 * 1024];
    let mut group = c.benchmark_group("chunked_1mib");
    group.throughput(Throughput::Bytes(data.len() as u64));
    for chunk in [64usize, 4096] {
        for algo in ShaAlgo::ALL {
            group.bench_with_input(BenchmarkId::new(algo.name(), chunk), &chunk, |b, &chunk| {
                b.iter(|| {
                    let mut ctx = DigestContext::<PlatformHashSession>::new(algo).unwrap();
                    for part in data.chunks(chunk) {
                        ctx.append(black_box(part)).unwrap();
                    }
                    ctx.finish().unwrap()
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_one_shot, bench_chunked);
criterion_main!(benches);
