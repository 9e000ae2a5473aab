// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use futures::stream;
use lazy_seq::prelude::*;
use std::hint::black_box;
use tokio::runtime::Builder;

pub fn bench_lazy_stream_pipelines(c: &mut Criterion) {
    let mut group = c.benchmark_group("lazy_stream_pipeline");
    let sizes = [100usize, 10_000];
    let rt = Builder::new_current_thread().build().unwrap();

    for &size in &sizes {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("map_filter_to", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let values: Vec<u64> = rt.block_on(async {
                    stream::iter(0..size as u64)
                        .lazy()
                        .map(|n| n * 3)
                        .filter(|n| n % 2 == 0)
                        .to(Target::collect())
                        .await
                        .unwrap()
                });
                black_box(values);
            });
        });

        group.bench_with_input(BenchmarkId::new("some_last", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let found = rt.block_on(
                    stream::iter(0..size)
                        .lazy()
                        .some(|n| *n + 1 == size),
                );
                black_box(found);
            });
        });
    }

    group.finish();
}
