// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the toast lifecycle engine.
//!
//! Measures the performance of:
//! - Creating and fully expiring batches of toasts
//! - Building renderer snapshots for a loaded store
//! - Tick processing with many active countdowns

use criterion::{criterion_group, criterion_main, Criterion};
use iced_toast::{ToastManager, ToastOptions};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Benchmark a full create → expire → exit → remove cycle for a batch.
fn bench_full_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("lifecycle");

    group.bench_function("create_expire_remove_32", |b| {
        b.iter(|| {
            let base = Instant::now();
            let mut manager = ToastManager::new();
            for index in 0..32 {
                manager.create_at(
                    base,
                    format!("message {index}"),
                    ToastOptions::default().with_duration(Duration::from_millis(100)),
                );
            }
            manager.tick(base + Duration::from_millis(100));
            manager.tick(base + Duration::from_millis(500));
            black_box(manager.is_empty());
        });
    });

    group.finish();
}

/// Benchmark snapshot construction against a loaded store.
fn bench_snapshots(c: &mut Criterion) {
    let mut group = c.benchmark_group("lifecycle");

    let base = Instant::now();
    let mut manager = ToastManager::new();
    for index in 0..100 {
        manager.create_at(base, format!("message {index}"), ToastOptions::default());
    }

    group.bench_function("snapshots_100", |b| {
        b.iter(|| {
            black_box(manager.snapshots(base + Duration::from_millis(50)));
        });
    });

    group.bench_function("visible_snapshots_100", |b| {
        b.iter(|| {
            black_box(manager.visible_snapshots(base + Duration::from_millis(50)));
        });
    });

    group.finish();
}

/// Benchmark tick processing with many active countdowns.
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("lifecycle");

    let base = Instant::now();
    let mut manager = ToastManager::new();
    for index in 0..100 {
        manager.create_at(
            base,
            format!("message {index}"),
            ToastOptions::default().with_duration(Duration::from_secs(3600)),
        );
    }

    group.bench_function("tick_100_active", |b| {
        let mut now = base;
        b.iter(|| {
            now += Duration::from_millis(16);
            manager.tick(now);
            black_box(manager.len());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_full_lifecycle, bench_snapshots, bench_tick);
criterion_main!(benches);
