//! Criterion benchmarks for the config store hot paths.
//!
//! Measures lookup and coercion latency on a loaded store, and the cost of
//! `set_value` under the exclusive lock.
//!
//! Run with:
//! ```bash
//! cargo bench --package jsonconfig-core --bench store_bench
//! ```

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jsonconfig_core::ConfigStore;

// ── Fixtures ──────────────────────────────────────────────────────────────────

/// Builds a store with `sections` sections of 16 keys each.
fn build_store(sections: usize) -> ConfigStore {
    let store = ConfigStore::from_json_str(
        r#"{"server": {"port": 8080, "debug": true, "name": "api", "ratio": "0.75"}}"#,
    )
    .expect("fixture must decode");
    for s in 0..sections {
        for k in 0..16_u32 {
            store.set_value(&format!("section{s}"), &format!("key{k}"), k);
        }
    }
    store.set_value("server", "timeout", Duration::from_millis(61_500));
    store
}

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_get(c: &mut Criterion) {
    let store = build_store(8);
    let mut group = c.benchmark_group("get");

    group.bench_function("present", |b| {
        b.iter(|| store.get(black_box("server"), black_box("port")))
    });
    group.bench_function("absent_section", |b| {
        b.iter(|| store.get(black_box("missing"), black_box("port")))
    });

    group.finish();
}

fn bench_typed_getters(c: &mut Criterion) {
    let store = build_store(8);
    let mut group = c.benchmark_group("typed_getters");

    group.bench_function("get_as_string_float", |b| {
        b.iter(|| store.get_as_string(black_box("server"), black_box("port")))
    });
    group.bench_function("get_as_string_duration", |b| {
        b.iter(|| store.get_as_string(black_box("server"), black_box("timeout")))
    });
    group.bench_function("get_as_int_float", |b| {
        b.iter(|| store.get_as_int(black_box("server"), black_box("port")))
    });
    group.bench_function("get_as_f64_string", |b| {
        b.iter(|| store.get_as_f64(black_box("server"), black_box("ratio")))
    });

    group.finish();
}

/// `set_value` cost as the number of sections grows.
fn bench_set_value_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_value_scaling");

    for &count in &[1usize, 16, 128] {
        let store = build_store(count);
        group.bench_with_input(BenchmarkId::new("sections", count), &count, |b, _| {
            b.iter(|| store.set_value(black_box("server"), black_box("port"), black_box(9090_u16)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_get, bench_typed_getters, bench_set_value_scaling);
criterion_main!(benches);
