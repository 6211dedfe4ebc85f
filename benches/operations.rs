//! Benchmarks for vector construction and operations.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;
use std::f64::consts::PI;

use vecta::coordinates::{Cylindrical, Polar};
use vecta::parser::VectorInput;
use vecta::{vector, AngleUnit};

/// Benchmark construction from each input shape.
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("scalars", |b| {
        b.iter(|| vector(black_box((1.0, 2.0, 3.0))))
    });

    group.bench_function("tuple", |b| b.iter(|| vector(black_box([1.0, 2.0, 3.0]))));

    group.bench_function("polar", |b| {
        b.iter(|| vector(black_box(Polar::spherical(PI / 3.0, PI / 4.0).with_magnitude(2.0))))
    });

    group.bench_function("cylindrical", |b| {
        b.iter(|| vector(black_box(Cylindrical::new(2.0, PI / 4.0, 1.0))))
    });

    let object = VectorInput::from(json!({"x": 1, "y": 2, "z": 3}));
    group.bench_function("json_object", |b| b.iter(|| vector(black_box(object.clone()))));

    group.finish();
}

/// Benchmark immutable operations against their in-place forms.
fn bench_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("operations");

    let a = vector((1.0, 2.0, 3.0));
    let other = vector((-4.0, 0.5, 2.0));

    group.bench_function("add", |b| b.iter(|| black_box(a).add(black_box(other))));
    group.bench_function("add_self", |b| {
        let mut v = a;
        b.iter(|| {
            v.add_self(black_box(other));
        })
    });
    group.bench_function("cross", |b| b.iter(|| black_box(a).cross(black_box(other))));
    group.bench_function("normalize", |b| b.iter(|| black_box(a).normalize()));
    group.bench_function("angle", |b| {
        b.iter(|| black_box(a).angle(black_box(other), true, AngleUnit::Radians))
    });
    group.bench_function("rotate3d", |b| {
        b.iter(|| black_box(a).rotate3d(0.1, 0.2, AngleUnit::Radians))
    });

    group.finish();
}

criterion_group!(benches, bench_construction, bench_operations);
criterion_main!(benches);
