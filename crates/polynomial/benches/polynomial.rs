// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use bytepoly_polynomial::Polynomial;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn create_test_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}

fn benchmark_histogram_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram_construction");

    for len in [16, 256, 4096, 65536] {
        let bytes = create_test_bytes(len);

        group.bench_function(&format!("len_{}", len), |b| {
            b.iter(|| black_box(Polynomial::<u64>::from_bytes(&bytes)))
        });
    }

    group.finish();
}

fn benchmark_polynomial_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_evaluation");

    let bytes = create_test_bytes(4096);
    let ints = Polynomial::<i64>::from_bytes(&bytes);
    let floats = Polynomial::<f64>::from_bytes(&bytes);

    group.bench_function("i64", |b| b.iter(|| black_box(ints.evaluate(black_box(3)))));
    group.bench_function("i64_at_zero", |b| {
        b.iter(|| black_box(ints.evaluate(black_box(0))))
    });
    group.bench_function("i64_checked", |b| {
        b.iter(|| black_box(ints.checked_evaluate(black_box(1))))
    });
    group.bench_function("f64", |b| {
        b.iter(|| black_box(floats.evaluate(black_box(0.99))))
    });

    group.finish();
}

fn benchmark_coefficient_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("coefficient_conversion");

    let poly = Polynomial::<u32>::from_bytes(create_test_bytes(4096));

    group.bench_function("widen_u32_to_f64", |b| {
        b.iter(|| black_box(poly.widen::<f64>()))
    });
    group.bench_function("try_convert_u32_to_u16", |b| {
        b.iter(|| black_box(poly.try_convert::<u16>()))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_histogram_construction,
    benchmark_polynomial_evaluation,
    benchmark_coefficient_conversion
);
criterion_main!(benches);
