use std::sync::Arc;
use std::time::Duration;

use binecc::arithmetic::{multiplicative_inverse, multiply, multiply_no_reduce, quotient};
use binecc::FieldElement;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::BigUint;
use num_traits::One;

/// Field moduli exercised by the benchmarks
fn moduli() -> Vec<(&'static str, BigUint)> {
    vec![
        ("gf2_8", BigUint::from(0x11bu32)),
        ("gf2_163", (BigUint::one() << 163u32) | BigUint::from(0xc9u32)),
    ]
}

fn random_pair(modulus: &BigUint) -> (FieldElement, FieldElement) {
    let mut rng = rand::thread_rng();
    let modulus = Arc::new(modulus.clone());
    let a = FieldElement::random(&mut rng, Arc::clone(&modulus)).unwrap();
    let mut b = FieldElement::random(&mut rng, modulus).unwrap();
    while b.is_zero() {
        b = FieldElement::random(&mut rng, Arc::clone(b.modulus())).unwrap();
    }
    (a, b)
}

fn bench_field_elements(c: &mut Criterion) {
    let mut group = c.benchmark_group("Field Operations");
    group.measurement_time(Duration::from_secs(5));

    for (name, modulus) in moduli() {
        let (a, b) = random_pair(&modulus);

        group.bench_with_input(BenchmarkId::new("addition", name), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(a.add(b).unwrap()))
        });

        group.bench_with_input(
            BenchmarkId::new("multiplication", name),
            &(&a, &b),
            |bench, (a, b)| bench.iter(|| black_box(a.multiply(b).unwrap())),
        );

        group.bench_with_input(BenchmarkId::new("squaring", name), &a, |bench, a| {
            bench.iter(|| black_box(a.square()))
        });

        group.bench_with_input(BenchmarkId::new("inverse", name), &b, |bench, b| {
            bench.iter(|| black_box(b.inverse().unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("division", name), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(a.divide(b).unwrap()))
        });
    }

    group.finish();
}

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bit Polynomial Primitives");

    for (name, modulus) in moduli() {
        let (a, b) = random_pair(&modulus);
        let (a, b) = (a.value().clone(), b.value().clone());

        group.bench_function(BenchmarkId::new("multiply", name), |bench| {
            bench.iter(|| black_box(multiply(&a, &b, &modulus)))
        });

        group.bench_function(BenchmarkId::new("multiply_no_reduce", name), |bench| {
            bench.iter(|| black_box(multiply_no_reduce(&a, &b, &modulus)))
        });

        group.bench_function(BenchmarkId::new("quotient", name), |bench| {
            bench.iter(|| black_box(quotient(&modulus, &b).unwrap()))
        });

        group.bench_function(BenchmarkId::new("multiplicative_inverse", name), |bench| {
            bench.iter(|| black_box(multiplicative_inverse(&b, &modulus).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_field_elements, bench_primitives);
criterion_main!(benches);
