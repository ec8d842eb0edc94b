use binecc::curve::params::SECT163K1;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_bigint::{BigUint, RandBigInt};

fn bench_group_law(c: &mut Criterion) {
    let curve = SECT163K1.curve().unwrap();
    let g = SECT163K1.generator(&curve).unwrap();
    let h = g.double().unwrap();

    let mut group = c.benchmark_group("Point Operations");

    group.bench_function("addition", |bench| {
        bench.iter(|| black_box(g.add(&h).unwrap()))
    });

    group.bench_function("doubling", |bench| {
        bench.iter(|| black_box(g.double().unwrap()))
    });

    group.bench_function("is_on_curve", |bench| {
        bench.iter(|| black_box(curve.is_on_curve(&g)))
    });

    group.finish();
}

fn bench_scalar_multiplication(c: &mut Criterion) {
    let curve = SECT163K1.curve().unwrap();
    let g = SECT163K1.generator(&curve).unwrap();
    let mut rng = rand::thread_rng();

    let mut group = c.benchmark_group("Scalar Multiplication");
    group.sample_size(10);

    for bits in [32u64, 64, 163] {
        let scalar: BigUint = rng.gen_biguint(bits);
        group.bench_with_input(BenchmarkId::new("sect163k1", bits), &scalar, |bench, k| {
            bench.iter(|| black_box(g.multiply(k).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_group_law, bench_scalar_multiplication);
criterion_main!(benches);
