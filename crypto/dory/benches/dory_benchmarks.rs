// Copyright (c) 2025 The Botho Foundation

//! Benchmarks for Dory setup and the inner-product argument.
//!
//! Run with: cargo bench -p dd-crypto-dory

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dd_common::{logger::create_test_logger, trace_time};
use dd_crypto_dory::{
    backend::{
        g1, g2, normalize_g1, normalize_g2, random_scalar, G1Affine, G1Projective, G2Affine,
        G2Projective,
    },
    InnerProductProof, SetupParams, Statement,
};
use merlin::Transcript;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const WIDTHS: [usize; 4] = [4, 16, 64, 256];

type Fixture = (SetupParams, Statement, Vec<G1Affine>, Vec<G2Affine>);

fn fixture(width: usize) -> Fixture {
    trace_time!("dory bench fixture of width {}", width);
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let params = SetupParams::new(width, "dd-bench").expect("setup");
    let v1: Vec<G1Projective> = (0..width)
        .map(|_| g1() * random_scalar(&mut rng).expect("rng"))
        .collect();
    let v2: Vec<G2Projective> = (0..width)
        .map(|_| g2() * random_scalar(&mut rng).expect("rng"))
        .collect();
    let v1 = normalize_g1(&v1);
    let v2 = normalize_g2(&v2);
    let statement = Statement::for_witness(&params, &v1, &v2).expect("statement");
    (params, statement, v1, v2)
}

/// Benchmark transparent setup
fn bench_setup(c: &mut Criterion) {
    create_test_logger("dory_benchmarks");
    let mut group = c.benchmark_group("Dory setup");
    group.sample_size(10);

    for width in WIDTHS {
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter(|| black_box(SetupParams::new(width, "dd-bench").expect("setup")))
        });
    }

    group.finish();
}

/// Benchmark proving and verifying
fn bench_argument(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dory argument");
    group.sample_size(10);

    for width in WIDTHS {
        let (params, statement, v1, v2) = fixture(width);

        group.bench_with_input(BenchmarkId::new("prove", width), &width, |b, _| {
            b.iter(|| {
                black_box(
                    InnerProductProof::prove(
                        &params,
                        &mut Transcript::new(b"dd-bench"),
                        &statement,
                        &v1,
                        &v2,
                    )
                    .expect("prove"),
                )
            })
        });

        let proof = InnerProductProof::prove(
            &params,
            &mut Transcript::new(b"dd-bench"),
            &statement,
            &v1,
            &v2,
        )
        .expect("prove");
        group.bench_with_input(BenchmarkId::new("verify", width), &width, |b, _| {
            b.iter(|| {
                proof
                    .verify(&params, &mut Transcript::new(b"dd-bench"), &statement)
                    .expect("verify")
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_setup, bench_argument);
criterion_main!(benches);
