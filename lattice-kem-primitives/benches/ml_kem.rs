#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Criterion benchmarks for Kyber-768 and the NTT

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lattice_kem_primitives::hash::{ShakeXof, Symmetric};
use lattice_kem_primitives::kem::MlKem768;
use lattice_kem_primitives::polynomial::{ntt, Poly};
use lattice_kem_primitives::sampling::{generate_matrix, DEFAULT_MAX_XOF_BLOCKS};
use rand::rngs::OsRng;
use std::hint::black_box;

fn bench_kem(c: &mut Criterion) {
    let kem = MlKem768::new();
    let Ok(keypair) = kem.generate_keypair(&mut OsRng) else {
        return;
    };
    let Ok((ciphertext, _)) = kem.encapsulate(&mut OsRng, keypair.public_key()) else {
        return;
    };

    c.bench_function("kyber768_keygen", |b| {
        b.iter(|| black_box(kem.generate_keypair(&mut OsRng)));
    });

    c.bench_function("kyber768_encapsulate", |b| {
        b.iter(|| black_box(kem.encapsulate(&mut OsRng, keypair.public_key())));
    });

    c.bench_function("kyber768_decapsulate", |b| {
        b.iter(|| {
            black_box(kem.decapsulate(&ciphertext, keypair.secret_key(), keypair.public_key()))
        });
    });
}

fn bench_ntt(c: &mut Criterion) {
    let raw: [u32; 256] = std::array::from_fn(|i| (i as u32).wrapping_mul(2_654_435_761));
    let poly = Poly::reduce(&raw);
    let transformed = ntt::forward(&poly);

    c.bench_function("ntt_forward", |b| b.iter(|| black_box(ntt::forward(black_box(&poly)))));
    c.bench_function("ntt_inverse", |b| {
        b.iter(|| black_box(ntt::inverse(black_box(&transformed))));
    });
    c.bench_function("ntt_basemul", |b| {
        b.iter(|| black_box(ntt::basemul(&transformed, &transformed)));
    });
}

fn bench_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_matrix");
    for provider in [ShakeXof::Shake256, ShakeXof::Shake128] {
        let sym = Symmetric::new(provider);
        group.bench_with_input(BenchmarkId::from_parameter(provider.name()), &sym, |b, sym| {
            b.iter(|| black_box(generate_matrix(sym, &[7u8; 32], false, DEFAULT_MAX_XOF_BLOCKS)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_kem, bench_ntt, bench_matrix);
criterion_main!(benches);
