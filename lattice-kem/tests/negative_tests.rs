#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects,
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::needless_range_loop,
    clippy::explicit_iter_loop,
    clippy::print_stdout,
    clippy::useless_vec,
    clippy::needless_borrows_for_generic_args
)]
//! Negative tests for the byte-level API
//!
//! Length errors are reported before any arithmetic; tampered or foreign
//! ciphertexts still yield a secret.

use lattice_kem::{CoreConfig, CoreError, ErrorKind, KemError, LatticeKem};

fn kem() -> LatticeKem {
    LatticeKem::new(CoreConfig::for_development()).unwrap()
}

fn expect_length_error(err: CoreError, artifact: &str, expected: usize, actual: usize) {
    match err {
        CoreError::Kem(KemError::InvalidLength { artifact: a, expected: e, actual: got }) => {
            assert_eq!(a, artifact);
            assert_eq!(e, expected);
            assert_eq!(got, actual);
        }
        other => panic!("Expected InvalidLength error, got {other:?}"),
    }
}

#[test]
fn test_encapsulate_rejects_bad_public_key_lengths() {
    let kem = kem();
    for len in [0usize, 1183, 1185, 800, 1568] {
        let err = kem.encapsulate(&vec![0u8; len]).unwrap_err();
        expect_length_error(err, "public key", 1184, len);
    }
}

#[test]
fn test_decapsulate_checks_each_buffer() {
    let kem = kem();
    let keypair = kem.generate_keypair().unwrap();
    let pk = keypair.public_key().to_bytes();
    let sk = keypair.secret_key().as_bytes().to_vec();
    let ct = kem.encapsulate(&pk).unwrap().ciphertext.to_bytes();

    expect_length_error(kem.decapsulate(&ct[..1087], &sk, &pk).unwrap_err(), "ciphertext", 1088, 1087);
    expect_length_error(kem.decapsulate(&ct, &sk[..1], &pk).unwrap_err(), "secret key", 1152, 1);
    expect_length_error(kem.decapsulate(&ct, &sk, &[]).unwrap_err(), "public key", 1184, 0);
}

#[test]
fn test_error_kinds() {
    let err = kem().encapsulate(&[]).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Format));
    assert!(err.is_recoverable());
}

#[test]
fn test_tampered_ciphertext_still_yields_secret() {
    let kem = kem();
    let keypair = kem.generate_keypair().unwrap();
    let pk = keypair.public_key().to_bytes();
    let sk = keypair.secret_key().as_bytes().to_vec();
    let enc = kem.encapsulate(&pk).unwrap();

    let mut ct = enc.ciphertext.to_bytes();
    ct[42] ^= 0xFF;
    let ss = kem.decapsulate(&ct, &sk, &pk).unwrap();
    assert_ne!(ss, enc.shared_secret);
    assert_eq!(ss.as_bytes().len(), 32);
}

#[test]
fn test_random_ciphertext_yields_secret() {
    let kem = kem();
    let keypair = kem.generate_keypair().unwrap();
    let junk: Vec<u8> = (0..1088u32).map(|i| (i.wrapping_mul(31) ^ 0x5A) as u8).collect();
    let first = kem
        .decapsulate(&junk, keypair.secret_key().as_bytes(), keypair.public_key().as_bytes())
        .unwrap();
    let second = kem
        .decapsulate(&junk, keypair.secret_key().as_bytes(), keypair.public_key().as_bytes())
        .unwrap();
    assert_eq!(first, second);
}
