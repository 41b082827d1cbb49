//! Fuzz Regression Tests
//!
//! Edge-case inputs for the fuzz targets, kept as ordinary tests so they run
//! without a fuzzing toolchain.
//!
//! ```bash
//! cargo test --manifest-path fuzz/Cargo.toml --test fuzz_regression_tests
//! ```

use lattice_kem_primitives::kem::{Ciphertext, MlKem768, PublicKey};
use lattice_kem_primitives::params::{CIPHERTEXT_BYTES, POLY_BYTES, PUBLIC_KEY_BYTES, Q};
use lattice_kem_primitives::polynomial::Poly;

// ============================================================================
// Decapsulation
// ============================================================================

#[test]
fn test_all_zero_ciphertext_decapsulates() {
    let kem = MlKem768::new();
    let keypair = kem.generate_keypair_from_seed(&[0u8; 32]).unwrap();
    let ct = Ciphertext::from_bytes(&[0u8; CIPHERTEXT_BYTES]).unwrap();
    let a = kem.decapsulate(&ct, keypair.secret_key(), keypair.public_key()).unwrap();
    let b = kem.decapsulate(&ct, keypair.secret_key(), keypair.public_key()).unwrap();
    assert_eq!(a.as_bytes(), b.as_bytes());
}

#[test]
fn test_all_ones_ciphertext_decapsulates() {
    let kem = MlKem768::new();
    let keypair = kem.generate_keypair_from_seed(&[0xFF; 32]).unwrap();
    let ct = Ciphertext::from_bytes(&[0xFF; CIPHERTEXT_BYTES]).unwrap();
    assert!(kem.decapsulate(&ct, keypair.secret_key(), keypair.public_key()).is_ok());
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_off_by_one_lengths_rejected() {
    assert!(PublicKey::from_bytes(&[0u8; PUBLIC_KEY_BYTES - 1]).is_err());
    assert!(PublicKey::from_bytes(&[0u8; PUBLIC_KEY_BYTES + 1]).is_err());
    assert!(Ciphertext::from_bytes(&[0u8; CIPHERTEXT_BYTES - 1]).is_err());
    assert!(Ciphertext::from_bytes(&[0u8; CIPHERTEXT_BYTES + 1]).is_err());
}

#[test]
fn test_non_canonical_public_key_encapsulates() {
    let pk = PublicKey::from_bytes(&[0xFF; PUBLIC_KEY_BYTES]).unwrap();
    assert!(MlKem768::new().encapsulate_with_message(&pk, &[7u8; 32]).is_ok());
}

#[test]
fn test_non_canonical_coefficients_are_reduced() {
    let poly = Poly::from_bytes(&[0xFF; POLY_BYTES]).unwrap();
    assert!(poly.coeffs().iter().all(|&c| c < Q));
}
