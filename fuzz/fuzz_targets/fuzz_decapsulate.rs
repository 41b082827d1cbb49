#![deny(unsafe_code)]
#![no_main]

//! Fuzz testing for Kyber-768 decapsulation
//!
//! Any 1088-byte ciphertext must decapsulate to some 32-byte secret, and the
//! same input must always give the same secret.

use libfuzzer_sys::fuzz_target;
use lattice_kem_primitives::kem::{Ciphertext, MlKem768};
use lattice_kem_primitives::params::{CIPHERTEXT_BYTES, SYM_BYTES};

fuzz_target!(|data: &[u8]| {
    if data.len() < SYM_BYTES {
        return;
    }

    let kem = MlKem768::new();
    let mut seed = [0u8; SYM_BYTES];
    seed.copy_from_slice(&data[..SYM_BYTES]);
    let Ok(keypair) = kem.generate_keypair_from_seed(&seed) else {
        return;
    };

    // Fuzzed ciphertext, cycled up to the required length
    let rest = &data[SYM_BYTES..];
    if !rest.is_empty() {
        let bytes: Vec<u8> = rest.iter().cycle().take(CIPHERTEXT_BYTES).copied().collect();
        if let Ok(ct) = Ciphertext::from_bytes(&bytes) {
            let first = kem.decapsulate(&ct, keypair.secret_key(), keypair.public_key());
            let second = kem.decapsulate(&ct, keypair.secret_key(), keypair.public_key());
            if let (Ok(a), Ok(b)) = (first, second) {
                assert_eq!(a.as_bytes(), b.as_bytes());
            }
        }
    }

    // Honest ciphertext corrupted with fuzz bytes
    if let Ok((ct, ss)) = kem.encapsulate_with_message(keypair.public_key(), &seed) {
        let mut corrupted = ct.to_bytes();
        let len = corrupted.len();
        for (i, b) in rest.iter().enumerate() {
            corrupted[i % len] ^= b;
        }
        if let Ok(corrupted_ct) = Ciphertext::from_bytes(&corrupted) {
            if let Ok(recovered) = kem.decapsulate(&corrupted_ct, keypair.secret_key(), keypair.public_key()) {
                if corrupted == ct.to_bytes() {
                    assert_eq!(recovered.as_bytes(), ss.as_bytes());
                } else {
                    assert_ne!(recovered.as_bytes(), ss.as_bytes());
                }
            }
        }
    }
});
