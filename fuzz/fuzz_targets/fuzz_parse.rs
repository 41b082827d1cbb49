#![deny(unsafe_code)]
#![no_main]

//! Fuzz testing for key and ciphertext parsing
//!
//! Parsing accepts exactly the documented lengths and never panics.

use libfuzzer_sys::fuzz_target;
use lattice_kem_primitives::kem::{Ciphertext, MlKem768, PublicKey, SecretKey, SharedSecret};
use lattice_kem_primitives::params::{
    CIPHERTEXT_BYTES, PUBLIC_KEY_BYTES, SECRET_KEY_BYTES, SHARED_SECRET_BYTES,
};

fuzz_target!(|data: &[u8]| {
    assert_eq!(PublicKey::from_bytes(data).is_ok(), data.len() == PUBLIC_KEY_BYTES);
    assert_eq!(SecretKey::from_bytes(data).is_ok(), data.len() == SECRET_KEY_BYTES);
    assert_eq!(Ciphertext::from_bytes(data).is_ok(), data.len() == CIPHERTEXT_BYTES);
    assert_eq!(SharedSecret::from_bytes(data).is_ok(), data.len() == SHARED_SECRET_BYTES);

    // Arbitrary public keys must encapsulate, whatever their t coefficients
    if data.is_empty() {
        return;
    }
    let bytes: Vec<u8> = data.iter().cycle().take(PUBLIC_KEY_BYTES).copied().collect();
    if let Ok(pk) = PublicKey::from_bytes(&bytes) {
        let kem = MlKem768::new();
        let result = kem.encapsulate_with_message(&pk, &[0x42; 32]);
        assert!(result.is_ok());
    }
});
