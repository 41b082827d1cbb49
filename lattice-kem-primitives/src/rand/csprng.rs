#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Cryptographically Secure Random Number Generator
//!
//! This module draws from any `CryptoRng`, defaulting to `OsRng`.

use lattice_kem_prelude::{KemError, Result};
use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};

use crate::params::SYM_BYTES;

/// Fill `buffer` from `rng`, reporting failure instead of panicking.
///
/// # Errors
/// Returns `RandomnessUnavailable` if the generator fails.
pub fn fill_from<R: RngCore + CryptoRng + ?Sized>(rng: &mut R, buffer: &mut [u8]) -> Result<()> {
    rng.try_fill_bytes(buffer).map_err(|e| KemError::RandomnessUnavailable(e.to_string()))
}

/// Fill `buffer` from the operating system.
///
/// # Errors
/// Returns `RandomnessUnavailable` if the OS source fails.
pub fn fill_random(buffer: &mut [u8]) -> Result<()> {
    fill_from(&mut OsRng, buffer)
}

/// A fresh 32-byte seed from the operating system.
///
/// # Errors
/// Returns `RandomnessUnavailable` if the OS source fails.
pub fn random_seed() -> Result<[u8; SYM_BYTES]> {
    let mut seed = [0u8; SYM_BYTES];
    fill_random(&mut seed)?;
    Ok(seed)
}
