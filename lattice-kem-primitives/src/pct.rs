//! Pairwise Consistency Test (PCT)
//!
//! A conditional self-test run immediately after key generation to detect a
//! corrupted key pair before it is used.
//!
//! For a KEM the test consists of:
//! 1. Encapsulating a fixed test message to the new public key
//! 2. Decapsulating the ciphertext with the new secret key
//! 3. Comparing both shared secrets in constant time
//!
//! ## Usage
//!
//! [`MlKem768`] runs the test automatically when
//! [`KemConfig::pairwise_consistency_check`](crate::kem::KemConfig) is set.
//! It can also be called manually:
//!
//! ```
//! use lattice_kem_primitives::kem::MlKem768;
//! use lattice_kem_primitives::pct::pct_ml_kem;
//!
//! let kem = MlKem768::new();
//! let keypair = kem.generate_keypair_from_seed(&[7u8; 32])?;
//! pct_ml_kem(&kem, &keypair)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use lattice_kem_prelude::KemError;
use subtle::ConstantTimeEq;
use thiserror::Error;

use crate::hash::HashProvider;
use crate::kem::{KeyPair, MlKem768};
use crate::params::SYM_BYTES;

/// Fixed message encapsulated during the test.
pub const PCT_TEST_MESSAGE: &[u8; SYM_BYTES] = b"LatticeKem pairwise consistency!";

/// Error types for Pairwise Consistency Test operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PctError {
    /// Encapsulation failed during PCT
    #[error("PCT encapsulation failed: {0}")]
    EncapsulationFailed(String),

    /// Decapsulation failed during PCT
    #[error("PCT decapsulation failed: {0}")]
    DecapsulationFailed(String),

    /// The two shared secrets differ
    #[error("PCT failed: shared secrets differ - key pair is inconsistent")]
    KeyPairInconsistent,
}

impl From<PctError> for KemError {
    fn from(err: PctError) -> Self {
        KemError::InternalInvariant(err.to_string())
    }
}

/// Result type for PCT operations
pub type PctResult<T> = Result<T, PctError>;

/// Performs a Pairwise Consistency Test for a Kyber-768 key pair
///
/// # Errors
///
/// Returns `PctError::EncapsulationFailed` or `PctError::DecapsulationFailed` if an
/// operation reports an error, and `PctError::KeyPairInconsistent` if the recovered
/// shared secret does not match.
pub fn pct_ml_kem<H: HashProvider>(kem: &MlKem768<H>, keypair: &KeyPair) -> PctResult<()> {
    let (ciphertext, sent) = kem
        .encapsulate_with_message(keypair.public_key(), PCT_TEST_MESSAGE)
        .map_err(|e| PctError::EncapsulationFailed(e.to_string()))?;

    let received = kem
        .decapsulate(&ciphertext, keypair.secret_key(), keypair.public_key())
        .map_err(|e| PctError::DecapsulationFailed(e.to_string()))?;

    if bool::from(sent.ct_eq(&received)) {
        Ok(())
    } else {
        Err(PctError::KeyPairInconsistent)
    }
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn)]
mod tests {
    use super::*;
    use crate::kem::{PublicKey, SecretKey};
    use crate::params::SECRET_KEY_BYTES;

    #[test]
    fn test_pct_passes_for_generated_pair() -> Result<(), KemError> {
        let kem = MlKem768::new();
        let keypair = kem.generate_keypair_from_seed(&[1u8; 32])?;
        assert!(pct_ml_kem(&kem, &keypair).is_ok());
        Ok(())
    }

    #[test]
    fn test_pct_detects_mismatched_pair() -> Result<(), KemError> {
        let kem = MlKem768::new();
        let first = kem.generate_keypair_from_seed(&[1u8; 32])?;
        let second = kem.generate_keypair_from_seed(&[2u8; 32])?;
        let mixed = KeyPair {
            public_key: PublicKey::from_bytes(first.public_key().as_bytes())?,
            secret_key: SecretKey::from_bytes(second.secret_key().as_bytes())?,
        };
        assert_eq!(pct_ml_kem(&kem, &mixed), Err(PctError::KeyPairInconsistent));
        Ok(())
    }

    #[test]
    fn test_pct_detects_zeroed_secret() -> Result<(), KemError> {
        let kem = MlKem768::new();
        let keypair = kem.generate_keypair_from_seed(&[3u8; 32])?;
        let broken = KeyPair {
            public_key: keypair.public_key().clone(),
            secret_key: SecretKey::from_bytes(&[0u8; SECRET_KEY_BYTES])?,
        };
        assert!(pct_ml_kem(&kem, &broken).is_err());
        Ok(())
    }

    #[test]
    fn test_pct_error_maps_to_internal_invariant() {
        let err: KemError = PctError::KeyPairInconsistent.into();
        assert!(matches!(err, KemError::InternalInvariant(_)));
    }
}
