//! Byte-level public API.
//!
//! Every entry point validates buffer lengths before touching the arithmetic.
//! Decapsulation of a well-formed ciphertext always yields a shared secret:
//! a forged or corrupted ciphertext produces a pseudorandom one.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use lattice_kem_primitives::hash::ShakeXof;
use lattice_kem_primitives::kem::{Ciphertext, KeyPair, MlKem768, PublicKey, SecretKey, SharedSecret};
use lattice_kem_primitives::self_test;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::instrument;

use crate::config::CoreConfig;
use crate::error::Result;
use crate::{log_kem_operation_complete, log_kem_operation_error, log_kem_operation_start};

/// Output of [`LatticeKem::encapsulate`].
#[derive(Debug)]
pub struct Encapsulation {
    /// 1088-byte ciphertext for the key owner.
    pub ciphertext: Ciphertext,
    /// 32-byte secret shared with the key owner.
    pub shared_secret: SharedSecret,
}

/// Configured Kyber-768 instance.
#[derive(Debug, Clone)]
pub struct LatticeKem {
    kem: MlKem768<ShakeXof>,
    config: CoreConfig,
}

impl LatticeKem {
    /// Validate `config` and build an instance.
    ///
    /// With `power_up_self_test` set, the cached process-wide checks run first and
    /// the provider-dependent checks then run again on the configured instance.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Configuration` for an invalid configuration and
    /// `CoreError::Kem` if a self-test fails.
    pub fn new(config: CoreConfig) -> Result<Self> {
        config.validate()?;
        if config.power_up_self_test {
            self_test::initialize_and_test()?;
        }
        let kem = MlKem768::with_provider(config.hash_algorithm.into(), config.kem_config())?;
        if config.power_up_self_test {
            self_test::check_instance(&kem)?;
        }
        Ok(Self { kem, config })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Underlying primitive instance.
    #[must_use]
    pub const fn primitive(&self) -> &MlKem768<ShakeXof> {
        &self.kem
    }

    /// Generate a key pair from the operating-system CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Kem` if randomness is unavailable or a self-check fails.
    pub fn generate_keypair(&self) -> Result<KeyPair> {
        self.generate_keypair_with_rng(&mut OsRng)
    }

    /// Generate a key pair from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Kem` if `rng` fails or a self-check fails.
    #[instrument(level = "debug", skip(self, rng))]
    pub fn generate_keypair_with_rng<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<KeyPair> {
        log_kem_operation_start!("generate_keypair");
        match self.kem.generate_keypair(rng) {
            Ok(keypair) => {
                log_kem_operation_complete!("generate_keypair");
                Ok(keypair)
            }
            Err(e) => {
                log_kem_operation_error!("generate_keypair", e);
                Err(e.into())
            }
        }
    }

    /// Encapsulate a fresh secret to a 1184-byte public key.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Kem` with an `InvalidLength` error for a mis-sized key,
    /// or if randomness is unavailable.
    pub fn encapsulate(&self, public_key: &[u8]) -> Result<Encapsulation> {
        self.encapsulate_with_rng(public_key, &mut OsRng)
    }

    /// [`LatticeKem::encapsulate`] drawing from `rng`.
    ///
    /// # Errors
    ///
    /// As [`LatticeKem::encapsulate`].
    #[instrument(level = "debug", skip(self, public_key, rng), fields(pk_len = public_key.len()))]
    pub fn encapsulate_with_rng<R: RngCore + CryptoRng>(
        &self,
        public_key: &[u8],
        rng: &mut R,
    ) -> Result<Encapsulation> {
        log_kem_operation_start!("encapsulate");
        let result = PublicKey::from_bytes(public_key)
            .and_then(|pk| self.kem.encapsulate(rng, &pk))
            .map(|(ciphertext, shared_secret)| Encapsulation { ciphertext, shared_secret });
        match result {
            Ok(encapsulation) => {
                log_kem_operation_complete!("encapsulate");
                Ok(encapsulation)
            }
            Err(e) => {
                log_kem_operation_error!("encapsulate", e);
                Err(e.into())
            }
        }
    }

    /// Recover the shared secret from a 1088-byte ciphertext.
    ///
    /// `public_key` must be the key the ciphertext was encapsulated to; it is
    /// needed to re-derive and re-encrypt under the Fujisaki-Okamoto check.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Kem` with an `InvalidLength` error if any buffer is
    /// mis-sized. Never fails because a ciphertext is invalid.
    #[instrument(
        level = "debug",
        skip(self, ciphertext, secret_key, public_key),
        fields(ct_len = ciphertext.len())
    )]
    pub fn decapsulate(
        &self,
        ciphertext: &[u8],
        secret_key: &[u8],
        public_key: &[u8],
    ) -> Result<SharedSecret> {
        log_kem_operation_start!("decapsulate");
        let result = Ciphertext::from_bytes(ciphertext).and_then(|ct| {
            let sk = SecretKey::from_bytes(secret_key)?;
            let pk = PublicKey::from_bytes(public_key)?;
            self.kem.decapsulate(&ct, &sk, &pk)
        });
        match result {
            Ok(shared_secret) => {
                log_kem_operation_complete!("decapsulate");
                Ok(shared_secret)
            }
            Err(e) => {
                log_kem_operation_error!("decapsulate", e);
                Err(e.into())
            }
        }
    }
}

/// Generate a key pair with the default configuration.
///
/// # Errors
///
/// See [`LatticeKem::new`] and [`LatticeKem::generate_keypair`].
pub fn generate_keypair() -> Result<KeyPair> {
    LatticeKem::new(CoreConfig::default())?.generate_keypair()
}

/// Encapsulate to `public_key` with the default configuration.
///
/// # Errors
///
/// See [`LatticeKem::new`] and [`LatticeKem::encapsulate`].
pub fn encapsulate(public_key: &[u8]) -> Result<Encapsulation> {
    LatticeKem::new(CoreConfig::default())?.encapsulate(public_key)
}

/// Decapsulate with the default configuration.
///
/// # Errors
///
/// See [`LatticeKem::new`] and [`LatticeKem::decapsulate`].
pub fn decapsulate(ciphertext: &[u8], secret_key: &[u8], public_key: &[u8]) -> Result<SharedSecret> {
    LatticeKem::new(CoreConfig::default())?.decapsulate(ciphertext, secret_key, public_key)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::HashAlgorithm;
    use crate::error::CoreError;
    use lattice_kem_prelude::ErrorKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn kem() -> LatticeKem {
        match LatticeKem::new(CoreConfig::for_development()) {
            Ok(kem) => kem,
            Err(e) => panic!("development config must build: {e}"),
        }
    }

    #[test]
    fn test_byte_roundtrip() -> Result<()> {
        let kem = kem();
        let keypair = kem.generate_keypair()?;
        let enc = kem.encapsulate(keypair.public_key().as_bytes())?;
        let ss = kem.decapsulate(
            enc.ciphertext.as_bytes(),
            keypair.secret_key().as_bytes(),
            keypair.public_key().as_bytes(),
        )?;
        assert_eq!(ss, enc.shared_secret);
        Ok(())
    }

    #[test]
    fn test_seeded_rng_is_reproducible() -> Result<()> {
        let kem = kem();
        let a = kem.generate_keypair_with_rng(&mut ChaCha20Rng::seed_from_u64(5))?;
        let b = kem.generate_keypair_with_rng(&mut ChaCha20Rng::seed_from_u64(5))?;
        assert_eq!(a.public_key(), b.public_key());
        Ok(())
    }

    #[test]
    fn test_lengths_checked_before_arithmetic() {
        let kem = kem();
        let err = kem.encapsulate(&[0u8; 10]).err();
        assert!(matches!(err, Some(CoreError::Kem(_))));
        assert_eq!(err.and_then(|e| e.kind()), Some(ErrorKind::Format));

        let err = kem.decapsulate(&[0u8; 1088], &[0u8; 1151], &[0u8; 1184]).err();
        assert_eq!(err.and_then(|e| e.kind()), Some(ErrorKind::Format));
    }

    #[test]
    fn test_self_tests_cover_configured_provider() -> Result<()> {
        for algorithm in [HashAlgorithm::Shake128, HashAlgorithm::Shake256] {
            let kem = LatticeKem::new(CoreConfig::for_production().with_hash_algorithm(algorithm))?;
            assert!(self_test::self_tests_passed());
            self_test::check_instance(kem.primitive())?;
        }
        Ok(())
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = LatticeKem::new(CoreConfig::new().with_max_xof_blocks(0));
        assert!(matches!(result, Err(CoreError::Configuration(_))));
    }
}
