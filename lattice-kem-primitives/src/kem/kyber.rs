#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
// JUSTIFICATION: Splitting fixed-size encodings at compile-time offsets.
#![allow(clippy::indexing_slicing)]
#![allow(clippy::cast_possible_truncation)]

//! Kyber-768 key generation, encapsulation and decapsulation
//!
//! All three operations are pure functions of their inputs and the bytes drawn
//! from the supplied RNG. `MlKem768` holds no state beyond its hash provider and
//! configuration, so one instance can be shared across threads.

use rand_core::{CryptoRng, RngCore};
use subtle::{ConditionallySelectable, ConstantTimeEq};
use tracing::{debug, instrument};
use zeroize::Zeroizing;

use lattice_kem_prelude::{KemError, Result};

use crate::hash::{HashProvider, ShakeXof, Symmetric};
use crate::kem::config::KemConfig;
use crate::kem::types::{Ciphertext, KeyPair, PublicKey, SecretKey, SharedSecret};
use crate::params::{
    CIPHERTEXT_BYTES, DV, ETA1, ETA2, K, NAME, POLYVEC_BYTES, POLYVEC_COMPRESSED_BYTES,
    PUBLIC_KEY_BYTES, SYM_BYTES,
};
use crate::pct::pct_ml_kem;
use crate::polynomial::{Poly, PolyVec};
use crate::rand::fill_from;
use crate::sampling::{generate_matrix, sample_noise};

/// Kyber-768 over an injectable hash provider.
#[derive(Debug, Clone, Default)]
pub struct MlKem768<H = ShakeXof> {
    sym: Symmetric<H>,
    config: KemConfig,
}

impl MlKem768 {
    /// SHAKE256 provider, default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// SHAKE256 provider with `config`.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `config` fails validation.
    pub fn with_config(config: KemConfig) -> Result<Self> {
        Self::with_provider(ShakeXof::default(), config)
    }
}

impl<H: HashProvider> MlKem768<H> {
    /// Custom hash provider with `config`.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `config` fails validation.
    pub fn with_provider(provider: H, config: KemConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { sym: Symmetric::new(provider), config })
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &KemConfig {
        &self.config
    }

    /// Symmetric primitives in use.
    #[must_use]
    pub const fn symmetric(&self) -> &Symmetric<H> {
        &self.sym
    }

    /// Generate a key pair from 32 bytes of `rng` output.
    ///
    /// # Errors
    /// Returns `RandomnessUnavailable` if `rng` fails, or `InternalInvariant` if
    /// sampling or an enabled self-check fails.
    #[instrument(level = "debug", skip(self, rng), fields(algorithm = NAME))]
    pub fn generate_keypair<R: RngCore + CryptoRng + ?Sized>(&self, rng: &mut R) -> Result<KeyPair> {
        let mut seed = Zeroizing::new([0u8; SYM_BYTES]);
        fill_from(rng, seed.as_mut_slice())?;
        self.generate_keypair_from_seed(&seed)
    }

    /// Deterministic key generation from `seed`.
    ///
    /// # Errors
    /// Returns `InternalInvariant` if sampling or an enabled self-check fails.
    pub fn generate_keypair_from_seed(&self, seed: &[u8; SYM_BYTES]) -> Result<KeyPair> {
        let (public_seed, noise_seed) = self.sym.g(seed, &[]);
        let noise_seed = Zeroizing::new(noise_seed);

        let a = generate_matrix(&self.sym, &public_seed, false, self.config.max_xof_blocks)?;
        let s = Zeroizing::new(self.noise_vector(&noise_seed, 0, ETA1));
        let e = Zeroizing::new(self.noise_vector(&noise_seed, K as u8, ETA1));

        let s_hat = Zeroizing::new(s.ntt());
        if self.config.verify_ntt_roundtrip {
            verify_roundtrip(&s, &s_hat.polys().map(|p| p.inverse_ntt()))?;
        }

        let t = a.mul_vector(&s_hat).add(&e);

        let mut public_key = [0u8; PUBLIC_KEY_BYTES];
        public_key[..POLYVEC_BYTES].copy_from_slice(&t.to_bytes());
        public_key[POLYVEC_BYTES..].copy_from_slice(&public_seed);

        let keypair = KeyPair {
            public_key: PublicKey::from_array(public_key),
            secret_key: SecretKey::from_array(s.to_bytes()),
        };

        if self.config.pairwise_consistency_check {
            pct_ml_kem(self, &keypair)?;
        }
        debug!("generated key pair");
        Ok(keypair)
    }

    /// Encapsulate a fresh shared secret to `public_key`.
    ///
    /// # Errors
    /// Returns `RandomnessUnavailable` if `rng` fails, or `InternalInvariant` if
    /// sampling fails.
    #[instrument(level = "debug", skip(self, rng, public_key), fields(algorithm = NAME))]
    pub fn encapsulate<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        public_key: &PublicKey,
    ) -> Result<(Ciphertext, SharedSecret)> {
        let mut message = Zeroizing::new([0u8; SYM_BYTES]);
        fill_from(rng, message.as_mut_slice())?;
        self.encapsulate_with_message(public_key, &message)
    }

    /// Deterministic encapsulation of `message`.
    ///
    /// # Errors
    /// Returns `InternalInvariant` if sampling fails.
    pub fn encapsulate_with_message(
        &self,
        public_key: &PublicKey,
        message: &[u8; SYM_BYTES],
    ) -> Result<(Ciphertext, SharedSecret)> {
        let public_key_hash = self.sym.h(public_key.as_bytes());
        let (shared_key, coins) = self.sym.g(&public_key_hash, message);
        let shared_key = Zeroizing::new(shared_key);
        let coins = Zeroizing::new(coins);

        let ciphertext = self.encrypt(public_key, message, &coins)?;
        let shared_secret = self.sym.kdf(&shared_key, &self.sym.h(ciphertext.as_bytes()));
        Ok((ciphertext, SharedSecret::from_array(shared_secret)))
    }

    /// Recover the shared secret from `ciphertext`.
    ///
    /// A ciphertext that does not re-encrypt to itself yields
    /// `KDF(J(secret_key, ciphertext), H(ciphertext))`. The choice is made in
    /// constant time.
    ///
    /// # Errors
    /// Only `InternalInvariant` if re-encryption sampling fails.
    #[instrument(level = "debug", skip(self, ciphertext, secret_key, public_key), fields(algorithm = NAME))]
    pub fn decapsulate(
        &self,
        ciphertext: &Ciphertext,
        secret_key: &SecretKey,
        public_key: &PublicKey,
    ) -> Result<SharedSecret> {
        let message = self.decrypt(ciphertext, secret_key)?;

        let public_key_hash = self.sym.h(public_key.as_bytes());
        let (candidate, coins) = self.sym.g(&public_key_hash, message.as_slice());
        let candidate = Zeroizing::new(candidate);
        let coins = Zeroizing::new(coins);

        let reencrypted = self.encrypt(public_key, &message, &coins)?;
        let matches = reencrypted.ct_eq(ciphertext);

        let fallback =
            Zeroizing::new(self.sym.rejection_key(secret_key.as_bytes(), ciphertext.as_bytes()));
        let mut key = Zeroizing::new([0u8; SYM_BYTES]);
        for (out, (good, bad)) in key.iter_mut().zip(candidate.iter().zip(fallback.iter())) {
            *out = u8::conditional_select(bad, good, matches);
        }

        let shared_secret = self.sym.kdf(&key, &self.sym.h(ciphertext.as_bytes()));
        Ok(SharedSecret::from_array(shared_secret))
    }

    fn noise_vector(&self, seed: &[u8; SYM_BYTES], first_nonce: u8, eta: usize) -> PolyVec {
        PolyVec::new(std::array::from_fn(|i| {
            sample_noise(&self.sym, seed, first_nonce.wrapping_add(i as u8), eta)
        }))
    }

    /// `u = A^T r + e1`, `v = t . r + e2 + encode(message)`, compressed.
    fn encrypt(
        &self,
        public_key: &PublicKey,
        message: &[u8; SYM_BYTES],
        coins: &[u8; SYM_BYTES],
    ) -> Result<Ciphertext> {
        let t_hat = PolyVec::from_bytes(public_key.t_bytes())?.ntt();
        let a_transposed =
            generate_matrix(&self.sym, &public_key.public_seed(), true, self.config.max_xof_blocks)?;

        let r = Zeroizing::new(self.noise_vector(coins, 0, ETA1));
        let e1 = Zeroizing::new(self.noise_vector(coins, K as u8, ETA2));
        let e2 = Zeroizing::new(sample_noise(&self.sym, coins, 2 * K as u8, ETA2));
        let r_hat = Zeroizing::new(r.ntt());

        let u = a_transposed.mul_vector(&r_hat).add(&e1);
        let v = t_hat.dot(&r_hat).add(&e2).add(&Poly::from_message(message));

        let mut bytes = [0u8; CIPHERTEXT_BYTES];
        bytes[..POLYVEC_COMPRESSED_BYTES].copy_from_slice(&u.compress());
        v.compress_into(DV, &mut bytes[POLYVEC_COMPRESSED_BYTES..])?;
        Ok(Ciphertext::from_array(bytes))
    }

    /// `decode(v - s . u)`.
    fn decrypt(
        &self,
        ciphertext: &Ciphertext,
        secret_key: &SecretKey,
    ) -> Result<Zeroizing<[u8; SYM_BYTES]>> {
        let (u_bytes, v_bytes) = ciphertext.as_bytes().split_at(POLYVEC_COMPRESSED_BYTES);
        let u = PolyVec::decompress(u_bytes)?;
        let v = Poly::decompress_from(v_bytes, DV)?;

        let s_hat = Zeroizing::new(PolyVec::from_bytes(secret_key.as_bytes())?.ntt());
        let w = Zeroizing::new(v.sub(&s_hat.dot(&u.ntt())));
        Ok(Zeroizing::new(w.to_message()))
    }
}

fn verify_roundtrip(original: &PolyVec, recovered: &[Poly; K]) -> Result<()> {
    if original.polys() == recovered {
        Ok(())
    } else {
        Err(KemError::InternalInvariant("NTT round trip changed a secret polynomial".to_string()))
    }
}
