#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Kyber-768 Key Encapsulation
//!
//! [`MlKem768`] implements the three public operations over typed, fixed-size
//! artifacts. Decapsulation uses the Fujisaki-Okamoto transform with implicit
//! rejection: a ciphertext that fails re-encryption yields a pseudorandom
//! shared secret, never an error.
//!
//! ```
//! use lattice_kem_primitives::kem::MlKem768;
//! use rand::rngs::OsRng;
//!
//! let kem = MlKem768::new();
//! let keypair = kem.generate_keypair(&mut OsRng)?;
//! let (ciphertext, sender_secret) = kem.encapsulate(&mut OsRng, keypair.public_key())?;
//! let receiver_secret =
//!     kem.decapsulate(&ciphertext, keypair.secret_key(), keypair.public_key())?;
//! assert_eq!(sender_secret, receiver_secret);
//! # Ok::<(), lattice_kem_prelude::KemError>(())
//! ```

/// Core configuration.
pub mod config;
/// Key generation, encapsulation and decapsulation.
pub mod kyber;
/// Keys, ciphertexts and shared secrets.
pub mod types;

pub use config::KemConfig;
pub use kyber::MlKem768;
pub use types::{Ciphertext, KeyPair, PublicKey, SecretKey, SharedSecret};
