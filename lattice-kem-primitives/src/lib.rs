#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # LatticeKem Primitives
//!
//! Kyber-768 (k = 3) key encapsulation and the lattice arithmetic beneath it.
//!
//! ## Modules
//!
//! - **params**: ring, noise and compression parameters and fixed byte sizes
//! - **hash**: domain-separated `H`, `G`, `PRF`, `XOF`, `KDF`, `J` over an injectable [`HashProvider`]
//! - **polynomial**: field arithmetic, NTT, polynomials, vectors and matrices
//! - **sampling**: uniform rejection sampling and centered binomial noise
//! - **kem**: key generation, encapsulation and decapsulation
//! - **rand**: CSPRNG helpers that surface generator failure
//! - **pct**: pairwise consistency test for new key pairs
//! - **self_test**: power-up self-tests
//!
//! ## Wire sizes
//!
//! | Artifact | Size |
//! |-----------|------|
//! | Public key | 1184 B |
//! | Secret key | 1152 B |
//! | Ciphertext | 1088 B |
//! | Shared secret | 32 B |
//!
//! The hash provider is the only pluggable component. Swapping it changes every
//! output byte but none of the arithmetic.

pub mod hash;
pub mod kem;
pub mod params;
pub mod pct;
pub mod polynomial;
pub mod rand;
pub mod sampling;

pub use hash::{HashProvider, ShakeXof, Symmetric, XofReader};
pub use kem::{Ciphertext, KemConfig, KeyPair, MlKem768, PublicKey, SecretKey, SharedSecret};
pub use lattice_kem_prelude::{ErrorKind, KemError, Result};
