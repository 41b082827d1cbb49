#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # LatticeKem
//!
//! Post-quantum key agreement with Kyber-768: two parties derive a shared
//! 32-byte secret whose security rests on the Module-LWE problem.
//!
//! ## Key Features
//!
//! - **Byte-exact wire format**: 1184-byte public keys, 1152-byte secret keys,
//!   1088-byte ciphertexts, 32-byte shared secrets
//! - **Implicit rejection**: decapsulation never reports an invalid ciphertext
//! - **Pluggable hashing**: SHAKE256 or SHAKE128 behind every symmetric function
//! - **Self-tests**: power-up checks and an optional pairwise consistency test
//! - **Structured logging**: `tracing` spans and events that never carry secrets
//!
//! ## Quick Start
//!
//! ```rust
//! use lattice_kem::{decapsulate, encapsulate, generate_keypair};
//!
//! // Alice publishes her public key
//! let alice = generate_keypair()?;
//!
//! // Bob encapsulates a secret to it
//! let bob = encapsulate(alice.public_key().as_bytes())?;
//!
//! // Alice recovers the same secret
//! let secret = decapsulate(
//!     bob.ciphertext.as_bytes(),
//!     alice.secret_key().as_bytes(),
//!     alice.public_key().as_bytes(),
//! )?;
//! assert_eq!(secret, bob.shared_secret);
//! # Ok::<(), lattice_kem::CoreError>(())
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use lattice_kem::{CoreConfig, LatticeKem};
//!
//! let kem = LatticeKem::new(CoreConfig::for_production())?;
//! let keypair = kem.generate_keypair()?;
//! # let _ = keypair;
//! # Ok::<(), lattice_kem::CoreError>(())
//! ```

/// Byte-level API.
pub mod api;
/// Configuration.
pub mod config;
/// Error types.
pub mod error;
/// Logging.
pub mod logging;

#[doc(hidden)]
pub use tracing as __tracing;

pub use api::{decapsulate, encapsulate, generate_keypair, Encapsulation, LatticeKem};
pub use config::{CoreConfig, HashAlgorithm};
pub use error::{CoreError, Result};
pub use lattice_kem_prelude::{ErrorKind, KemError};
pub use lattice_kem_primitives::kem::{Ciphertext, KeyPair, PublicKey, SecretKey, SharedSecret};
pub use lattice_kem_primitives::params;
pub use logging::{init_tracing, init_tracing_with_config, init_tracing_with_filter, sanitize_data};

/// Library version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the power-up self-tests once for this process.
///
/// # Errors
///
/// Returns `CoreError::Kem` if any self-test fails.
pub fn init() -> Result<()> {
    lattice_kem_primitives::self_test::initialize_and_test()?;
    Ok(())
}

/// Whether the power-up self-tests have passed in this process.
#[must_use]
pub fn self_tests_passed() -> bool {
    lattice_kem_primitives::self_test::self_tests_passed()
}
