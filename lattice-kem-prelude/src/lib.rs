//! LatticeKem Prelude Crate
//!
//! Common types shared by every LatticeKem crate.
//!
//! # Key Components
//!
//! - **Error Handling**: [`KemError`] and the [`ErrorKind`] taxonomy
//! - **Domain Constants**: separation labels for the symmetric primitives
//!
//! # Example
//!
//! ```rust
//! use lattice_kem_prelude::{KemError, Result};
//!
//! fn check_len(bytes: &[u8]) -> Result<()> {
//!     if bytes.len() != 32 {
//!         return Err(KemError::InvalidLength {
//!             artifact: "seed",
//!             expected: 32,
//!             actual: bytes.len(),
//!         });
//!     }
//!     Ok(())
//! }
//! # assert!(check_len(&[0u8; 32]).is_ok());
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Domain-separation labels for H, G, PRF, XOF, KDF and J.
pub mod domains;
/// Error taxonomy.
pub mod error;

pub use error::{ErrorKind, KemError, Result};
