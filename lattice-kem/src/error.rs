//! Error types for the LatticeKem facade.
//!
//! Wraps the primitive [`KemError`] and adds configuration and logging failures.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use lattice_kem_prelude::{ErrorKind, KemError};
use thiserror::Error;

/// Errors returned by the facade.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Failure inside key generation, encapsulation or decapsulation, or a
    /// malformed input buffer.
    #[error(transparent)]
    Kem(#[from] KemError),

    /// Configuration validation error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Error category, if the error maps onto the KEM taxonomy.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            CoreError::Kem(err) => Some(err.kind()),
            CoreError::Configuration(_) => Some(ErrorKind::Configuration),
            CoreError::Logging(_) => None,
        }
    }

    /// Whether the caller can fix the problem by changing its input.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            CoreError::Kem(err) => err.is_recoverable(),
            CoreError::Configuration(_) => true,
            CoreError::Logging(_) => false,
        }
    }
}
