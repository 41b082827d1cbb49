//! Core Error Types for LatticeKem
//!
//! Every fallible operation in the workspace reports one of four kinds of
//! failure. Decapsulation of a well-formed ciphertext is not one of them: it
//! always yields a shared secret.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use std::fmt;

use thiserror::Error;

/// Result type alias for LatticeKem operations
pub type Result<T> = std::result::Result<T, KemError>;

/// Error type for all LatticeKem operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KemError {
    /// An input buffer does not have the fixed length of its artifact.
    #[error("Invalid {artifact} length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Which artifact was being parsed (public key, ciphertext, ...)
        artifact: &'static str,
        /// Required length in bytes
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },

    /// The cryptographically secure random source failed.
    #[error("Random number generation failed: {0}")]
    RandomnessUnavailable(String),

    /// An internal consistency check failed; no output was produced.
    #[error("Internal invariant violated: {0}")]
    InternalInvariant(String),

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Coarse classification of a [`KemError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input, rejected before any arithmetic.
    Format,
    /// The random source is unavailable. Fatal for generation.
    Randomness,
    /// A defect was detected. Fail fast.
    InternalInvariant,
    /// A configuration value was rejected.
    Configuration,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Format => write!(f, "FormatError"),
            ErrorKind::Randomness => write!(f, "RandomnessError"),
            ErrorKind::InternalInvariant => write!(f, "InternalInvariantError"),
            ErrorKind::Configuration => write!(f, "ConfigurationError"),
        }
    }
}

impl KemError {
    /// Returns the taxonomy bucket of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            KemError::InvalidLength { .. } => ErrorKind::Format,
            KemError::RandomnessUnavailable(_) => ErrorKind::Randomness,
            KemError::InternalInvariant(_) => ErrorKind::InternalInvariant,
            KemError::InvalidConfiguration(_) => ErrorKind::Configuration,
        }
    }

    /// Whether the caller can retry with corrected input.
    ///
    /// Randomness and invariant failures are never recoverable: the operation
    /// must be aborted rather than retried with a weaker source.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Format | ErrorKind::Configuration)
    }

    /// Builds an [`KemError::InvalidLength`] if `actual != expected`.
    ///
    /// # Errors
    /// Returns `InvalidLength` when the lengths differ.
    pub fn check_length(artifact: &'static str, expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(KemError::InvalidLength { artifact, expected, actual })
        }
    }
}
