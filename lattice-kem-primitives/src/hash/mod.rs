#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Symmetric Primitives
//!
//! `H`, `G`, `PRF`, `XOF`, `KDF` and the implicit-rejection key `J`, all
//! built on an injectable [`HashProvider`].

pub mod provider;
pub mod symmetric;

pub use provider::{HashProvider, ShakeReader, ShakeXof, XofReader};
pub use symmetric::Symmetric;
