#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
// JUSTIFICATION: domain labels are compile-time constants well below 255 bytes.
#![allow(clippy::cast_possible_truncation)]

//! Hash provider seam
//!
//! Everything above this module only sees "absorb a domain label and some
//! inputs, then squeeze as many bytes as needed". Any provider with uniform
//! output works; swapping it changes the derived keys but no other behavior.

use std::fmt;

use sha3::digest::{ExtendableOutput, Update, XofReader as _};
use sha3::{Shake128, Shake128Reader, Shake256, Shake256Reader};

/// An extendable output stream.
pub trait XofReader {
    /// Fill `out` with the next `out.len()` bytes of the stream.
    fn squeeze(&mut self, out: &mut [u8]);
}

/// Injectable hash / XOF primitive.
pub trait HashProvider: Send + Sync + fmt::Debug {
    /// Output stream type.
    type Reader: XofReader;

    /// Absorb `len(domain) || domain || inputs[0] || inputs[1] || ...`.
    ///
    /// Callers only pass inputs of fixed length per domain, so the
    /// concatenation is unambiguous.
    fn absorb(&self, domain: &[u8], inputs: &[&[u8]]) -> Self::Reader;
}

/// SHAKE-based provider from the `sha3` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShakeXof {
    /// SHAKE256 (256-bit security strength)
    #[default]
    Shake256,
    /// SHAKE128 (128-bit security strength)
    Shake128,
}

impl ShakeXof {
    /// Algorithm name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            ShakeXof::Shake256 => "SHAKE256",
            ShakeXof::Shake128 => "SHAKE128",
        }
    }
}

/// Output stream of [`ShakeXof`].
pub enum ShakeReader {
    /// SHAKE256 stream
    Shake256(Shake256Reader),
    /// SHAKE128 stream
    Shake128(Shake128Reader),
}

impl fmt::Debug for ShakeReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShakeReader::Shake256(_) => f.write_str("ShakeReader::Shake256"),
            ShakeReader::Shake128(_) => f.write_str("ShakeReader::Shake128"),
        }
    }
}

impl XofReader for ShakeReader {
    fn squeeze(&mut self, out: &mut [u8]) {
        match self {
            ShakeReader::Shake256(reader) => reader.read(out),
            ShakeReader::Shake128(reader) => reader.read(out),
        }
    }
}

fn feed<U: Update>(hasher: &mut U, domain: &[u8], inputs: &[&[u8]]) {
    hasher.update(&[domain.len() as u8]);
    hasher.update(domain);
    for input in inputs {
        hasher.update(input);
    }
}

impl HashProvider for ShakeXof {
    type Reader = ShakeReader;

    fn absorb(&self, domain: &[u8], inputs: &[&[u8]]) -> ShakeReader {
        match self {
            ShakeXof::Shake256 => {
                let mut hasher = Shake256::default();
                feed(&mut hasher, domain, inputs);
                ShakeReader::Shake256(hasher.finalize_xof())
            }
            ShakeXof::Shake128 => {
                let mut hasher = Shake128::default();
                feed(&mut hasher, domain, inputs);
                ShakeReader::Shake128(hasher.finalize_xof())
            }
        }
    }
}
