//! Domain Separation Constants
//!
//! Each symmetric function absorbs its own label ahead of the input bytes, so
//! H, G, PRF, XOF, KDF and J never agree on identical input.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Domain for `H`, the 32-byte hash of public keys and ciphertexts.
pub const HASH_H: &[u8] = b"LatticeKem-v1-H";

/// Domain for `G`, the 64-byte seed / coin expander.
pub const HASH_G: &[u8] = b"LatticeKem-v1-G";

/// Domain for `PRF`, the noise expander feeding centered-binomial sampling.
pub const PRF: &[u8] = b"LatticeKem-v1-PRF";

/// Domain for `XOF`, the stream feeding uniform rejection sampling of the matrix.
pub const XOF: &[u8] = b"LatticeKem-v1-XOF";

/// Domain for `KDF`, the final shared-secret derivation.
pub const KDF: &[u8] = b"LatticeKem-v1-KDF";

/// Domain for `J`, the implicit-rejection fallback key.
pub const REJECTION_KEY: &[u8] = b"LatticeKem-v1-J";

/// All labels, in a fixed order.
pub const ALL: [&[u8]; 6] = [HASH_H, HASH_G, PRF, XOF, KDF, REJECTION_KEY];
