#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Kyber-768 parameter set
//!
//! | Artifact | Size |
//! |---|---|
//! | Public key | 1184 bytes |
//! | Secret key | 1152 bytes |
//! | Ciphertext | 1088 bytes |
//! | Shared secret | 32 bytes |

/// Ring degree: polynomials live in `Z_q[X]/(X^N + 1)`.
pub const N: usize = 256;

/// Prime modulus.
pub const Q: u16 = 3329;

/// Module rank.
pub const K: usize = 3;

/// Noise width of secrets `s`, `r` and key-generation errors `e`.
pub const ETA1: usize = 2;

/// Noise width of encryption errors `e1`, `e2`.
pub const ETA2: usize = 2;

/// Compression bits of the ciphertext vector `u`.
pub const DU: u32 = 10;

/// Compression bits of the ciphertext polynomial `v`.
pub const DV: u32 = 4;

/// Length of seeds, messages, hashes and shared secrets.
pub const SYM_BYTES: usize = 32;

/// 12-bit packed polynomial.
pub const POLY_BYTES: usize = 12 * N / 8;

/// 12-bit packed polynomial vector.
pub const POLYVEC_BYTES: usize = K * POLY_BYTES;

/// One `u` component compressed to `DU` bits.
pub const POLY_COMPRESSED_DU_BYTES: usize = DU as usize * N / 8;

/// `u` compressed to `DU` bits.
pub const POLYVEC_COMPRESSED_BYTES: usize = K * POLY_COMPRESSED_DU_BYTES;

/// `v` compressed to `DV` bits.
pub const POLY_COMPRESSED_DV_BYTES: usize = DV as usize * N / 8;

/// Encoded public key: `t || publicSeed`.
pub const PUBLIC_KEY_BYTES: usize = POLYVEC_BYTES + SYM_BYTES;

/// Encoded secret key: `s`.
pub const SECRET_KEY_BYTES: usize = POLYVEC_BYTES;

/// Encoded ciphertext: `compress(u) || compress(v)`.
pub const CIPHERTEXT_BYTES: usize = POLYVEC_COMPRESSED_BYTES + POLY_COMPRESSED_DV_BYTES;

/// Shared secret length.
pub const SHARED_SECRET_BYTES: usize = SYM_BYTES;

/// Human-readable parameter set name.
pub const NAME: &str = "Kyber-768";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_sizes() {
        assert_eq!(PUBLIC_KEY_BYTES, 1184);
        assert_eq!(SECRET_KEY_BYTES, 1152);
        assert_eq!(CIPHERTEXT_BYTES, 1088);
        assert_eq!(SHARED_SECRET_BYTES, 32);
    }

    #[test]
    fn test_component_sizes() {
        assert_eq!(POLY_BYTES, 384);
        assert_eq!(POLY_COMPRESSED_DU_BYTES, 320);
        assert_eq!(POLY_COMPRESSED_DV_BYTES, 128);
    }
}
