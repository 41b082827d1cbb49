#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_possible_truncation)]

//! Polynomials in the normal and NTT domains.
//!
//! Coefficients are always canonical, in `[0, q)`.

use lattice_kem_prelude::{KemError, Result};
use zeroize::Zeroize;

use crate::params::{N, POLY_BYTES, Q, SYM_BYTES};
use crate::polynomial::arithmetic::{self, add, conditional_subtract_q, sub};
use crate::polynomial::ntt;

/// `round(q / 2)`, the encoding of a message bit 1.
pub const HALF_Q: u16 = Q.div_ceil(2);

/// A polynomial in the normal (coefficient) domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Zeroize)]
pub struct Poly {
    coeffs: [u16; N],
}

/// A polynomial in the NTT domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Zeroize)]
pub struct NttPoly {
    coeffs: [u16; N],
}

impl Default for Poly {
    fn default() -> Self {
        Self::zero()
    }
}

impl Default for NttPoly {
    fn default() -> Self {
        Self::zero()
    }
}

/// Widest compression that still loses information (`2^bits < q`).
pub const MAX_COMPRESSION_BITS: u32 = 11;

/// Accept only compression widths in `1..=MAX_COMPRESSION_BITS`.
///
/// # Errors
/// Returns `InvalidConfiguration` for any other width.
pub fn check_compression_bits(bits: u32) -> Result<()> {
    if (1..=MAX_COMPRESSION_BITS).contains(&bits) {
        Ok(())
    } else {
        Err(KemError::InvalidConfiguration(format!(
            "compression width must be 1..={MAX_COMPRESSION_BITS} bits, got {bits}"
        )))
    }
}

/// Round `2^d · x / q` to the nearest integer, mod `2^d`.
///
/// `bits` must already have passed [`check_compression_bits`].
#[inline]
#[must_use]
pub(crate) const fn compress_coefficient(x: u16, bits: u32) -> u16 {
    let q = Q as u32;
    let scaled = ((x as u32) << bits) + q / 2;
    ((scaled / q) & ((1 << bits) - 1)) as u16
}

/// Round `q · y / 2^d` to the nearest integer.
#[inline]
#[must_use]
pub(crate) const fn decompress_coefficient(y: u16, bits: u32) -> u16 {
    ((y as u32 * Q as u32 + (1 << (bits - 1))) >> bits) as u16
}

/// Worst-case distance between `x` and `decompress(compress(x))`: `round(q / 2^(d+1))`.
///
/// # Errors
/// Returns `InvalidConfiguration` if `bits` is out of range.
pub fn compression_error_bound(bits: u32) -> Result<u16> {
    check_compression_bits(bits)?;
    let denominator = 1u32 << (bits + 1);
    Ok(((u32::from(Q) + denominator / 2) / denominator) as u16)
}

/// Little-endian `bits`-wide packing of 256 values.
pub(crate) fn pack_bits(values: &[u16; N], bits: u32, out: &mut [u8]) {
    debug_assert_eq!(out.len(), bits as usize * N / 8);
    let mut acc = 0u32;
    let mut acc_bits = 0u32;
    let mut index = 0;
    for &value in values {
        acc |= u32::from(value) << acc_bits;
        acc_bits += bits;
        while acc_bits >= 8 {
            out[index] = acc as u8;
            index += 1;
            acc >>= 8;
            acc_bits -= 8;
        }
    }
}

/// Inverse of [`pack_bits`].
pub(crate) fn unpack_bits(bytes: &[u8], bits: u32) -> [u16; N] {
    debug_assert_eq!(bytes.len(), bits as usize * N / 8);
    let mask = (1u32 << bits) - 1;
    let mut out = [0u16; N];
    let mut acc = 0u32;
    let mut acc_bits = 0u32;
    let mut index = 0;
    for &byte in bytes {
        acc |= u32::from(byte) << acc_bits;
        acc_bits += 8;
        while acc_bits >= bits && index < N {
            out[index] = (acc & mask) as u16;
            index += 1;
            acc >>= bits;
            acc_bits -= bits;
        }
    }
    out
}

impl Poly {
    /// The zero polynomial.
    #[must_use]
    pub const fn zero() -> Self {
        Self { coeffs: [0; N] }
    }

    /// Caller guarantees every coefficient is below q.
    pub(crate) const fn from_canonical(coeffs: [u16; N]) -> Self {
        Self { coeffs }
    }

    /// Canonicalize arbitrary unsigned coefficients into `[0, q)`.
    #[must_use]
    pub fn reduce(raw: &[u32; N]) -> Self {
        Self { coeffs: std::array::from_fn(|i| arithmetic::barrett_reduce(raw[i])) }
    }

    /// Build from signed coefficients, reducing each mod q.
    #[must_use]
    pub fn from_signed(coeffs: &[i32; N]) -> Self {
        Self { coeffs: std::array::from_fn(|i| arithmetic::from_signed(coeffs[i])) }
    }

    /// Coefficients in `[0, q)`.
    #[must_use]
    pub const fn coeffs(&self) -> &[u16; N] {
        &self.coeffs
    }

    /// Coefficient-wise `self + other`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self { coeffs: std::array::from_fn(|i| add(self.coeffs[i], other.coeffs[i])) }
    }

    /// Coefficient-wise `self - other`.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        Self { coeffs: std::array::from_fn(|i| sub(self.coeffs[i], other.coeffs[i])) }
    }

    /// Transform to the NTT domain.
    #[must_use]
    pub fn ntt(&self) -> NttPoly {
        ntt::forward(self)
    }

    /// Lossy compression of every coefficient to `bits` bits.
    #[must_use]
    pub(crate) fn compress(&self, bits: u32) -> [u16; N] {
        std::array::from_fn(|i| compress_coefficient(self.coeffs[i], bits))
    }

    /// Inverse of [`Poly::compress`], up to [`compression_error_bound`].
    ///
    /// Values wider than `bits` are masked.
    #[must_use]
    pub(crate) fn decompress(values: &[u16; N], bits: u32) -> Self {
        let mask = ((1u32 << bits) - 1) as u16;
        Self { coeffs: std::array::from_fn(|i| decompress_coefficient(values[i] & mask, bits)) }
    }

    /// Compress and pack into `bits * 32` bytes.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `bits` is outside `1..=11`, and
    /// `InvalidLength` if `out` is not exactly `bits * 32` bytes.
    pub fn compress_into(&self, bits: u32, out: &mut [u8]) -> Result<()> {
        check_compression_bits(bits)?;
        KemError::check_length("compressed polynomial", bits as usize * N / 8, out.len())?;
        pack_bits(&self.compress(bits), bits, out);
        Ok(())
    }

    /// Unpack and decompress `bits * 32` bytes.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `bits` is outside `1..=11`, and
    /// `InvalidLength` if `bytes` is not exactly `bits * 32` bytes.
    pub fn decompress_from(bytes: &[u8], bits: u32) -> Result<Self> {
        check_compression_bits(bits)?;
        KemError::check_length("compressed polynomial", bits as usize * N / 8, bytes.len())?;
        Ok(Self::decompress(&unpack_bits(bytes, bits), bits))
    }

    /// 12-bit packed serialization.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; POLY_BYTES] {
        let mut out = [0u8; POLY_BYTES];
        pack_bits(&self.coeffs, 12, &mut out);
        out
    }

    /// Parse 12-bit packed bytes. Values in `[q, 4096)` are reduced.
    ///
    /// # Errors
    /// Returns `InvalidLength` if `bytes` is not exactly 384 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        KemError::check_length("polynomial", POLY_BYTES, bytes.len())?;
        let raw = unpack_bits(bytes, 12);
        Ok(Self { coeffs: std::array::from_fn(|i| conditional_subtract_q(raw[i])) })
    }

    /// Map each message bit to 0 or `round(q/2)`.
    #[must_use]
    pub fn from_message(message: &[u8; SYM_BYTES]) -> Self {
        Self {
            coeffs: std::array::from_fn(|i| {
                let bit = u16::from((message[i / 8] >> (i % 8)) & 1);
                0u16.wrapping_sub(bit) & HALF_Q
            }),
        }
    }

    /// Recover each bit by rounding to the nearer of 0 and `q/2`.
    #[must_use]
    pub fn to_message(&self) -> [u8; SYM_BYTES] {
        let mut message = [0u8; SYM_BYTES];
        for (i, &coeff) in self.coeffs.iter().enumerate() {
            message[i / 8] |= (compress_coefficient(coeff, 1) as u8) << (i % 8);
        }
        message
    }
}

impl NttPoly {
    /// The zero polynomial.
    #[must_use]
    pub const fn zero() -> Self {
        Self { coeffs: [0; N] }
    }

    /// Caller guarantees every coefficient is below q.
    pub(crate) const fn from_canonical(coeffs: [u16; N]) -> Self {
        Self { coeffs }
    }

    /// NTT-domain coefficients in `[0, q)`.
    #[must_use]
    pub const fn coeffs(&self) -> &[u16; N] {
        &self.coeffs
    }

    /// Coefficient-wise `self + other`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self { coeffs: std::array::from_fn(|i| add(self.coeffs[i], other.coeffs[i])) }
    }

    /// Pointwise product in the NTT domain.
    #[must_use]
    pub fn basemul(&self, other: &Self) -> Self {
        ntt::basemul(self, other)
    }

    /// Transform back to the normal domain.
    #[must_use]
    pub fn inverse_ntt(&self) -> Poly {
        ntt::inverse(self)
    }
}

#[cfg(test)]
#[allow(clippy::panic_in_result_fn)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn distance(a: u16, b: u16) -> u16 {
        let d = sub(a, b);
        d.min(Q - d)
    }

    #[test]
    fn test_half_q() {
        assert_eq!(HALF_Q, 1665);
    }

    #[test]
    fn test_add_sub_inverse() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let a = Poly::from_canonical(std::array::from_fn(|_| rng.gen_range(0..Q)));
        let b = Poly::from_canonical(std::array::from_fn(|_| rng.gen_range(0..Q)));
        assert_eq!(a.add(&b).sub(&b), a);
        assert!(a.add(&b).coeffs().iter().all(|&c| c < Q));
    }

    #[test]
    fn test_reduce_canonicalizes() {
        let raw: [u32; N] = std::array::from_fn(|i| (i as u32) * 100_003);
        let poly = Poly::reduce(&raw);
        for (i, &c) in poly.coeffs().iter().enumerate() {
            assert_eq!(u32::from(c), raw[i] % u32::from(Q));
        }
    }

    #[test]
    fn test_from_signed_noise() {
        let mut signed = [0i32; N];
        signed[0] = -2;
        signed[1] = 2;
        let poly = Poly::from_signed(&signed);
        assert_eq!(poly.coeffs()[0], Q - 2);
        assert_eq!(poly.coeffs()[1], 2);
    }

    #[test]
    fn test_compression_error_within_bound() -> Result<()> {
        for bits in [1u32, 4, 10, 11] {
            let bound = compression_error_bound(bits)?;
            for x in 0..Q {
                let y = compress_coefficient(x, bits);
                assert!(u32::from(y) < (1 << bits));
                let back = decompress_coefficient(y, bits);
                assert!(back < Q);
                assert!(distance(x, back) <= bound, "bits={bits} x={x} back={back}");
            }
        }
        Ok(())
    }

    #[test]
    fn test_compression_bounds_values() -> Result<()> {
        assert_eq!(compression_error_bound(10)?, 2);
        assert_eq!(compression_error_bound(4)?, 104);
        assert_eq!(compression_error_bound(1)?, 832);
        Ok(())
    }

    #[test]
    fn test_compression_width_out_of_range() {
        for bits in [0u32, 12, 16, 32, u32::MAX] {
            let mut out = vec![0u8; 1024];
            assert!(matches!(
                Poly::zero().compress_into(bits, &mut out),
                Err(KemError::InvalidConfiguration(_))
            ));
            assert!(matches!(
                Poly::decompress_from(&[], bits),
                Err(KemError::InvalidConfiguration(_))
            ));
            assert!(matches!(
                Poly::decompress_from(&out, bits),
                Err(KemError::InvalidConfiguration(_))
            ));
            assert!(compression_error_bound(bits).is_err());
        }
        assert!(check_compression_bits(1).is_ok());
        assert!(check_compression_bits(MAX_COMPRESSION_BITS).is_ok());
    }

    #[test]
    fn test_bytes_roundtrip() -> Result<()> {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        let p = Poly::from_canonical(std::array::from_fn(|_| rng.gen_range(0..Q)));
        let bytes = p.to_bytes();
        assert_eq!(bytes.len(), 384);
        assert_eq!(Poly::from_bytes(&bytes)?, p);
        Ok(())
    }

    #[test]
    fn test_from_bytes_length_checked() {
        assert!(matches!(
            Poly::from_bytes(&[0u8; 383]),
            Err(KemError::InvalidLength { expected: 384, actual: 383, .. })
        ));
    }

    #[test]
    fn test_from_bytes_reduces_out_of_range() -> Result<()> {
        // 0xFFF in both 12-bit slots
        let mut bytes = [0u8; POLY_BYTES];
        bytes[0] = 0xFF;
        bytes[1] = 0xFF;
        bytes[2] = 0xFF;
        let poly = Poly::from_bytes(&bytes)?;
        assert_eq!(poly.coeffs()[0], 4095 - Q);
        assert_eq!(poly.coeffs()[1], 4095 - Q);
        Ok(())
    }

    #[test]
    fn test_packing_layout() {
        let mut values = [0u16; N];
        values[0] = 0x123;
        values[1] = 0x456;
        let mut out = [0u8; POLY_BYTES];
        pack_bits(&values, 12, &mut out);
        assert_eq!(&out[..3], &[0x23, 0x61, 0x45]);
        assert_eq!(unpack_bits(&out, 12), values);
    }

    #[test]
    fn test_compressed_roundtrip_lengths() -> Result<()> {
        let p = Poly::from_message(&[0xA5; 32]);
        let mut du = [0u8; 320];
        p.compress_into(10, &mut du)?;
        let mut dv = [0u8; 128];
        p.compress_into(4, &mut dv)?;
        assert_eq!(Poly::decompress_from(&dv, 4)?.to_message(), [0xA5; 32]);
        assert!(p.compress_into(4, &mut du).is_err());
        Ok(())
    }

    #[test]
    fn test_message_roundtrip() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let mut message = [0u8; 32];
        rng.fill(&mut message);
        let poly = Poly::from_message(&message);
        assert!(poly.coeffs().iter().all(|&c| c == 0 || c == HALF_Q));
        assert_eq!(poly.to_message(), message);
    }

    #[test]
    fn test_message_decoding_threshold() {
        // nearest rounding: the boundary sits at q/4 and 3q/4
        let mut coeffs = [0u16; N];
        coeffs[0] = 832;
        coeffs[1] = 833;
        coeffs[2] = 2496;
        coeffs[3] = 2497;
        let message = Poly::from_canonical(coeffs).to_message();
        assert_eq!(message[0] & 0x0F, 0b0110);
    }
}
