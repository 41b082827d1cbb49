#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![allow(clippy::indexing_slicing)]

//! Rank-`K` polynomial vectors and the `K x K` public matrix.

use lattice_kem_prelude::{KemError, Result};
use zeroize::Zeroize;

use crate::params::{DU, K, POLYVEC_BYTES, POLYVEC_COMPRESSED_BYTES, POLY_BYTES, POLY_COMPRESSED_DU_BYTES};
use crate::polynomial::poly::{pack_bits, NttPoly, Poly};

/// A vector of `K` normal-domain polynomials.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroize)]
pub struct PolyVec {
    polys: [Poly; K],
}

/// A vector of `K` NTT-domain polynomials.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroize)]
pub struct NttPolyVec {
    polys: [NttPoly; K],
}

/// `K x K` matrix of NTT-domain polynomials, indexed `[row][column]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    rows: [[NttPoly; K]; K],
}

impl PolyVec {
    /// Wrap `K` polynomials.
    #[must_use]
    pub const fn new(polys: [Poly; K]) -> Self {
        Self { polys }
    }

    /// Components.
    #[must_use]
    pub const fn polys(&self) -> &[Poly; K] {
        &self.polys
    }

    /// Component-wise sum.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self { polys: std::array::from_fn(|i| self.polys[i].add(&other.polys[i])) }
    }

    /// NTT of every component.
    #[must_use]
    pub fn ntt(&self) -> NttPolyVec {
        NttPolyVec { polys: std::array::from_fn(|i| self.polys[i].ntt()) }
    }

    /// Concatenated 12-bit encodings.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; POLYVEC_BYTES] {
        let mut out = [0u8; POLYVEC_BYTES];
        for (chunk, poly) in out.chunks_exact_mut(POLY_BYTES).zip(&self.polys) {
            chunk.copy_from_slice(&poly.to_bytes());
        }
        out
    }

    /// Parse `K * 384` bytes.
    ///
    /// # Errors
    /// Returns `InvalidLength` on any other length.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        KemError::check_length("polynomial vector", POLYVEC_BYTES, bytes.len())?;
        let mut polys = [Poly::zero(); K];
        for (poly, chunk) in polys.iter_mut().zip(bytes.chunks_exact(POLY_BYTES)) {
            *poly = Poly::from_bytes(chunk)?;
        }
        Ok(Self { polys })
    }

    /// Every component compressed to `DU` bits and packed.
    #[must_use]
    pub fn compress(&self) -> [u8; POLYVEC_COMPRESSED_BYTES] {
        let mut out = [0u8; POLYVEC_COMPRESSED_BYTES];
        for (chunk, poly) in out.chunks_exact_mut(POLY_COMPRESSED_DU_BYTES).zip(&self.polys) {
            pack_bits(&poly.compress(DU), DU, chunk);
        }
        out
    }

    /// Inverse of [`PolyVec::compress`].
    ///
    /// # Errors
    /// Returns `InvalidLength` unless `bytes` is `K * DU * 32` bytes.
    pub fn decompress(bytes: &[u8]) -> Result<Self> {
        KemError::check_length("compressed polynomial vector", POLYVEC_COMPRESSED_BYTES, bytes.len())?;
        let mut polys = [Poly::zero(); K];
        for (poly, chunk) in polys.iter_mut().zip(bytes.chunks_exact(POLY_COMPRESSED_DU_BYTES)) {
            *poly = Poly::decompress_from(chunk, DU)?;
        }
        Ok(Self { polys })
    }
}

impl NttPolyVec {
    /// Wrap `K` NTT-domain polynomials.
    #[must_use]
    pub const fn new(polys: [NttPoly; K]) -> Self {
        Self { polys }
    }

    /// Components.
    #[must_use]
    pub const fn polys(&self) -> &[NttPoly; K] {
        &self.polys
    }

    /// Sum of pointwise products, accumulated in the NTT domain and inverted once.
    #[must_use]
    pub fn dot(&self, other: &Self) -> Poly {
        self.dot_ntt(other).inverse_ntt()
    }

    fn dot_ntt(&self, other: &Self) -> NttPoly {
        self.polys
            .iter()
            .zip(&other.polys)
            .fold(NttPoly::zero(), |acc, (a, b)| acc.add(&a.basemul(b)))
    }
}

impl Matrix {
    /// Build from rows.
    #[must_use]
    pub const fn from_rows(rows: [[NttPoly; K]; K]) -> Self {
        Self { rows }
    }

    /// Entry at `(row, column)`.
    #[must_use]
    pub const fn entry(&self, row: usize, column: usize) -> &NttPoly {
        &self.rows[row][column]
    }

    /// `M · v`, returned in the normal domain.
    #[must_use]
    pub fn mul_vector(&self, vector: &NttPolyVec) -> PolyVec {
        PolyVec {
            polys: std::array::from_fn(|i| NttPolyVec::new(self.rows[i]).dot(vector)),
        }
    }
}
