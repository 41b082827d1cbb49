#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
// JUSTIFICATION: Byte and bit extraction from fixed-size sampling buffers.
// Chunk offsets are bounded by the block and buffer lengths.
#![allow(clippy::indexing_slicing)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_possible_truncation)]

//! Uniform and centered-binomial sampling
//!
//! - [`sample_uniform`]: rejection sampling of an NTT-domain polynomial from an XOF stream
//! - [`sample_noise`]: centered binomial distribution `CBD_eta` from PRF output
//! - [`generate_matrix`]: the public matrix `A` (or its transpose) from a 32-byte seed

use lattice_kem_prelude::{KemError, Result};
use zeroize::Zeroizing;

use crate::hash::{HashProvider, Symmetric, XofReader};
use crate::params::{K, N, Q, SYM_BYTES};
use crate::polynomial::arithmetic;
use crate::polynomial::{Matrix, NttPoly, Poly};

/// SHAKE128 rate; the XOF is read in blocks of this size.
pub const XOF_BLOCK_BYTES: usize = 168;

/// Default number of XOF blocks read before sampling gives up.
///
/// Three blocks yield 336 candidates, enough for 256 coefficients with
/// overwhelming probability.
pub const DEFAULT_MAX_XOF_BLOCKS: usize = 16;

/// Rejection-sample a uniform polynomial in the NTT domain.
///
/// Each 3 bytes give two 12-bit candidates; candidates `>= q` are discarded.
///
/// # Errors
/// Returns `InternalInvariant` if `max_blocks` blocks do not yield 256 coefficients.
pub fn sample_uniform<R: XofReader>(reader: &mut R, max_blocks: usize) -> Result<NttPoly> {
    let mut coeffs = [0u16; N];
    let mut filled = 0;
    let mut block = [0u8; XOF_BLOCK_BYTES];

    for _ in 0..max_blocks {
        reader.squeeze(&mut block);
        for triple in block.chunks_exact(3) {
            let b0 = u16::from(triple[0]);
            let b1 = u16::from(triple[1]);
            let b2 = u16::from(triple[2]);
            let candidates = [b0 | ((b1 & 0x0F) << 8), (b1 >> 4) | (b2 << 4)];
            for candidate in candidates {
                if candidate < Q && filled < N {
                    coeffs[filled] = candidate;
                    filled += 1;
                }
            }
            if filled == N {
                return Ok(NttPoly::from_canonical(coeffs));
            }
        }
    }

    Err(KemError::InternalInvariant(format!(
        "uniform sampling exhausted {max_blocks} XOF blocks with {filled} of {N} coefficients"
    )))
}

/// Centered binomial sample from `64 * eta` bytes of randomness.
///
/// Coefficient `i` is the sum of `eta` bits minus the sum of the next `eta` bits.
/// Callers size `bytes` as `64 * eta`; [`sample_noise`] is the only entry point.
#[must_use]
pub(crate) fn cbd(bytes: &[u8], eta: usize) -> Poly {
    debug_assert_eq!(bytes.len(), 64 * eta);
    let bit = |index: usize| u16::from((bytes[index / 8] >> (index % 8)) & 1);
    let coeffs: [u16; N] = std::array::from_fn(|i| {
        let base = 2 * eta * i;
        let a: u16 = (0..eta).map(|j| bit(base + j)).sum();
        let b: u16 = (0..eta).map(|j| bit(base + eta + j)).sum();
        arithmetic::sub(a, b)
    });
    Poly::from_canonical(coeffs)
}

/// Noise polynomial `CBD_eta(PRF(seed, nonce))`.
#[must_use]
pub fn sample_noise<H: HashProvider>(
    sym: &Symmetric<H>,
    seed: &[u8; SYM_BYTES],
    nonce: u8,
    eta: usize,
) -> Poly {
    let mut buffer = Zeroizing::new(vec![0u8; 64 * eta]);
    sym.prf(seed, nonce, &mut buffer);
    cbd(&buffer, eta)
}

/// Entry `(i, j)` of `A`, or of `A^T` when `transposed`.
///
/// The XOF nonce is `[j, i]` for `A` and `[i, j]` for `A^T`.
///
/// # Errors
/// Propagates the exhaustion error of [`sample_uniform`].
pub fn matrix_entry<H: HashProvider>(
    sym: &Symmetric<H>,
    seed: &[u8; SYM_BYTES],
    i: usize,
    j: usize,
    transposed: bool,
    max_blocks: usize,
) -> Result<NttPoly> {
    let (row, column) = (i as u8, j as u8);
    let nonce = if transposed { [row, column] } else { [column, row] };
    let mut reader = sym.xof(seed, nonce);
    sample_uniform(&mut reader, max_blocks)
}

/// Expand `seed` into the `K x K` matrix `A` (or `A^T`).
///
/// # Errors
/// Propagates the exhaustion error of [`sample_uniform`].
pub fn generate_matrix<H: HashProvider>(
    sym: &Symmetric<H>,
    seed: &[u8; SYM_BYTES],
    transposed: bool,
    max_blocks: usize,
) -> Result<Matrix> {
    let mut rows = [[NttPoly::zero(); K]; K];
    for (i, row) in rows.iter_mut().enumerate() {
        for (j, entry) in row.iter_mut().enumerate() {
            *entry = matrix_entry(sym, seed, i, j, transposed, max_blocks)?;
        }
    }
    Ok(Matrix::from_rows(rows))
}
