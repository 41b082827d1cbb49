#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
// JUSTIFICATION: Polynomial arithmetic requires direct array indexing in the
// NTT butterflies and bit packing. All indices are bounded by N = 256 and the
// fixed packed sizes.
#![allow(clippy::indexing_slicing)]

//! Polynomial Operations over `Z_q[X]/(X^256 + 1)`
//!
//! - [`arithmetic`]: constant-time field arithmetic mod `q = 3329`
//! - [`ntt`]: forward / inverse NTT and base multiplication
//! - [`poly`]: [`Poly`] (normal domain) and [`NttPoly`] (NTT domain)
//! - [`polyvec`]: rank-`k` vectors and the `k x k` matrix
//!
//! The two domains are distinct types. Only [`ntt::forward`] and
//! [`ntt::inverse`] move a polynomial between them.

/// Field arithmetic modulo q.
pub mod arithmetic;
/// Number Theoretic Transform.
pub mod ntt;
/// Single polynomials.
pub mod poly;
/// Polynomial vectors and matrices.
pub mod polyvec;

pub use poly::{NttPoly, Poly};
pub use polyvec::{Matrix, NttPolyVec, PolyVec};
