#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
// JUSTIFICATION: NTT butterflies index into fixed [u16; 256] arrays with
// bounds derived from the layer length. Table sizes are compile-time constants.
#![allow(clippy::indexing_slicing)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_possible_truncation)]

//! Number Theoretic Transform for Kyber
//!
//! `X^256 + 1` splits mod 3329 into 128 quadratic factors `X^2 - γ_i`, since
//! 3329 has a primitive 256th root of unity (17) but no 512th. The transform
//! runs seven butterfly layers and leaves each coefficient pair as an element
//! of `Z_q[X]/(X^2 - γ_i)`; [`basemul`] multiplies in that representation.
//!
//! Butterfly (Cooley-Tukey, forward):
//!
//! ```text
//!     f[j]       ---> f[j] + ζ·f[j+len]
//!     f[j+len]   ---> f[j] - ζ·f[j+len]
//! ```

use crate::params::N;
use crate::polynomial::arithmetic::{self, add, mul, sub};
use crate::polynomial::poly::{NttPoly, Poly};

/// Reverse the low seven bits of `i`.
const fn bit_reverse_7(i: usize) -> u32 {
    let mut out = 0u32;
    let mut bit = 0;
    while bit < 7 {
        out |= (((i >> bit) & 1) as u32) << (6 - bit);
        bit += 1;
    }
    out
}

/// `ζ_i = 17^bitrev7(i) mod q` for `i` in `0..128`.
pub const ZETAS: [u16; N / 2] = {
    let mut table = [0u16; N / 2];
    let mut i = 0;
    while i < N / 2 {
        table[i] = arithmetic::pow_mod(17, bit_reverse_7(i));
        i += 1;
    }
    table
};

/// `γ_i = 17^(2·bitrev7(i) + 1) mod q`, the roots of the quadratic factors.
pub const GAMMAS: [u16; N / 2] = {
    let mut table = [0u16; N / 2];
    let mut i = 0;
    while i < N / 2 {
        table[i] = arithmetic::pow_mod(17, 2 * bit_reverse_7(i) + 1);
        i += 1;
    }
    table
};

/// `(n/2)^-1 mod q`. The last layer is never merged, so the inverse scales by 128.
pub const HALF_N_INVERSE: u16 = arithmetic::inverse((N / 2) as u16);

/// Forward NTT: normal domain to NTT domain.
#[must_use]
pub fn forward(poly: &Poly) -> NttPoly {
    let mut f = *poly.coeffs();
    let mut k = 1;
    let mut len = N / 2;
    while len >= 2 {
        for start in (0..N).step_by(2 * len) {
            let zeta = ZETAS[k];
            k += 1;
            for j in start..start + len {
                let t = mul(zeta, f[j + len]);
                f[j + len] = sub(f[j], t);
                f[j] = add(f[j], t);
            }
        }
        len /= 2;
    }
    NttPoly::from_canonical(f)
}

/// Inverse NTT: NTT domain to normal domain, including the final scaling.
#[must_use]
pub fn inverse(poly: &NttPoly) -> Poly {
    let mut f = *poly.coeffs();
    let mut k = N / 2 - 1;
    let mut len = 2;
    while len <= N / 2 {
        for start in (0..N).step_by(2 * len) {
            let zeta = ZETAS[k];
            k -= 1;
            for j in start..start + len {
                let t = f[j];
                f[j] = add(t, f[j + len]);
                f[j + len] = mul(zeta, sub(f[j + len], t));
            }
        }
        len *= 2;
    }
    for coeff in &mut f {
        *coeff = mul(*coeff, HALF_N_INVERSE);
    }
    Poly::from_canonical(f)
}

/// Pointwise product of two NTT-domain polynomials.
///
/// Pair `i` is multiplied as `(a0 + a1·X)(b0 + b1·X) mod (X^2 - γ_i)`.
#[must_use]
pub fn basemul(a: &NttPoly, b: &NttPoly) -> NttPoly {
    let (a, b) = (a.coeffs(), b.coeffs());
    let mut out = [0u16; N];
    for (i, gamma) in GAMMAS.iter().enumerate() {
        let (a0, a1) = (a[2 * i], a[2 * i + 1]);
        let (b0, b1) = (b[2 * i], b[2 * i + 1]);
        out[2 * i] = add(mul(a0, b0), mul(mul(a1, b1), *gamma));
        out[2 * i + 1] = add(mul(a0, b1), mul(a1, b0));
    }
    NttPoly::from_canonical(out)
}

/// Schoolbook product modulo `(X^256 + 1, q)`.
///
/// Quadratic time. Reference for self-tests; never used on the hot path.
#[must_use]
pub fn schoolbook_multiply(a: &Poly, b: &Poly) -> Poly {
    let (a, b) = (a.coeffs(), b.coeffs());
    let mut out = [0u16; N];
    for i in 0..N {
        for j in 0..N {
            let product = mul(a[i], b[j]);
            let index = i + j;
            if index < N {
                out[index] = add(out[index], product);
            } else {
                // X^256 = -1
                out[index - N] = sub(out[index - N], product);
            }
        }
    }
    Poly::from_canonical(out)
}
