#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
// JUSTIFICATION: Modular arithmetic over Z_q with q = 3329.
// Every intermediate is bounded by q^2 < 2^24 or by the Barrett product < 2^64.
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_possible_truncation)]

use crate::params::Q;

const Q32: u32 = Q as u32;

/// `floor(2^32 / q)`
const BARRETT_MULTIPLIER: u64 = (1u64 << 32) / Q as u64;

/// Map `a` in `[0, 2q)` to `[0, q)` without branching.
#[inline]
#[must_use]
pub const fn conditional_subtract_q(a: u16) -> u16 {
    let t = a.wrapping_sub(Q);
    // top bit of t is set iff a < q
    t.wrapping_add(0u16.wrapping_sub(t >> 15) & Q)
}

/// Barrett reduction of any `u32` into `[0, q)`.
#[inline]
#[must_use]
pub const fn barrett_reduce(x: u32) -> u16 {
    let quotient = ((x as u64 * BARRETT_MULTIPLIER) >> 32) as u32;
    // the quotient estimate is low by at most one, so the remainder is in [0, 2q)
    let remainder = x - quotient * Q32;
    conditional_subtract_q(remainder as u16)
}

/// `(a + b) mod q` for canonical inputs.
#[inline]
#[must_use]
pub const fn add(a: u16, b: u16) -> u16 {
    conditional_subtract_q(a + b)
}

/// `(a - b) mod q` for canonical inputs.
#[inline]
#[must_use]
pub const fn sub(a: u16, b: u16) -> u16 {
    conditional_subtract_q(a + Q - b)
}

/// `(a * b) mod q` for canonical inputs.
#[inline]
#[must_use]
pub const fn mul(a: u16, b: u16) -> u16 {
    barrett_reduce(a as u32 * b as u32)
}

/// Canonical representative of a signed integer.
///
/// Not constant time; only used for public values.
#[inline]
#[must_use]
pub const fn from_signed(x: i32) -> u16 {
    x.rem_euclid(Q as i32) as u16
}

/// `base^exp mod q`, usable in constant tables.
#[must_use]
pub const fn pow_mod(base: u16, mut exp: u32) -> u16 {
    let mut result: u16 = 1;
    let mut acc = barrett_reduce(base as u32);
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul(result, acc);
        }
        acc = mul(acc, acc);
        exp >>= 1;
    }
    result
}

/// Multiplicative inverse mod q via Fermat's little theorem.
#[must_use]
pub const fn inverse(a: u16) -> u16 {
    pow_mod(a, Q32 - 2)
}
