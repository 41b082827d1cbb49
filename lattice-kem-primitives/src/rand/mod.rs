#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Randomness sources
//!
//! Every fresh seed or message is drawn through [`fill_from`], so a failing
//! generator surfaces as `RandomnessUnavailable` instead of weaker output.

/// Operating-system CSPRNG helpers.
pub mod csprng;

pub use csprng::{fill_from, fill_random, random_seed};
