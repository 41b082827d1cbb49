#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Domain-separated symmetric functions
//!
//! | Function | Output | Use |
//! |---|---|---|
//! | `H` | 32 B | hash of public key / ciphertext |
//! | `G` | 2 x 32 B | seed and coin expansion |
//! | `PRF` | N B | noise for centered-binomial sampling |
//! | `XOF` | stream | uniform rejection sampling of `A` |
//! | `KDF` | 32 B | final shared secret |
//! | `J` | 32 B | implicit-rejection fallback key |

use lattice_kem_prelude::domains;

use crate::hash::provider::{HashProvider, XofReader};
use crate::params::SYM_BYTES;

/// Symmetric primitives over a [`HashProvider`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Symmetric<H> {
    provider: H,
}

impl<H: HashProvider> Symmetric<H> {
    /// Wrap a provider.
    #[must_use]
    pub const fn new(provider: H) -> Self {
        Self { provider }
    }

    /// The underlying provider.
    #[must_use]
    pub const fn provider(&self) -> &H {
        &self.provider
    }

    fn fixed<const L: usize>(&self, domain: &[u8], inputs: &[&[u8]]) -> [u8; L] {
        let mut out = [0u8; L];
        self.provider.absorb(domain, inputs).squeeze(&mut out);
        out
    }

    /// `H(bytes) -> 32 bytes`.
    #[must_use]
    pub fn h(&self, input: &[u8]) -> [u8; SYM_BYTES] {
        self.fixed(domains::HASH_H, &[input])
    }

    /// `G(a || b) -> (first half, second half)`.
    #[must_use]
    pub fn g(&self, a: &[u8], b: &[u8]) -> ([u8; SYM_BYTES], [u8; SYM_BYTES]) {
        let wide: [u8; 2 * SYM_BYTES] = self.fixed(domains::HASH_G, &[a, b]);
        let mut first = [0u8; SYM_BYTES];
        let mut second = [0u8; SYM_BYTES];
        first.copy_from_slice(&wide[..SYM_BYTES]);
        second.copy_from_slice(&wide[SYM_BYTES..]);
        (first, second)
    }

    /// `PRF(key, nonce)`, filling `out`.
    pub fn prf(&self, key: &[u8; SYM_BYTES], nonce: u8, out: &mut [u8]) {
        let nonce = [nonce];
        self.provider.absorb(domains::PRF, &[key.as_slice(), nonce.as_slice()]).squeeze(out);
    }

    /// `XOF(seed, nonce)` as an open stream.
    #[must_use]
    pub fn xof(&self, seed: &[u8; SYM_BYTES], nonce: [u8; 2]) -> H::Reader {
        self.provider.absorb(domains::XOF, &[seed.as_slice(), nonce.as_slice()])
    }

    /// `KDF(key, H(ciphertext)) -> shared secret`.
    #[must_use]
    pub fn kdf(&self, key: &[u8; SYM_BYTES], ciphertext_hash: &[u8; SYM_BYTES]) -> [u8; SYM_BYTES] {
        self.fixed(domains::KDF, &[key.as_slice(), ciphertext_hash.as_slice()])
    }

    /// `J(secret key, ciphertext)`: the fallback key used on implicit rejection.
    #[must_use]
    pub fn rejection_key(&self, secret_key: &[u8], ciphertext: &[u8]) -> [u8; SYM_BYTES] {
        self.fixed(domains::REJECTION_KEY, &[secret_key, ciphertext])
    }
}
