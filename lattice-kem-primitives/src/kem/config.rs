#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Runtime knobs of [`MlKem768`](super::MlKem768).

use lattice_kem_prelude::{KemError, Result};

use crate::sampling::DEFAULT_MAX_XOF_BLOCKS;

/// Fewest XOF blocks that can yield 256 coefficients (3 x 112 candidates).
pub const MIN_XOF_BLOCKS: usize = 3;

/// Configuration of the Kyber core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KemConfig {
    /// Rejection-sampling budget per matrix entry, in 168-byte blocks.
    pub max_xof_blocks: usize,
    /// Check that each secret polynomial survives an NTT round trip during key generation.
    pub verify_ntt_roundtrip: bool,
    /// Run the pairwise consistency test on every generated key pair.
    pub pairwise_consistency_check: bool,
}

impl Default for KemConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KemConfig {
    /// Default configuration: 16 blocks, no extra self-checks.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_xof_blocks: DEFAULT_MAX_XOF_BLOCKS,
            verify_ntt_roundtrip: false,
            pairwise_consistency_check: false,
        }
    }

    /// Every self-check enabled.
    #[must_use]
    pub const fn strict() -> Self {
        Self { verify_ntt_roundtrip: true, pairwise_consistency_check: true, ..Self::new() }
    }

    /// Set the rejection-sampling budget.
    #[must_use]
    pub const fn with_max_xof_blocks(mut self, blocks: usize) -> Self {
        self.max_xof_blocks = blocks;
        self
    }

    /// Enable or disable the NTT round-trip check.
    #[must_use]
    pub const fn with_ntt_roundtrip_check(mut self, enabled: bool) -> Self {
        self.verify_ntt_roundtrip = enabled;
        self
    }

    /// Enable or disable the pairwise consistency test.
    #[must_use]
    pub const fn with_pairwise_consistency_check(mut self, enabled: bool) -> Self {
        self.pairwise_consistency_check = enabled;
        self
    }

    /// # Errors
    /// Returns `InvalidConfiguration` if `max_xof_blocks` is below [`MIN_XOF_BLOCKS`].
    pub fn validate(&self) -> Result<()> {
        if self.max_xof_blocks < MIN_XOF_BLOCKS {
            return Err(KemError::InvalidConfiguration(format!(
                "max_xof_blocks must be at least {MIN_XOF_BLOCKS}, got {}",
                self.max_xof_blocks
            )));
        }
        Ok(())
    }
}
