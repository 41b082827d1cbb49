//! Configuration for the LatticeKem facade.
//!
//! [`CoreConfig`] selects the hash provider, the rejection-sampling budget, the
//! optional self-checks and the default log filter. It is serializable so it can
//! live in a service's config file.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use lattice_kem_primitives::hash::ShakeXof;
use lattice_kem_primitives::kem::KemConfig;
use lattice_kem_primitives::sampling::DEFAULT_MAX_XOF_BLOCKS;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::{CoreError, Result};

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "lattice_kem=info";

/// Hash primitive behind `H`, `G`, `PRF`, `XOF`, `KDF` and `J`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// SHAKE256
    #[default]
    Shake256,
    /// SHAKE128
    Shake128,
}

impl From<HashAlgorithm> for ShakeXof {
    fn from(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Shake256 => ShakeXof::Shake256,
            HashAlgorithm::Shake128 => ShakeXof::Shake128,
        }
    }
}

/// Facade configuration.
///
/// # Examples
/// ```rust
/// use lattice_kem::config::{CoreConfig, HashAlgorithm};
///
/// let config = CoreConfig::new()
///     .with_hash_algorithm(HashAlgorithm::Shake128)
///     .with_pairwise_consistency_check(true)
///     .build()?;
/// assert!(config.pairwise_consistency_check);
///
/// let dev_config = CoreConfig::for_development();
/// let prod_config = CoreConfig::for_production();
/// assert!(prod_config.power_up_self_test && !dev_config.power_up_self_test);
/// # Ok::<(), lattice_kem::CoreError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Hash provider.
    pub hash_algorithm: HashAlgorithm,
    /// Rejection-sampling budget per matrix entry, in 168-byte XOF blocks.
    pub max_xof_blocks: usize,
    /// Check the NTT round trip of every secret polynomial during key generation.
    pub verify_ntt_roundtrip: bool,
    /// Run the pairwise consistency test on every generated key pair.
    pub pairwise_consistency_check: bool,
    /// Run the power-up self-tests when a [`LatticeKem`](crate::LatticeKem) is built,
    /// including the matrix and round-trip checks under `hash_algorithm`.
    pub power_up_self_test: bool,
    /// Filter installed by [`init_tracing_with_config`](crate::logging::init_tracing_with_config)
    /// when `RUST_LOG` is unset or invalid.
    pub log_filter: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            hash_algorithm: HashAlgorithm::Shake256,
            max_xof_blocks: DEFAULT_MAX_XOF_BLOCKS,
            verify_ntt_roundtrip: false,
            pairwise_consistency_check: false,
            power_up_self_test: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CoreConfig {
    /// Create a new configuration with sensible defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fast start, verbose logs, no self-checks. Not suitable for production use.
    #[must_use]
    pub fn for_development() -> Self {
        Self::default().with_power_up_self_test(false).with_log_filter("lattice_kem=debug")
    }

    /// Every self-check enabled.
    #[must_use]
    pub fn for_production() -> Self {
        Self::default()
            .with_ntt_roundtrip_check(true)
            .with_pairwise_consistency_check(true)
            .with_power_up_self_test(true)
    }

    /// Set the hash algorithm and return self for method chaining.
    #[must_use]
    pub fn with_hash_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.hash_algorithm = algorithm;
        self
    }

    /// Set the rejection-sampling budget and return self for method chaining.
    #[must_use]
    pub fn with_max_xof_blocks(mut self, blocks: usize) -> Self {
        self.max_xof_blocks = blocks;
        self
    }

    /// Set the NTT round-trip check and return self for method chaining.
    #[must_use]
    pub fn with_ntt_roundtrip_check(mut self, enabled: bool) -> Self {
        self.verify_ntt_roundtrip = enabled;
        self
    }

    /// Set the pairwise consistency test and return self for method chaining.
    #[must_use]
    pub fn with_pairwise_consistency_check(mut self, enabled: bool) -> Self {
        self.pairwise_consistency_check = enabled;
        self
    }

    /// Set the power-up self-test and return self for method chaining.
    #[must_use]
    pub fn with_power_up_self_test(mut self, enabled: bool) -> Self {
        self.power_up_self_test = enabled;
        self
    }

    /// Set the default log filter and return self for method chaining.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// The primitive-level configuration.
    #[must_use]
    pub const fn kem_config(&self) -> KemConfig {
        KemConfig {
            max_xof_blocks: self.max_xof_blocks,
            verify_ntt_roundtrip: self.verify_ntt_roundtrip,
            pairwise_consistency_check: self.pairwise_consistency_check,
        }
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    /// See [`CoreConfig::validate`].
    pub fn build(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Validates the configuration settings.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `max_xof_blocks` cannot produce a full polynomial
    /// - `log_filter` is not a valid `tracing` filter directive
    pub fn validate(&self) -> Result<()> {
        self.kem_config().validate().map_err(|e| CoreError::Configuration(e.to_string()))?;

        if self.log_filter.trim().is_empty() {
            return Err(CoreError::Configuration("log_filter must not be empty".to_string()));
        }
        EnvFilter::try_new(&self.log_filter).map_err(|e| {
            CoreError::Configuration(format!("invalid log_filter {:?}: {e}", self.log_filter))
        })?;

        Ok(())
    }
}
