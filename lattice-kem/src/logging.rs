//! # LatticeKem Logging Utilities
//!
//! Structured logging with `tracing` that never prints key material.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lattice_kem::logging::{init_tracing, sanitize_data};
//!
//! // Sets the global tracing subscriber; call once per process.
//! init_tracing()?;
//!
//! let secret = [0u8; 32];
//! tracing::info!("derived {}", sanitize_data(&secret));
//! # Ok::<(), lattice_kem::CoreError>(())
//! ```
//!
//! Operation events are emitted on the `kem::operation` target by the
//! `log_kem_operation_*` macros.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

use std::fmt;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{CoreConfig, DEFAULT_LOG_FILTER};
use crate::error::{CoreError, Result};

/// Target of the operation macros.
pub const OPERATION_TARGET: &str = "kem::operation";

/// Initialize tracing with the default filter.
///
/// `RUST_LOG` takes precedence over [`DEFAULT_LOG_FILTER`].
///
/// # Errors
///
/// Returns `CoreError::Logging` if a global subscriber is already set.
pub fn init_tracing() -> Result<()> {
    init_tracing_with_filter(DEFAULT_LOG_FILTER)
}

/// Initialize tracing, falling back to `default_filter` when `RUST_LOG` is unset.
///
/// # Errors
///
/// Returns `CoreError::Logging` if the filter is invalid or a global subscriber is
/// already set.
pub fn init_tracing_with_filter(default_filter: &str) -> Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = resolve_filter(env.as_deref(), default_filter)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| CoreError::Logging(e.to_string()))?;

    info!("LatticeKem logging initialized");
    Ok(())
}

/// Initialize tracing with `config.log_filter` as the fallback filter.
///
/// # Errors
///
/// Returns `CoreError::Configuration` if `config` is invalid, and
/// `CoreError::Logging` if a global subscriber is already set.
pub fn init_tracing_with_config(config: &CoreConfig) -> Result<()> {
    config.validate()?;
    init_tracing_with_filter(&config.log_filter)
}

/// A valid `env` directive wins; otherwise `default_filter` is parsed.
fn resolve_filter(env: Option<&str>, default_filter: &str) -> Result<EnvFilter> {
    if let Some(Ok(filter)) = env.map(EnvFilter::try_new) {
        return Ok(filter);
    }
    EnvFilter::try_new(default_filter)
        .map_err(|e| CoreError::Logging(format!("invalid filter {default_filter:?}: {e}")))
}

/// Wrap bytes so that only their length is ever displayed.
#[must_use]
pub fn sanitize_data(data: &[u8]) -> SanitizedData<'_> {
    SanitizedData(data)
}

/// Wrapper type for sanitized data display
pub struct SanitizedData<'a>(&'a [u8]);

impl fmt::Display for SanitizedData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED: {} bytes]", self.0.len())
    }
}

impl fmt::Debug for SanitizedData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Log KEM operation start
#[macro_export]
macro_rules! log_kem_operation_start {
    ($operation:expr) => {
        $crate::__tracing::debug!(target: "kem::operation", operation = $operation, "started");
    };
    ($operation:expr, $($field:tt)*) => {
        $crate::__tracing::debug!(
            target: "kem::operation",
            operation = $operation,
            "started {}",
            format_args!($($field)*)
        );
    };
}

/// Log KEM operation completion
#[macro_export]
macro_rules! log_kem_operation_complete {
    ($operation:expr) => {
        $crate::__tracing::debug!(target: "kem::operation", operation = $operation, "completed");
    };
    ($operation:expr, $($field:tt)*) => {
        $crate::__tracing::debug!(
            target: "kem::operation",
            operation = $operation,
            "completed {}",
            format_args!($($field)*)
        );
    };
}

/// Log KEM operation error
#[macro_export]
macro_rules! log_kem_operation_error {
    ($operation:expr, $error:expr) => {
        $crate::__tracing::error!(
            target: "kem::operation",
            operation = $operation,
            "failed: {}",
            $error
        );
    };
}
