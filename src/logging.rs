//! Logging setup
//!
//! Library code emits `tracing` events; the binary installs a `fmt` subscriber
//! writing to stderr so stdout carries only the program's own output. The
//! level is read from `RUST_LOG`, falling back to [`DEFAULT_LEVEL`].

use crate::types::SqrtError;
use tracing_subscriber::filter::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_LEVEL: &str = "warn";

/// Build the event filter from `RUST_LOG`, or `default_level` when unset
pub fn env_filter(default_level: &str) -> Result<EnvFilter, SqrtError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| SqrtError::LoggingError {
            message: e.to_string(),
        })
}

/// Install the global stderr subscriber
///
/// Fails if the filter cannot be parsed or a subscriber is already set.
pub fn init() -> Result<(), SqrtError> {
    let filter = env_filter(DEFAULT_LEVEL)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| SqrtError::LoggingError {
            message: e.to_string(),
        })
}
