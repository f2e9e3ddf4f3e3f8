//! Square root strategy module
//!
//! This module defines the Strategy pattern for the top-level computation:
//! either the standard library square root or this crate's own approximator.
//! The choice is made at runtime from the CLI configuration.

use crate::cli::StrategyType;
use crate::core::Trace;
use crate::types::Capabilities;

pub mod library;
pub mod mymath;

pub use library::LibraryStrategy;
pub use mymath::MymathStrategy;

/// Configuration for a single run
///
/// Built from CLI arguments by [`CliArgs::to_config`](crate::cli::CliArgs::to_config).
#[derive(Clone, Debug)]
pub struct SqrtConfig {
    /// Which square root implementation to use
    pub strategy: StrategyType,
    /// Math primitives the approximator may use
    pub capabilities: Capabilities,
    /// Whether per-step diagnostic lines are printed
    pub trace: bool,
}

impl Default for SqrtConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyType::Mymath,
            capabilities: Capabilities::detect(),
            trace: true,
        }
    }
}

/// Square root strategy trait
///
/// Implementations compute the square root of a non-negative finite input.
/// Callers are responsible for screening out negative and non-finite values.
pub trait SqrtStrategy: Send + Sync {
    /// Compute the square root of `x`, reporting intermediate steps to `trace`
    ///
    /// Strategies without intermediate steps never call `trace`.
    fn compute(&self, x: f64, trace: &mut dyn Trace) -> f64;
}

/// Create a strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - Library square root or own approximation
/// * `capabilities` - Primitives available to the approximator (ignored for Library)
///
/// # Returns
///
/// A boxed trait object implementing the SqrtStrategy trait
pub fn create_strategy(
    strategy_type: StrategyType,
    capabilities: Capabilities,
) -> Box<dyn SqrtStrategy> {
    match strategy_type {
        StrategyType::Library => Box::new(LibraryStrategy),
        StrategyType::Mymath => Box::new(MymathStrategy::new(capabilities)),
    }
}
