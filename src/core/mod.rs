//! Core approximation module
//!
//! This module contains the square root approximation components:
//! - `traits` - Trait abstractions for interchangeable approximators and trace sinks
//! - `closed_form` - `exp(log(x) * 0.5)` approximator
//! - `newton` - Seeded, fixed-count Newton–Raphson approximator
//! - `seed_table` - Starting guesses for Newton iteration
//! - `trace` - Trace sink implementations

pub mod closed_form;
pub mod newton;
pub mod seed_table;
pub mod trace;
pub mod traits;

pub use closed_form::ClosedFormApproximator;
pub use newton::{NewtonApproximator, NEWTON_ITERATIONS};
pub use seed_table::SEED_TABLE;
pub use trace::{NoTrace, RecordingTrace, WriterTrace};
pub use traits::{SqrtApproximator, Trace};

use crate::types::Capabilities;

/// Select the approximator matching the available math primitives
///
/// The closed-form approximator is used when log/exp are available,
/// otherwise the Newton approximator.
pub fn create_approximator(capabilities: Capabilities) -> Box<dyn SqrtApproximator> {
    if capabilities.has_log_exp {
        Box::new(ClosedFormApproximator)
    } else {
        Box::new(NewtonApproximator)
    }
}

/// Approximate the square root of `x` with the compiled-in capabilities
///
/// Inputs `<= 0` return `0.0`. No steps are reported.
///
/// # Examples
///
/// ```
/// use mysqrt::approximate_sqrt;
///
/// assert!((approximate_sqrt(4.0) - 2.0).abs() < 1e-9);
/// assert_eq!(approximate_sqrt(-5.0), 0.0);
/// ```
pub fn approximate_sqrt(x: f64) -> f64 {
    approximate_sqrt_with(x, Capabilities::detect(), &mut NoTrace)
}

/// Approximate the square root of `x` with explicit capabilities, reporting
/// each step to `trace`
pub fn approximate_sqrt_with(x: f64, capabilities: Capabilities, trace: &mut dyn Trace) -> f64 {
    create_approximator(capabilities).approximate(x, trace)
}
