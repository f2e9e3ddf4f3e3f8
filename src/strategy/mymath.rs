//! Own-math strategy
//!
//! Uses this crate's approximator instead of the platform square root. The
//! approximation variant is fixed when the strategy is built:
//!
//! ```text
//! MymathStrategy
//!     └── Capabilities { has_log_exp }
//!         ├── true  -> ClosedFormApproximator
//!         └── false -> NewtonApproximator (seed table + 10 iterations)
//! ```

use crate::core::{create_approximator, SqrtApproximator, Trace};
use crate::strategy::SqrtStrategy;
use crate::types::{ApproxMethod, Capabilities};

/// Strategy using the crate's own approximator
///
/// # Examples
///
/// ```
/// use mysqrt::core::NoTrace;
/// use mysqrt::strategy::{MymathStrategy, SqrtStrategy};
/// use mysqrt::types::Capabilities;
///
/// let strategy = MymathStrategy::new(Capabilities::new(false));
/// let result = strategy.compute(9.0, &mut NoTrace);
/// assert!((result - 3.0).abs() < 1e-9);
/// ```
pub struct MymathStrategy {
    approximator: Box<dyn SqrtApproximator>,
}

impl MymathStrategy {
    /// Create a MymathStrategy for the given capabilities
    pub fn new(capabilities: Capabilities) -> Self {
        let approximator = create_approximator(capabilities);
        tracing::debug!(method = %approximator.method(), "selected approximator");
        Self { approximator }
    }

    /// The approximation variant in use
    pub fn method(&self) -> ApproxMethod {
        self.approximator.method()
    }
}

impl std::fmt::Debug for MymathStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MymathStrategy")
            .field("method", &self.method())
            .finish()
    }
}

impl SqrtStrategy for MymathStrategy {
    fn compute(&self, x: f64, trace: &mut dyn Trace) -> f64 {
        self.approximator.approximate(x, trace)
    }
}
