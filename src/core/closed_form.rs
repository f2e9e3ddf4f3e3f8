//! Closed-form approximator
//!
//! Computes `sqrt(x)` through the identity `exp(0.5 * ln(x))`. Used when the
//! target provides log and exp primitives.

use crate::core::trace::report;
use crate::core::traits::{SqrtApproximator, Trace};
use crate::types::{ApproxMethod, TraceStep};

/// Approximator using `exp(log(x) * 0.5)`
///
/// Reports a single step per positive input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClosedFormApproximator;

impl SqrtApproximator for ClosedFormApproximator {
    fn approximate(&self, x: f64, trace: &mut dyn Trace) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }

        let result = (x.ln() * 0.5).exp();
        report(trace, TraceStep::closed_form(x, result));
        result
    }

    fn method(&self) -> ApproxMethod {
        ApproxMethod::ClosedForm
    }
}
