//! Iterative approximator
//!
//! Fixed-count Newton–Raphson iteration `r = 0.5 * (r + x / r)`, seeded from
//! [`SEED_TABLE`](crate::core::seed_table::SEED_TABLE) for inputs in `[1, 10)`.
//! This is the fallback when log/exp primitives are not available.
//!
//! There is no convergence check: every positive input runs exactly
//! [`NEWTON_ITERATIONS`] steps. Inputs far from 1 (below about 0.01 or above
//! about 100) start from a poor seed and may not have converged when the
//! iterations run out.

use crate::core::seed_table::seed_for;
use crate::core::trace::report;
use crate::core::traits::{SqrtApproximator, Trace};
use crate::types::{ApproxMethod, TraceStep};

/// Number of Newton steps performed per call
pub const NEWTON_ITERATIONS: usize = 10;

/// Approximator using seeded, fixed-count Newton iteration
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonApproximator;

impl SqrtApproximator for NewtonApproximator {
    fn approximate(&self, x: f64, trace: &mut dyn Trace) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }

        let mut result = seed_for(x);
        for i in 0..NEWTON_ITERATIONS {
            result = 0.5 * (result + x / result);
            report(trace, TraceStep::newton(x, result, i));
        }

        result
    }

    fn method(&self) -> ApproxMethod {
        ApproxMethod::Newton
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed_table::SEED_TABLE;
    use crate::core::trace::{NoTrace, RecordingTrace};
    use rstest::rstest;

    fn relative_error(actual: f64, expected: f64) -> f64 {
        ((actual - expected) / expected).abs()
    }

    #[rstest]
    #[case::zero(0.0)]
    #[case::negative_zero(-0.0)]
    #[case::negative(-5.0)]
    #[case::negative_infinity(f64::NEG_INFINITY)]
    fn test_non_positive_saturates_to_zero(#[case] x: f64) {
        let mut trace = RecordingTrace::new();
        assert_eq!(NewtonApproximator.approximate(x, &mut trace), 0.0);
        assert!(trace.is_empty());
    }

    #[rstest]
    #[case::four(4.0, 2.0)]
    #[case::nine(9.0, 3.0)]
    #[case::two(2.0, std::f64::consts::SQRT_2)]
    #[case::near_ten(9.999, 3.162_119_542_3)]
    fn test_concrete_scenarios(#[case] x: f64, #[case] expected: f64) {
        let result = NewtonApproximator.approximate(x, &mut NoTrace);
        assert!(
            relative_error(result, expected) <= 1e-6,
            "sqrt({}) = {}, expected {}",
            x,
            result,
            expected
        );
    }

    #[rstest]
    #[case::hundredth(0.01)]
    #[case::tenth(0.1)]
    #[case::half(0.5)]
    #[case::just_below_one(0.999)]
    #[case::one(1.0)]
    #[case::pi(std::f64::consts::PI)]
    #[case::just_below_ten(9.999999)]
    #[case::ten(10.0)]
    #[case::fifty(50.0)]
    #[case::hundred(100.0)]
    fn test_moderate_inputs_converge(#[case] x: f64) {
        let result = NewtonApproximator.approximate(x, &mut NoTrace);
        assert!(
            relative_error(result, x.sqrt()) <= 1e-6,
            "sqrt({}) = {}, expected {}",
            x,
            result,
            x.sqrt()
        );
    }

    #[rstest]
    #[case::tiny(1e-12)]
    #[case::moderate(2.0)]
    #[case::huge(1e12)]
    fn test_always_runs_fixed_iterations(#[case] x: f64) {
        let mut trace = RecordingTrace::new();
        NewtonApproximator.approximate(x, &mut trace);

        assert_eq!(trace.len(), NEWTON_ITERATIONS);
        for (i, step) in trace.steps().iter().enumerate() {
            assert_eq!(step.iteration, Some(i));
            assert_eq!(step.input, x);
            assert_eq!(step.method, ApproxMethod::Newton);
        }
    }

    #[test]
    fn test_large_input_stays_finite_without_converging() {
        let result = NewtonApproximator.approximate(1e12, &mut NoTrace);
        assert!(result.is_finite());
        assert!(result > 1e6);
    }

    #[rstest]
    #[case::one(1.0)]
    #[case::two(2.0)]
    #[case::three(3.0)]
    #[case::four(4.0)]
    #[case::five(5.0)]
    #[case::six(6.0)]
    #[case::seven(7.0)]
    #[case::eight(8.0)]
    #[case::nine(9.0)]
    fn test_first_step_starts_from_seed(#[case] x: f64) {
        let seed = SEED_TABLE[x as usize];
        let mut trace = RecordingTrace::new();
        NewtonApproximator.approximate(x, &mut trace);

        assert_eq!(trace.approximations()[0], 0.5 * (seed + x / seed));
    }

    #[test]
    fn test_first_step_outside_table_starts_from_input() {
        let mut trace = RecordingTrace::new();
        NewtonApproximator.approximate(16.0, &mut trace);

        assert_eq!(trace.approximations()[0], 0.5 * (16.0 + 1.0));
    }

    #[test]
    fn test_last_step_is_result() {
        let mut trace = RecordingTrace::new();
        let result = NewtonApproximator.approximate(7.0, &mut trace);
        assert_eq!(trace.approximations().last(), Some(&result));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let first = NewtonApproximator.approximate(9.999, &mut NoTrace);
        let second = NewtonApproximator.approximate(9.999, &mut NoTrace);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_method() {
        assert_eq!(NewtonApproximator.method(), ApproxMethod::Newton);
    }
}
