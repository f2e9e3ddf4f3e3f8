//! Standard library strategy
//!
//! Delegates to `f64::sqrt` and reports no intermediate steps.

use crate::core::Trace;
use crate::strategy::SqrtStrategy;

/// Strategy using the platform square root
#[derive(Debug, Clone, Copy)]
pub struct LibraryStrategy;

impl SqrtStrategy for LibraryStrategy {
    fn compute(&self, x: f64, _trace: &mut dyn Trace) -> f64 {
        x.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RecordingTrace;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0.0, 0.0)]
    #[case::four(4.0, 2.0)]
    #[case::two(2.0, std::f64::consts::SQRT_2)]
    fn test_library_sqrt(#[case] x: f64, #[case] expected: f64) {
        let mut trace = RecordingTrace::new();
        assert_eq!(LibraryStrategy.compute(x, &mut trace), expected);
        assert!(trace.is_empty());
    }

    #[test]
    fn test_library_strategy_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LibraryStrategy>();
    }
}
