//! Core traits for square root approximation and step tracing
//!
//! This module defines the trait abstractions that allow the closed-form and
//! iterative approximators to be used interchangeably, and lets callers
//! observe intermediate approximations without the algorithm writing to any
//! output stream itself.

use crate::types::{ApproxMethod, TraceStep};

/// Trait for computing an approximate square root
///
/// Implementations are pure: the result depends only on `x` (and constant
/// tables). Inputs `<= 0` saturate to `0.0` without reporting any step.
pub trait SqrtApproximator: Send + Sync {
    /// Approximate the square root of `x`, reporting each step to `trace`
    fn approximate(&self, x: f64, trace: &mut dyn Trace) -> f64;

    /// The variant this approximator implements
    fn method(&self) -> ApproxMethod;
}

/// Trait for observing approximation steps
///
/// A trace never influences the computed value.
pub trait Trace {
    /// Record one step
    fn step(&mut self, step: &TraceStep);
}

impl<F> Trace for F
where
    F: FnMut(&TraceStep),
{
    fn step(&mut self, step: &TraceStep) {
        self(step)
    }
}
