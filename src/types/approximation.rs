//! Approximation-related types
//!
//! This module defines the capability flag that selects an approximation
//! variant, the variant identifiers, and the per-step trace record.

use std::fmt;

/// Math primitives available in the target environment
///
/// Resolved once at startup and used to pick the approximation variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Whether natural log and exponential primitives can be used
    pub has_log_exp: bool,
}

impl Capabilities {
    /// Create capabilities with an explicit log/exp flag
    pub fn new(has_log_exp: bool) -> Self {
        Self { has_log_exp }
    }

    /// Capabilities compiled into this build
    ///
    /// Controlled by the `log-exp` Cargo feature (enabled by default).
    pub fn detect() -> Self {
        Self::new(cfg!(feature = "log-exp"))
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::detect()
    }
}

/// The approximation variant that produced a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApproxMethod {
    /// `exp(log(x) * 0.5)`
    ClosedForm,
    /// Fixed-count Newton–Raphson iteration
    Newton,
}

impl fmt::Display for ApproxMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApproxMethod::ClosedForm => write!(f, "closed-form"),
            ApproxMethod::Newton => write!(f, "newton"),
        }
    }
}

/// A single diagnostic step reported while approximating
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceStep {
    /// The value whose square root is being computed
    pub input: f64,

    /// Current approximation after this step
    pub approximation: f64,

    /// Zero-based Newton iteration index
    ///
    /// `None` for the closed-form computation, which is a single step.
    pub iteration: Option<usize>,

    /// Variant that produced this step
    pub method: ApproxMethod,
}

impl TraceStep {
    /// Step emitted by the closed-form computation
    pub fn closed_form(input: f64, approximation: f64) -> Self {
        Self {
            input,
            approximation,
            iteration: None,
            method: ApproxMethod::ClosedForm,
        }
    }

    /// Step emitted by Newton iteration `iteration`
    pub fn newton(input: f64, approximation: f64, iteration: usize) -> Self {
        Self {
            input,
            approximation,
            iteration: Some(iteration),
            method: ApproxMethod::Newton,
        }
    }
}
