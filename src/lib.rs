//! mysqrt Library
//! # Overview
//!
//! This library computes approximate square roots through two interchangeable
//! approximators, plus the CLI plumbing that compares them with the standard
//! library square root.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Capabilities, TraceStep, errors)
//! - [`cli`] - CLI arguments parsing and the top-level run
//! - [`core`] - Approximation components:
//!   - [`core::closed_form`] - `exp(log(x) * 0.5)` approximator
//!   - [`core::newton`] - Seeded, fixed-count Newton–Raphson approximator
//!   - [`core::seed_table`] - Starting guesses for inputs in `[1, 10)`
//!   - [`core::trace`] - Sinks for intermediate approximations
//! - [`strategy`] - Library vs. own-math selection
//! - [`io`] - `%g` formatting and output lines
//! - [`logging`] - `tracing` subscriber setup
//!
//! # Approximation Variants
//!
//! - **Closed form**: used when log/exp primitives are available (`log-exp` feature)
//! - **Newton**: 10 iterations of `r = 0.5 * (r + x / r)` from a seeded guess
//!
//! Both return exactly `0.0` for inputs `<= 0`.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod strategy;
pub mod types;

pub use crate::core::{approximate_sqrt, approximate_sqrt_with, SqrtApproximator, Trace};
pub use io::format_g;
pub use types::{ApproxMethod, Capabilities, SqrtError, TraceStep};
