//! Trace sinks for approximation steps
//!
//! - `NoTrace` discards every step
//! - `RecordingTrace` keeps steps in memory for inspection
//! - `WriterTrace` prints the classic `Computing sqrt of ...` diagnostic lines
//!
//! Closures `FnMut(&TraceStep)` are also accepted wherever a `Trace` is.

use crate::core::traits::Trace;
use crate::io::format_g;
use crate::types::{ApproxMethod, TraceStep};
use std::io::Write;

/// Trace that ignores all steps
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl Trace for NoTrace {
    fn step(&mut self, _step: &TraceStep) {}
}

/// Trace that records every step in order
#[derive(Debug, Clone, Default)]
pub struct RecordingTrace {
    steps: Vec<TraceStep>,
}

impl RecordingTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded steps
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// The approximation reported at each step
    pub fn approximations(&self) -> Vec<f64> {
        self.steps.iter().map(|s| s.approximation).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Trace for RecordingTrace {
    fn step(&mut self, step: &TraceStep) {
        self.steps.push(*step);
    }
}

/// Trace that writes one diagnostic line per step
///
/// Newton steps print `Computing sqrt of <x> to be <r>`; the closed-form step
/// appends ` using log`. A failed write is logged and otherwise ignored, so
/// output problems never affect the computed value.
#[derive(Debug)]
pub struct WriterTrace<W: Write> {
    writer: W,
}

impl<W: Write> WriterTrace<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the trace and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Trace for WriterTrace<W> {
    fn step(&mut self, step: &TraceStep) {
        let suffix = match step.method {
            ApproxMethod::ClosedForm => " using log",
            ApproxMethod::Newton => "",
        };
        if let Err(e) = writeln!(
            self.writer,
            "Computing sqrt of {} to be {}{}",
            format_g(step.input),
            format_g(step.approximation),
            suffix
        ) {
            tracing::warn!(error = %e, "failed to write approximation step");
        }
    }
}

/// Emit a step as a `tracing` event, then forward it to `trace`
pub(crate) fn report(trace: &mut dyn Trace, step: TraceStep) {
    tracing::trace!(
        input = step.input,
        approximation = step.approximation,
        iteration = ?step.iteration,
        method = %step.method,
        "approximation step"
    );
    trace.step(&step);
}
