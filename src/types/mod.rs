//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `approximation`: Capability flag, variant identifiers and trace steps
//! - `error`: Error types for the CLI

pub mod approximation;
pub mod error;

pub use approximation::{ApproxMethod, Capabilities, TraceStep};
pub use error::SqrtError;
