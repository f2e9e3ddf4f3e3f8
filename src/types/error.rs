//! Error types for the mysqrt command-line tool
//!
//! The approximation routines themselves never fail: non-positive inputs
//! saturate to zero. Errors only come from the CLI layer around them.
//!
//! # Error Categories
//!
//! - **Input Errors**: missing or non-finite number argument
//! - **Logging Errors**: invalid log filter or subscriber already installed
//! - **I/O Errors**: failure writing results to the output stream

use thiserror::Error;

/// Main error type for the CLI
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SqrtError {
    /// No number was supplied on the command line
    ///
    /// Usage text is printed to stdout before this error is returned.
    #[error("Missing input number")]
    MissingInput,

    /// The supplied number is infinite or NaN
    ///
    /// The approximator only accepts finite values, so these are rejected
    /// before it is called.
    #[error("Input must be a finite number, got {value}")]
    NonFiniteInput {
        /// The rejected value
        value: f64,
    },

    /// The tracing subscriber could not be installed
    #[error("Failed to initialize logging: {message}")]
    LoggingError {
        /// Description of the failure
        message: String,
    },

    /// I/O error occurred while writing output
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for SqrtError {
    fn from(error: std::io::Error) -> Self {
        SqrtError::IoError {
            message: error.to_string(),
        }
    }
}

impl SqrtError {
    /// Create a NonFiniteInput error
    pub fn non_finite_input(value: f64) -> Self {
        SqrtError::NonFiniteInput { value }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        1
    }
}
