//! I/O module
//!
//! Handles text output of the CLI.
//!
//! # Components
//!
//! - `format` - `%g` number formatting, result line and usage output

pub mod format;

pub use format::{format_g, write_result, write_usage};
