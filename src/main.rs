//! mysqrt CLI
//!
//! Command-line interface for computing the square root of a number.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- 2
//! cargo run -- --strategy library 2
//! cargo run -- --has-log-exp false 9.999
//! cargo run -- --quiet 10
//! ```
//!
//! Prints the intermediate approximations (unless `--quiet`) followed by
//! `The square root of <input> is <output>`. Diagnostics from `tracing` go to
//! stderr and are controlled by `RUST_LOG`.
//!
//! # Strategies
//!
//! - **mymath**: the built-in approximation (default)
//! - **library**: the standard library square root
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Missing number (usage is printed), non-finite number, or output error
//! - 2: Invalid arguments (reported by clap)

use mysqrt::cli;
use mysqrt::logging;
use mysqrt::SqrtError;
use std::env;
use std::process;

fn main() {
    if let Err(e) = logging::init() {
        eprintln!("Warning: {}", e);
    }

    let args = cli::parse_args();
    let program = env::args().next().unwrap_or_else(|| "mysqrt".to_string());

    let mut output = std::io::stdout();
    if let Err(e) = cli::run(&args, &program, &mut output) {
        // Usage text has already been written for a missing number
        if e != SqrtError::MissingInput {
            eprintln!("Error: {}", e);
        }
        process::exit(e.exit_code());
    }
}
