// CLI module
// Command-line interface, argument parsing and the top-level run loop

mod args;

pub use args::{CliArgs, StrategyType};

use crate::core::{NoTrace, WriterTrace};
use crate::io::{write_result, write_usage};
use crate::strategy::create_strategy;
use crate::types::SqrtError;
use clap::Parser;
use std::io::Write;

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g., a non-numeric argument, an unknown strategy, or
/// --help/--version), clap displays the message and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Run one computation and write everything the user sees to `output`
///
/// 1. Without a number, writes the version and usage lines and returns
///    [`SqrtError::MissingInput`]
/// 2. Rejects infinite and NaN inputs
/// 3. Computes the square root of non-negative inputs with the configured
///    strategy, writing diagnostic lines unless quiet; negative inputs yield `0`
/// 4. Writes `The square root of <input> is <output>`
///
/// # Arguments
///
/// * `args` - Parsed command-line arguments
/// * `program` - Program name shown in the usage text
/// * `output` - Destination for diagnostic and result lines
pub fn run(args: &CliArgs, program: &str, output: &mut dyn Write) -> Result<(), SqrtError> {
    let Some(input) = args.input else {
        write_usage(program, output)?;
        return Err(SqrtError::MissingInput);
    };

    if !input.is_finite() {
        return Err(SqrtError::non_finite_input(input));
    }

    let config = args.to_config();
    tracing::debug!(input, ?config, "computing square root");

    let strategy = create_strategy(config.strategy, config.capabilities);
    let result = if input >= 0.0 {
        if config.trace {
            let mut trace = WriterTrace::new(&mut *output);
            strategy.compute(input, &mut trace)
        } else {
            strategy.compute(input, &mut NoTrace)
        }
    } else {
        0.0
    };

    write_result(input, result, output)?;
    output.flush()?;

    Ok(())
}
