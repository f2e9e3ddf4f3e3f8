use crate::strategy::SqrtConfig;
use crate::types::Capabilities;
use clap::{Parser, ValueEnum};

/// Compute the square root of a number
#[derive(Parser, Debug)]
#[command(name = "mysqrt", version)]
#[command(about = "Compute the square root of a number", long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct CliArgs {
    /// Number whose square root is computed
    ///
    /// Optional here so that a missing value prints the classic usage text
    /// instead of a clap error.
    #[arg(value_name = "NUMBER", help = "Number to take the square root of")]
    pub input: Option<f64>,

    /// Square root implementation to use
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "mymath",
        help = "Implementation: 'library' for the standard sqrt or 'mymath' for the built-in approximation"
    )]
    pub strategy: StrategyType,

    /// Override whether log/exp primitives may be used
    #[arg(
        long = "has-log-exp",
        value_name = "BOOL",
        help = "Use exp(log(x)/2) when true, Newton iteration when false (default: compiled-in)"
    )]
    pub has_log_exp: Option<bool>,

    /// Suppress per-step diagnostic lines
    #[arg(short = 'q', long = "quiet", help = "Do not print intermediate approximations")]
    pub quiet: bool,
}

/// Available square root implementations
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Library,
    Mymath,
}

impl CliArgs {
    /// Create a SqrtConfig from CLI arguments
    ///
    /// Capabilities fall back to the compiled-in defaults when
    /// `--has-log-exp` is not given.
    pub fn to_config(&self) -> SqrtConfig {
        let capabilities = self
            .has_log_exp
            .map(Capabilities::new)
            .unwrap_or_else(Capabilities::detect);

        SqrtConfig {
            strategy: self.strategy.clone(),
            capabilities,
            trace: !self.quiet,
        }
    }
}
