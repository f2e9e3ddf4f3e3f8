//! Text output for the CLI
//!
//! This module centralizes the output format concerns:
//! - `%g`-style number formatting
//! - The result line
//! - Version and usage lines shown when no number is given
//!
//! Formatting functions are pure; the `write_*` helpers only touch the writer
//! they are handed.

use std::io::Write;

/// Significant digits used by `%g` when no precision is given
const SIGNIFICANT_DIGITS: usize = 6;

/// Format a number the way C's `printf("%g")` does
///
/// Uses 6 significant digits, switches to scientific notation when the
/// decimal exponent is below -4 or at least 6, and strips trailing zeros.
///
/// # Examples
///
/// ```
/// use mysqrt::io::format_g;
///
/// assert_eq!(format_g(2.0), "2");
/// assert_eq!(format_g(2.0_f64.sqrt()), "1.41421");
/// assert_eq!(format_g(1_000_000.0), "1e+06");
/// assert_eq!(format_g(0.000015), "1.5e-05");
/// ```
pub fn format_g(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Round to the target precision first so the exponent reflects carries
    // such as 999999.5 -> 1e+06
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Strip trailing zeros (and a dangling decimal point) from a fraction
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Write the final result line
///
/// Format: `The square root of <input> is <output>`
pub fn write_result(input: f64, output_value: f64, output: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        output,
        "The square root of {} is {}",
        format_g(input),
        format_g(output_value)
    )
}

/// Write the version and usage lines shown when no number is supplied
pub fn write_usage(program: &str, output: &mut dyn Write) -> std::io::Result<()> {
    writeln!(
        output,
        "{} Version {}.{}",
        program,
        env!("CARGO_PKG_VERSION_MAJOR"),
        env!("CARGO_PKG_VERSION_MINOR")
    )?;
    writeln!(output, "Usage: {} number", program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0.0, "0")]
    #[case::negative_zero(-0.0, "-0")]
    #[case::integer(4.0, "4")]
    #[case::negative_integer(-5.0, "-5")]
    #[case::sqrt_two(std::f64::consts::SQRT_2, "1.41421")]
    #[case::near_ten(9.999, "9.999")]
    #[case::sqrt_near_ten(9.999_f64.sqrt(), "3.16212")]
    #[case::six_digits(123456.0, "123456")]
    #[case::rounds_to_seven_digits(999999.5, "1e+06")]
    #[case::million(1_000_000.0, "1e+06")]
    #[case::large(12345678.0, "1.23457e+07")]
    #[case::small_fixed(0.0001, "0.0001")]
    #[case::small_scientific(0.000015, "1.5e-05")]
    #[case::huge_exponent(1e300, "1e+300")]
    #[case::nan(f64::NAN, "nan")]
    #[case::inf(f64::INFINITY, "inf")]
    #[case::neg_inf(f64::NEG_INFINITY, "-inf")]
    fn test_format_g(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_g(value), expected);
    }

    #[test]
    fn test_write_result() {
        let mut output = Vec::new();
        write_result(2.0, std::f64::consts::SQRT_2, &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "The square root of 2 is 1.41421\n"
        );
    }

    #[test]
    fn test_write_usage() {
        let mut output = Vec::new();
        write_usage("mysqrt", &mut output).unwrap();
        let expected = format!(
            "mysqrt Version {}.{}\nUsage: mysqrt number\n",
            env!("CARGO_PKG_VERSION_MAJOR"),
            env!("CARGO_PKG_VERSION_MINOR")
        );
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }
}
