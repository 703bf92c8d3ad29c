//! CLI output formatting.

use std::io::{self, Write};

use picalc_core::approximation::Approximation;
use picalc_core::constants::DEFAULT_PRECISION;
use picalc_core::context::Context;
use picalc_core::decimal::Decimal;

/// Longest value printed in full without `--verbose`.
const MAX_INLINE_LEN: usize = 100;

/// Shorten a long numeral to its ends.
fn abbreviate(s: &str, verbose: bool) -> String {
    if !verbose && s.len() > MAX_INLINE_LEN {
        format!("{}...{} ({} chars)", &s[..50], &s[s.len() - 50..], s.len())
    } else {
        s.to_string()
    }
}

/// Format an approximation for display, potentially truncating.
///
/// Decimals print in scientific-string form, rationals as `n/d`.
#[must_use]
pub fn format_result(value: &Approximation, verbose: bool) -> String {
    abbreviate(&value.to_string(), verbose)
}

/// Decimal rendering of an exact rational at the default precision.
///
/// `None` for decimal results, which are already in their final form.
#[must_use]
pub fn format_rational_decimal(value: &Approximation) -> Option<String> {
    let rational = value.as_rational()?;
    let ctx = Context::new(DEFAULT_PRECISION).ok()?;
    ctx.from_rational(rational).ok().map(|d| d.to_string())
}

/// Size facts about a result, for `--details`.
#[must_use]
pub fn describe_size(value: &Approximation) -> String {
    match value {
        Approximation::Decimal(d) => format!("{} significant digits", d.digits()),
        Approximation::Rational(r) => {
            let numer = Decimal::from_integer(r.numer().clone()).digits();
            let denom = Decimal::from_integer(r.denom().clone()).digits();
            format!("numerator {numer} digits, denominator {denom} digits")
        }
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Write result to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, value: &Approximation) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{value}")?;
    Ok(())
}
