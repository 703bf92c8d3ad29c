//! Application configuration from CLI flags and environment.

use clap::Parser;

use picalc_core::calculator::PiError;
use picalc_core::constants::BBP_GUARD_DIGITS;
use picalc_core::context::Rounding;
use picalc_core::options::Options;

/// picalc: arbitrary-precision π calculator (Chudnovsky, BBP, Leibniz).
#[derive(Parser, Debug)]
#[command(name = "picalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Number of series terms to sum.
    #[arg(short = 'n', long, default_value = "10", env = "PICALC_TERMS")]
    pub terms: u64,

    /// Calculator: chudnovsky, binsplit, bbp, leibniz, rational, a comma-separated list, or all.
    #[arg(short, long, default_value = "all", env = "PICALC_ALGO")]
    pub algo: String,

    /// Working precision in significant digits (0 = each algorithm's default).
    #[arg(short, long, default_value = "0", env = "PICALC_PRECISION")]
    pub precision: u32,

    /// Extra working digits for the BBP series.
    #[arg(long, default_value_t = BBP_GUARD_DIGITS)]
    pub guard_digits: u32,

    /// Rounding mode: half-even, half-up, or down.
    #[arg(long, default_value = "half-even")]
    pub rounding: String,

    /// Report correct decimal places of every result against a reference π.
    #[arg(long)]
    pub compare: bool,

    /// Decimal places of the reference π used by --compare.
    #[arg(long, default_value = "100")]
    pub reference_digits: u32,

    /// Verbose output (print long values in full).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show detailed information.
    #[arg(short, long)]
    pub details: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Quiet mode (only output the value).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Calculation options from the decimal flags.
    pub fn options(&self) -> Result<Options, PiError> {
        Ok(Options {
            precision: self.precision,
            guard_digits: self.guard_digits,
            rounding: self.rounding.parse::<Rounding>()?,
        })
    }
}
