//! Calculation options and configuration.

use crate::calculator::PiError;
use crate::constants::BBP_GUARD_DIGITS;
use crate::context::{Context, Rounding};

/// Options for π calculation.
#[derive(Debug, Clone)]
pub struct Options {
    /// Working precision in significant digits (0 = the algorithm's default).
    pub precision: u32,
    /// Extra working digits for the BBP evaluator.
    pub guard_digits: u32,
    /// Rounding mode for every decimal operation.
    pub rounding: Rounding,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            precision: 0,
            guard_digits: BBP_GUARD_DIGITS,
            rounding: Rounding::HalfEven,
        }
    }
}

impl Options {
    /// Working precision, falling back to `default` when unset.
    #[must_use]
    pub fn precision_or(&self, default: u32) -> u32 {
        if self.precision == 0 {
            default
        } else {
            self.precision
        }
    }

    /// Build the decimal context for a run, falling back to `default` digits.
    pub fn context_or(&self, default: u32) -> Result<Context, PiError> {
        Ok(Context::new(self.precision_or(default))?.with_rounding(self.rounding))
    }
}
