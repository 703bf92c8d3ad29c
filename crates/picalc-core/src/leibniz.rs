//! Leibniz series at a fixed decimal precision.
//!
//! `π = 4 Σ (−1)^k / (2k+1)`. Every term and partial sum is rounded to the
//! context, and no guard digits are added: at low precision rounding noise
//! swamps the (already slow) convergence. The truncation error after `n`
//! terms is at most `4/(2n+1)`.

use num_bigint::BigInt;

use crate::approximation::Approximation;
use crate::calculator::{require_terms, CoreCalculator, PiError};
use crate::constants::DEFAULT_PRECISION;
use crate::context::Context;
use crate::decimal::Decimal;
use crate::options::Options;

/// Sum `n_terms` Leibniz terms in `ctx` and scale by four.
pub fn leibniz_fixed(n_terms: u64, ctx: &Context) -> Result<Decimal, PiError> {
    require_terms(n_terms, 1)?;

    let mut sum = Decimal::zero();
    for k in 0..n_terms {
        let sign = if k % 2 == 0 { 1 } else { -1 };
        let denominator = BigInt::from(2 * u128::from(k) + 1);
        let term = ctx.divide_integers(&BigInt::from(sign), &denominator)?;
        sum = ctx.add(&sum, &term);
    }
    Ok(ctx.mul(&Decimal::from_integer(4), &sum))
}

/// Fixed-precision Leibniz calculator, 20 digits unless overridden.
pub struct FixedLeibniz;

impl FixedLeibniz {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FixedLeibniz {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for FixedLeibniz {
    fn calculate_core(&self, n_terms: u64, opts: &Options) -> Result<Approximation, PiError> {
        let ctx = opts.context_or(DEFAULT_PRECISION)?;
        leibniz_fixed(n_terms, &ctx).map(Approximation::Decimal)
    }

    fn name(&self) -> &'static str {
        "FixedLeibniz"
    }
}
