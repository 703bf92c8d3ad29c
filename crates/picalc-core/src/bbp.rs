//! Bailey–Borwein–Plouffe series.
//!
//! ```text
//!   π = Σ 16^-k (4/(8k+1) − 2/(8k+4) − 1/(8k+5) − 1/(8k+6))
//! ```
//!
//! Each term contributes about one hexadecimal digit. The working precision
//! is `n_terms + guard` digits, with a fixed guard of
//! [`BBP_GUARD_DIGITS`](crate::constants::BBP_GUARD_DIGITS) by default.

use num_bigint::BigInt;
use num_traits::One;

use crate::approximation::Approximation;
use crate::calculator::{CoreCalculator, PiError};
use crate::constants::BBP_GUARD_DIGITS;
use crate::context::{Context, Rounding};
use crate::decimal::Decimal;
use crate::options::Options;

/// Working precision for `n_terms` terms plus `guard_digits` of headroom.
pub fn working_precision(n_terms: u64, guard_digits: u32) -> Result<u32, PiError> {
    u32::try_from(n_terms)
        .ok()
        .and_then(|n| n.checked_add(guard_digits))
        .ok_or_else(|| {
            PiError::InvalidArgument(format!(
                "n_terms {n_terms} exceeds the supported working precision"
            ))
        })
}

/// Sum `n_terms` BBP terms in `ctx`, every division and addition rounded.
///
/// `n_terms = 0` is the empty sum: exactly zero.
pub fn bbp_in(n_terms: u64, ctx: &Context) -> Result<Decimal, PiError> {
    let quotient = |numerator: i64, denominator: u64| {
        ctx.div(
            &Decimal::from_integer(numerator),
            &Decimal::from_integer(denominator),
        )
    };

    let mut sum = Decimal::zero();
    let mut power = BigInt::one();
    for k in 0..n_terms {
        let scale = ctx.divide_integers(&BigInt::one(), &power)?;
        let base = 8 * k;
        let bracket = ctx.sub(
            &ctx.sub(
                &ctx.sub(&quotient(4, base + 1)?, &quotient(2, base + 4)?),
                &quotient(1, base + 5)?,
            ),
            &quotient(1, base + 6)?,
        );
        sum = ctx.add(&sum, &ctx.mul(&scale, &bracket));
        power *= 16u32;
    }
    Ok(ctx.round(&sum))
}

/// Approximate π with `n_terms` BBP terms at `n_terms + 5` digits.
///
/// The `+5` headroom is fixed rather than derived from an error bound: rounding
/// error accumulates with the term count, so the last digits of a large run
/// can be wrong. Use [`bbp_with_guard`] to widen the margin.
///
/// # Example
/// ```
/// let pi = picalc_core::bbp::bbp(10).unwrap();
/// assert_eq!(pi.to_string(), "3.14159265358978");
/// assert!(picalc_core::bbp::bbp(0).unwrap().is_zero());
/// ```
pub fn bbp(n_terms: u64) -> Result<Decimal, PiError> {
    bbp_with_guard(n_terms, BBP_GUARD_DIGITS, Rounding::HalfEven)
}

/// Approximate π with `n_terms` BBP terms at `n_terms + guard_digits` digits.
pub fn bbp_with_guard(n_terms: u64, guard_digits: u32, rounding: Rounding) -> Result<Decimal, PiError> {
    let precision = working_precision(n_terms, guard_digits)?;
    let ctx = Context::new(precision)?.with_rounding(rounding);
    bbp_in(n_terms, &ctx)
}

/// BBP calculator. Accepts zero terms.
pub struct Bbp;

impl Bbp {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Bbp {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for Bbp {
    fn calculate_core(&self, n_terms: u64, opts: &Options) -> Result<Approximation, PiError> {
        let default = working_precision(n_terms, opts.guard_digits)?;
        let ctx = opts.context_or(default)?;
        bbp_in(n_terms, &ctx).map(Approximation::Decimal)
    }

    fn name(&self) -> &'static str {
        "BBP"
    }

    fn min_terms(&self) -> u64 {
        0
    }
}
