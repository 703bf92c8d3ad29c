//! Accuracy measurement against a high-precision reference π.

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::calculator::PiError;
use crate::chudnovsky::chudnovsky_split;
use crate::constants::{CHUDNOVSKY_DIGITS_PER_TERM, REFERENCE_GUARD_DIGITS};
use crate::context::Context;
use crate::decimal::Decimal;

/// π rounded to `places` decimal places.
///
/// Computed by binary-splitting Chudnovsky with
/// [`REFERENCE_GUARD_DIGITS`] extra working digits.
pub fn reference_pi(places: u32) -> Result<Decimal, PiError> {
    let significant = places
        .checked_add(1)
        .ok_or_else(|| PiError::InvalidArgument(format!("reference too long: {places} places")))?;
    let working = Context::new(significant.saturating_add(REFERENCE_GUARD_DIGITS))?;
    let n_terms = u64::from(places) / u64::from(CHUDNOVSKY_DIGITS_PER_TERM) + 2;
    let pi = chudnovsky_split(n_terms, &working)?;
    Ok(Context::new(significant)?.round(&pi))
}

/// Number of decimal places on which `approx` agrees with `reference`.
///
/// Taken from the magnitude of the exact difference: an error of `5.9E-14`
/// leaves 13 correct places. Never exceeds the places carried by `reference`.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn correct_decimal_places(approx: &Decimal, reference: &Decimal) -> u64 {
    let cap = (-reference.exponent()).max(0) as u64;
    let diff = approx.exact_sub(reference);
    if diff.is_zero() {
        return cap;
    }
    let places = (-diff.adjusted() - 1).max(0) as u64;
    places.min(cap)
}

/// Truncation error bound of the Leibniz series after `n_terms` terms: `4/(2n+1)`.
#[must_use]
pub fn leibniz_error_bound(n_terms: u64) -> BigRational {
    BigRational::new(BigInt::from(4), BigInt::from(2 * u128::from(n_terms) + 1))
}
