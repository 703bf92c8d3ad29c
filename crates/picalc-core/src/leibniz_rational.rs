//! Leibniz series in exact rational arithmetic.
//!
//! The partial sum is kept as a reduced `BigRational`; nothing is rounded.
//! The denominator grows roughly like the lcm of the first `2n` odd numbers,
//! which is the cost of exactness. Turning the result into a decimal is up to
//! the caller ([`Context::from_rational`](crate::context::Context::from_rational)).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use crate::approximation::Approximation;
use crate::calculator::{require_terms, CoreCalculator, PiError};
use crate::options::Options;

/// Exact `4 · Σ_{k<n} (−1)^k / (2k+1)`.
///
/// # Example
/// ```
/// let pi = picalc_core::leibniz_rational::leibniz_rational(3).unwrap();
/// assert_eq!(pi.to_string(), "52/15");
/// ```
pub fn leibniz_rational(n_terms: u64) -> Result<BigRational, PiError> {
    require_terms(n_terms, 1)?;

    let mut sum = BigRational::zero();
    for k in 0..n_terms {
        let sign = if k % 2 == 0 { 1 } else { -1 };
        sum += BigRational::new(BigInt::from(sign), BigInt::from(2 * u128::from(k) + 1));
    }
    Ok(sum * BigRational::from_integer(BigInt::from(4)))
}

/// Exact rational Leibniz calculator. Ignores the precision option.
pub struct RationalLeibniz;

impl RationalLeibniz {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for RationalLeibniz {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for RationalLeibniz {
    fn calculate_core(&self, n_terms: u64, _opts: &Options) -> Result<Approximation, PiError> {
        leibniz_rational(n_terms).map(Approximation::Rational)
    }

    fn name(&self) -> &'static str {
        "RationalLeibniz"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::leibniz::leibniz_fixed;
    use num_traits::{One, Signed, ToPrimitive};

    fn fraction(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn zero_terms_rejected() {
        assert!(matches!(leibniz_rational(0), Err(PiError::InvalidArgument(_))));
    }

    #[test]
    fn first_partial_sums() {
        assert_eq!(leibniz_rational(1).unwrap(), fraction(4, 1));
        assert_eq!(leibniz_rational(2).unwrap(), fraction(8, 3));
        assert_eq!(leibniz_rational(3).unwrap(), fraction(52, 15));
        assert_eq!(leibniz_rational(4).unwrap(), fraction(304, 105));
        assert_eq!(leibniz_rational(5).unwrap(), fraction(1052, 315));
        assert_eq!(leibniz_rational(10).unwrap(), fraction(44_257_352, 14_549_535));
    }

    #[test]
    fn always_lowest_terms() {
        for n in 1..40 {
            let r = leibniz_rational(n).unwrap();
            assert!(r.denom().is_positive());
            let reduced = BigRational::new(r.numer().clone(), r.denom().clone());
            assert_eq!(r.numer(), reduced.numer());
            assert_eq!(r.denom(), reduced.denom());
            assert!(num_integer::Integer::gcd(r.numer(), r.denom()).is_one());
        }
    }

    #[test]
    fn identical_across_runs() {
        let a = leibniz_rational(300).unwrap();
        let b = leibniz_rational(300).unwrap();
        assert_eq!(a.numer(), b.numer());
        assert_eq!(a.denom(), b.denom());
    }

    #[test]
    fn thousand_terms() {
        let r = leibniz_rational(1000).unwrap();
        assert!((r.to_f64().unwrap() - 3.140_592_653_839_793).abs() < 1e-14);
        let ctx = Context::new(30).unwrap();
        assert_eq!(
            ctx.from_rational(&r).unwrap().to_string(),
            "3.14059265383979292596359650287"
        );
        assert_eq!(r.denom().to_string().len(), 864);
    }

    #[test]
    fn agrees_with_fixed_precision_sum() {
        let ctx = Context::new(40).unwrap();
        for n in [1u64, 7, 50] {
            let exact = ctx.from_rational(&leibniz_rational(n).unwrap()).unwrap();
            let fixed = leibniz_fixed(n, &ctx).unwrap();
            let diff = exact.exact_sub(&fixed).abs();
            assert!(diff.is_zero() || diff.adjusted() <= -35, "n={n}: {exact} vs {fixed}");
        }
    }
}
