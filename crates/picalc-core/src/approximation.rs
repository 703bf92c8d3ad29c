//! Native result representations of the evaluators.

use std::fmt;

use num_rational::BigRational;
use num_traits::ToPrimitive;

use crate::calculator::PiError;
use crate::context::Context;
use crate::decimal::Decimal;

/// The output of one evaluator, kept in its native representation.
///
/// Decimal evaluators produce a value already rounded to their working
/// precision. The rational evaluator produces an exact fraction; rounding
/// happens only when the caller asks for [`Approximation::to_decimal`].
#[derive(Debug, Clone, PartialEq)]
pub enum Approximation {
    /// Arbitrary-precision decimal result.
    Decimal(Decimal),
    /// Exact fraction in lowest terms.
    Rational(BigRational),
}

impl Approximation {
    /// Decimal value rounded to `ctx`.
    pub fn to_decimal(&self, ctx: &Context) -> Result<Decimal, PiError> {
        match self {
            Approximation::Decimal(d) => Ok(ctx.round(d)),
            Approximation::Rational(r) => ctx.from_rational(r),
        }
    }

    /// Nearest `f64` (lossy).
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Approximation::Decimal(d) => d.to_f64(),
            Approximation::Rational(r) => r.to_f64().unwrap_or(f64::NAN),
        }
    }

    #[must_use]
    pub fn as_decimal(&self) -> Option<&Decimal> {
        match self {
            Approximation::Decimal(d) => Some(d),
            Approximation::Rational(_) => None,
        }
    }

    #[must_use]
    pub fn as_rational(&self) -> Option<&BigRational> {
        match self {
            Approximation::Rational(r) => Some(r),
            Approximation::Decimal(_) => None,
        }
    }
}

impl From<Decimal> for Approximation {
    fn from(value: Decimal) -> Self {
        Approximation::Decimal(value)
    }
}

impl From<BigRational> for Approximation {
    fn from(value: BigRational) -> Self {
        Approximation::Rational(value)
    }
}

impl fmt::Display for Approximation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Approximation::Decimal(d) => write!(f, "{d}"),
            Approximation::Rational(r) => write!(f, "{}/{}", r.numer(), r.denom()),
        }
    }
}
