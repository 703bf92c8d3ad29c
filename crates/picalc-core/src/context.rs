//! Precision context for decimal arithmetic.
//!
//! A [`Context`] carries the working precision (significant decimal digits)
//! and the rounding mode. It is a plain `Copy` value passed to every decimal
//! operation, so computations at different precisions can run side by side
//! without sharing any process-wide setting.
//!
//! Every operation returns the exact result rounded once to the context.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use crate::calculator::PiError;
use crate::decimal::{digit_count, pow10, Decimal};

/// Rounding applied when a result carries more digits than the precision allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Round to nearest, ties to even.
    #[default]
    HalfEven,
    /// Round to nearest, ties away from zero.
    HalfUp,
    /// Truncate toward zero.
    Down,
}

impl Rounding {
    /// Decide whether to bump the kept digits away from zero.
    ///
    /// `remainder` is the magnitude of the discarded digits, `divisor` the
    /// weight of one unit in the last kept place, and `sticky` is set when
    /// non-zero digits were discarded below the remainder.
    fn round_away(self, kept: &BigInt, remainder: &BigInt, divisor: &BigInt, sticky: bool) -> bool {
        match self {
            Rounding::Down => false,
            Rounding::HalfUp => remainder * 2u32 >= *divisor,
            Rounding::HalfEven => {
                let twice = remainder * 2u32;
                match twice.cmp(divisor) {
                    std::cmp::Ordering::Greater => true,
                    std::cmp::Ordering::Equal => sticky || kept.is_odd(),
                    std::cmp::Ordering::Less => false,
                }
            }
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rounding::HalfEven => "half-even",
            Rounding::HalfUp => "half-up",
            Rounding::Down => "down",
        };
        f.write_str(name)
    }
}

impl FromStr for Rounding {
    type Err = PiError;

    fn from_str(s: &str) -> Result<Self, PiError> {
        match s.to_ascii_lowercase().as_str() {
            "half-even" | "half_even" | "even" => Ok(Rounding::HalfEven),
            "half-up" | "half_up" => Ok(Rounding::HalfUp),
            "down" | "truncate" => Ok(Rounding::Down),
            other => Err(PiError::Config(format!("unknown rounding mode: {other}"))),
        }
    }
}

/// Working precision and rounding for decimal operations.
///
/// # Example
/// ```
/// use picalc_core::context::Context;
/// use picalc_core::decimal::Decimal;
///
/// let ctx = Context::new(5).unwrap();
/// let third = ctx.div(&Decimal::from_integer(1), &Decimal::from_integer(3)).unwrap();
/// assert_eq!(third.to_string(), "0.33333");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    precision: u32,
    rounding: Rounding,
}

impl Context {
    /// Create a context carrying `precision` significant digits, rounding half-even.
    pub fn new(precision: u32) -> Result<Self, PiError> {
        if precision == 0 {
            return Err(PiError::InvalidArgument(
                "precision must be >= 1 digit".to_string(),
            ));
        }
        Ok(Self {
            precision,
            rounding: Rounding::HalfEven,
        })
    }

    /// Replace the rounding mode.
    #[must_use]
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Significant decimal digits carried by results.
    #[must_use]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    #[must_use]
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Round `coefficient × 10^exponent` to the precision.
    ///
    /// `sticky` marks a non-zero quantity below the last digit of `coefficient`
    /// that was already discarded by the caller (an inexact quotient or root).
    /// Callers that pass `sticky` always supply more than `precision` digits.
    #[allow(clippy::cast_possible_wrap)]
    fn finish(&self, coefficient: BigInt, exponent: i64, sticky: bool) -> Decimal {
        let precision = u64::from(self.precision);
        let digits = digit_count(&coefficient);
        if digits <= precision {
            return Decimal::new(coefficient, exponent);
        }

        let drop = digits - precision;
        let divisor = pow10(drop);
        let (mut kept, remainder) = coefficient.div_rem(&divisor);
        let mut exponent = exponent + drop as i64;

        if self
            .rounding
            .round_away(&kept, &remainder.abs(), &divisor, sticky)
        {
            if coefficient.is_negative() {
                kept -= 1u32;
            } else {
                kept += 1u32;
            }
            // 999 -> 1000 grew a digit; the dropped digit is a zero
            if digit_count(&kept) > precision {
                kept /= 10u32;
                exponent += 1;
            }
        }
        Decimal::new(kept, exponent)
    }

    /// Round a value to the context (the unary plus of decimal arithmetic).
    #[must_use]
    pub fn round(&self, value: &Decimal) -> Decimal {
        self.finish(value.coefficient().clone(), value.exponent(), false)
    }

    /// Rounded sum.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn add(&self, a: &Decimal, b: &Decimal) -> Decimal {
        if a.is_zero() {
            return self.add_to_zero(a.exponent(), b);
        }
        if b.is_zero() {
            return self.add_to_zero(b.exponent(), a);
        }

        let (big, small) = if a.exponent() >= b.exponent() {
            (a, b)
        } else {
            (b, a)
        };
        // An operand lying wholly below the rounding position only matters
        // through its sign; shrink it to a single digit there.
        let pin = big.exponent() + (-1i64).min(big.digits() as i64 - i64::from(self.precision) - 2);
        let sum = if small.adjusted() < pin {
            let unit = if small.is_negative() { -1 } else { 1 };
            big.exact_add(&Decimal::new(unit, pin))
        } else {
            big.exact_add(small)
        };
        self.round(&sum)
    }

    /// `0 + other`, keeping the zero's exponent where the precision allows.
    #[allow(clippy::cast_possible_wrap)]
    fn add_to_zero(&self, zero_exponent: i64, other: &Decimal) -> Decimal {
        let exponent = zero_exponent
            .min(other.exponent())
            .max(other.exponent() - i64::from(self.precision) - 1);
        let padded = other.coefficient() * pow10((other.exponent() - exponent).unsigned_abs());
        self.finish(padded, exponent, false)
    }

    /// Rounded difference.
    #[must_use]
    pub fn sub(&self, a: &Decimal, b: &Decimal) -> Decimal {
        self.add(a, &-b)
    }

    /// Rounded product.
    #[must_use]
    pub fn mul(&self, a: &Decimal, b: &Decimal) -> Decimal {
        let product = a.exact_mul(b);
        self.round(&product)
    }

    /// Rounded quotient.
    #[allow(clippy::cast_possible_wrap)]
    pub fn div(&self, a: &Decimal, b: &Decimal) -> Result<Decimal, PiError> {
        if b.is_zero() {
            return Err(PiError::DivisionByZero);
        }
        let ideal = a.exponent() - b.exponent();
        if a.is_zero() {
            return Ok(Decimal::new(0, ideal));
        }

        // Scale the dividend so the quotient carries at least precision + 1 digits
        let shift = (u64::from(self.precision) + b.digits() + 1).saturating_sub(a.digits());
        let scaled = a.coefficient() * pow10(shift);
        let (mut quotient, remainder) = scaled.div_rem(b.coefficient());
        let mut exponent = ideal - shift as i64;

        if remainder.is_zero() {
            // Exact: give back padding zeros down to the ideal exponent
            let ten = BigInt::from(10u8);
            while exponent < ideal && !quotient.is_zero() && (&quotient % &ten).is_zero() {
                quotient /= &ten;
                exponent += 1;
            }
            return Ok(self.finish(quotient, exponent, false));
        }
        Ok(self.finish(quotient, exponent, true))
    }

    /// Rounded quotient of two exact integers.
    pub fn divide_integers(&self, numerator: &BigInt, denominator: &BigInt) -> Result<Decimal, PiError> {
        self.div(
            &Decimal::from_integer(numerator.clone()),
            &Decimal::from_integer(denominator.clone()),
        )
    }

    /// Round an exact fraction to the context.
    pub fn from_rational(&self, value: &BigRational) -> Result<Decimal, PiError> {
        self.divide_integers(value.numer(), value.denom())
    }

    /// Rounded square root.
    #[allow(clippy::cast_possible_wrap)]
    pub fn sqrt(&self, value: &Decimal) -> Result<Decimal, PiError> {
        if value.is_negative() {
            return Err(PiError::InvalidArgument(format!(
                "square root of negative value {value}"
            )));
        }
        if value.is_zero() {
            return Ok(Decimal::new(0, value.exponent().div_euclid(2)));
        }

        // The integer root needs at least precision + 1 digits, so the
        // radicand needs twice that, with an even exponent.
        let target = 2 * (u64::from(self.precision) + 1);
        let mut shift = target.saturating_sub(value.digits());
        if (value.exponent() - shift as i64) % 2 != 0 {
            shift += 1;
        }
        let radicand = value.coefficient() * pow10(shift);
        let exponent = (value.exponent() - shift as i64) / 2;

        let root = radicand.sqrt();
        let sticky = &root * &root != radicand;
        Ok(self.finish(root, exponent, sticky))
    }
}
