//! Arbitrary-precision decimal numbers.
//!
//! A [`Decimal`] is `coefficient × 10^exponent` with an arbitrary-size signed
//! coefficient. Values are always exact: rounding happens only inside a
//! [`Context`](crate::context::Context) operation, never here.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, ToPrimitive, Zero};

use crate::calculator::PiError;

/// An exact decimal value `coefficient × 10^exponent`.
///
/// Equality and ordering compare numeric values, so `1.0` equals `1`.
///
/// # Example
/// ```
/// use picalc_core::decimal::Decimal;
///
/// let x: Decimal = "3.14159".parse().unwrap();
/// assert_eq!(x.coefficient().to_string(), "314159");
/// assert_eq!(x.exponent(), -5);
/// assert_eq!(x.to_string(), "3.14159");
/// ```
#[derive(Debug, Clone)]
pub struct Decimal {
    coefficient: BigInt,
    exponent: i64,
}

/// `10^n` as an unsigned big integer.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn pow10_magnitude(n: u64) -> BigUint {
    num_traits::pow(BigUint::from(10u8), n as usize)
}

/// `10^n` as a signed big integer.
pub(crate) fn pow10(n: u64) -> BigInt {
    BigInt::from(pow10_magnitude(n))
}

/// Largest exponent magnitude accepted when parsing.
pub const MAX_EXPONENT: i64 = 999_999;

/// Distance from a power of ten below which the log estimate is not trusted.
const LOG_MARGIN: f64 = 1e-6;

/// Number of decimal digits in `|value|`; zero has one digit.
///
/// Estimated from the leading 64 bits; only a magnitude within `LOG_MARGIN`
/// of a power of ten pays for an exact comparison.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub(crate) fn digit_count(value: &BigInt) -> u64 {
    let magnitude = value.magnitude();
    if magnitude.is_zero() {
        return 1;
    }
    if let Some(small) = magnitude.to_u128() {
        return u64::from(small.ilog10()) + 1;
    }

    let shift = magnitude.bits() - 64;
    let top = (magnitude >> shift).to_u64().unwrap_or(u64::MAX);
    let log = (top as f64).log10() + shift as f64 * std::f64::consts::LOG10_2;
    let nearest = log.round();
    if shift < 1 << 32 && (log - nearest).abs() > LOG_MARGIN {
        return log.floor() as u64 + 1;
    }
    let power = nearest as u64;
    if *magnitude >= pow10_magnitude(power) {
        power + 1
    } else {
        power
    }
}

/// Bring two values to a common exponent, returning both coefficients and the exponent.
fn align(a: &Decimal, b: &Decimal) -> (BigInt, BigInt, i64) {
    let exponent = a.exponent.min(b.exponent);
    let ca = &a.coefficient * pow10(a.exponent.abs_diff(exponent));
    let cb = &b.coefficient * pow10(b.exponent.abs_diff(exponent));
    (ca, cb, exponent)
}

impl Decimal {
    /// Create `coefficient × 10^exponent`.
    #[must_use]
    pub fn new(coefficient: impl Into<BigInt>, exponent: i64) -> Self {
        Self {
            coefficient: coefficient.into(),
            exponent,
        }
    }

    /// The additive identity.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(0, 0)
    }

    /// An exact integer value.
    #[must_use]
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self::new(value, 0)
    }

    /// The signed coefficient.
    #[must_use]
    pub fn coefficient(&self) -> &BigInt {
        &self.coefficient
    }

    /// The power of ten applied to the coefficient.
    #[must_use]
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficient.is_zero()
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.coefficient.is_negative()
    }

    /// Number of digits in the coefficient (significant digits, including trailing zeros).
    #[must_use]
    pub fn digits(&self) -> u64 {
        digit_count(&self.coefficient)
    }

    /// Exponent of the most significant digit: `1234E-2` (12.34) has adjusted exponent 1.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn adjusted(&self) -> i64 {
        self.exponent.saturating_add(self.digits() as i64 - 1)
    }

    #[must_use]
    pub fn abs(&self) -> Self {
        Self::new(self.coefficient.abs(), self.exponent)
    }

    /// Exact sum, no rounding.
    #[must_use]
    pub fn exact_add(&self, other: &Self) -> Self {
        let (a, b, exponent) = align(self, other);
        Self::new(a + b, exponent)
    }

    /// Exact difference, no rounding.
    #[must_use]
    pub fn exact_sub(&self, other: &Self) -> Self {
        self.exact_add(&-other)
    }

    /// Exact product, no rounding.
    #[must_use]
    pub fn exact_mul(&self, other: &Self) -> Self {
        Self::new(
            &self.coefficient * &other.coefficient,
            self.exponent.saturating_add(other.exponent),
        )
    }

    /// Nearest `f64`. Lossy by nature; use a [`Context`](crate::context::Context) for decimal rounding.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigInt> for Decimal {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal::new(-self.coefficient, self.exponent)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal::new(-&self.coefficient, self.exponent)
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let sign = self.coefficient.sign().cmp(&other.coefficient.sign());
        if sign != Ordering::Equal || self.is_zero() {
            return sign;
        }
        // Same sign: magnitudes of different order need no alignment
        let magnitude = self.adjusted().cmp(&other.adjusted());
        if magnitude != Ordering::Equal {
            return if self.is_negative() {
                magnitude.reverse()
            } else {
                magnitude
            };
        }
        let (a, b, _) = align(self, other);
        a.cmp(&b)
    }
}

/// Scientific string form: plain notation while the exponent is non-positive
/// and the value is not too small, `d.dddE±x` otherwise.
impl fmt::Display for Decimal {
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.coefficient.magnitude().to_str_radix(10);
        let sign = if self.coefficient.is_negative() { "-" } else { "" };
        let len = digits.len() as i64;
        let left_digits = self.exponent + len;
        let dot_place = if self.exponent <= 0 && left_digits > -6 {
            left_digits
        } else {
            1
        };

        if dot_place <= 0 {
            write!(f, "{sign}0.{}{digits}", "0".repeat(dot_place.unsigned_abs() as usize))?;
        } else if dot_place >= len {
            write!(f, "{sign}{digits}{}", "0".repeat((dot_place - len) as usize))?;
        } else {
            let split = dot_place as usize;
            write!(f, "{sign}{}.{}", &digits[..split], &digits[split..])?;
        }

        let exp = left_digits - dot_place;
        if exp != 0 {
            write!(f, "E{exp:+}")?;
        }
        Ok(())
    }
}

impl FromStr for Decimal {
    type Err = PiError;

    /// Parse `[sign]digits[.digits][(e|E)[sign]digits]`.
    #[allow(clippy::cast_possible_wrap)]
    fn from_str(s: &str) -> Result<Self, PiError> {
        let s = s.trim();
        let invalid = || PiError::Parse(format!("invalid decimal literal: {s:?}"));

        let (mantissa, mut exponent): (&str, i64) = match s.find(|c: char| c == 'e' || c == 'E') {
            Some(i) => (&s[..i], s[i + 1..].parse::<i64>().map_err(|_| invalid())?),
            None => (s, 0),
        };
        let (negative, body) = match mantissa.as_bytes().first() {
            Some(b'-') => (true, &mantissa[1..]),
            Some(b'+') => (false, &mantissa[1..]),
            _ => (false, mantissa),
        };
        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }
        if !int_part
            .bytes()
            .chain(frac_part.bytes())
            .all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let digits = format!("{int_part}{frac_part}");
        let mut coefficient = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;
        if negative {
            coefficient = -coefficient;
        }
        exponent = exponent
            .checked_sub(frac_part.len() as i64)
            .ok_or_else(invalid)?;
        if exponent.abs() > MAX_EXPONENT {
            return Err(PiError::Parse(format!(
                "exponent out of range (|e| <= {MAX_EXPONENT}): {s:?}"
            )));
        }
        Ok(Self::new(coefficient, exponent))
    }
}
