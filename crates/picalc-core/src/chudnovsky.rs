//! Chudnovsky series for π.
//!
//! ```text
//!   1/π = 12 Σ (-1)^k (6k)! (13591409 + 545140134k) / ((3k)! (k!)^3 640320^(3k+3/2))
//! ```
//!
//! [`chudnovsky`] iterates the term recurrence with exact integers and one
//! context division per term. [`chudnovsky_split`] evaluates the same series
//! by binary splitting: all intermediate work is exact integer products and
//! only the final quotient is rounded. Each term adds about 14 digits.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::approximation::Approximation;
use crate::calculator::{require_terms, CoreCalculator, PiError};
use crate::constants::{
    CHUDNOVSKY_C3_OVER_24, CHUDNOVSKY_C_FACTOR, CHUDNOVSKY_C_RADICAND,
    CHUDNOVSKY_DIGITS_PER_TERM, CHUDNOVSKY_GUARD_DIGITS, CHUDNOVSKY_L0, CHUDNOVSKY_L_STEP,
    CHUDNOVSKY_X_FACTOR, SPLIT_PARALLEL_THRESHOLD,
};
use crate::context::Context;
use crate::decimal::Decimal;
use crate::options::Options;

/// Working precision that keeps every term of an `n_terms` run useful: `14·n + 10`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn default_precision(n_terms: u64) -> u32 {
    let digits = n_terms
        .saturating_mul(u64::from(CHUDNOVSKY_DIGITS_PER_TERM))
        .saturating_add(u64::from(CHUDNOVSKY_GUARD_DIGITS));
    digits.min(u64::from(u32::MAX)) as u32
}

/// `C = 426880·√10005`, rounded to the context.
pub fn chudnovsky_constant(ctx: &Context) -> Result<Decimal, PiError> {
    let root = ctx.sqrt(&Decimal::from_integer(CHUDNOVSKY_C_RADICAND))?;
    Ok(ctx.mul(&Decimal::from_integer(CHUDNOVSKY_C_FACTOR), &root))
}

/// Advance the coefficient: `M·(K³ − 16K) / i³`.
///
/// The recurrence keeps `M = (6i)! / ((3i)! (i!)³)`, so the division is exact;
/// a remainder means the state is corrupt and is reported, never truncated.
pub(crate) fn next_coefficient(m: &BigInt, k: &BigInt, i: u64) -> Result<BigInt, PiError> {
    let numerator = m * (k * k * k - k * 16u32);
    let i_cubed = BigInt::from(i).pow(3);
    let (quotient, remainder) = numerator.div_rem(&i_cubed);
    if !remainder.is_zero() {
        return Err(PiError::InexactDivision { term: i });
    }
    Ok(quotient)
}

/// Approximate π with `n_terms` Chudnovsky terms at the context's precision.
///
/// `n_terms = 1` is the leading term alone (about 13 correct places).
/// Precision below `14·n_terms` wastes the later terms; nothing flags it.
///
/// # Example
/// ```
/// use picalc_core::chudnovsky::{chudnovsky, default_precision};
/// use picalc_core::context::Context;
///
/// let ctx = Context::new(default_precision(2)).unwrap();
/// let pi = chudnovsky(2, &ctx).unwrap();
/// assert!(pi.to_string().starts_with("3.14159265358979323846"));
/// ```
pub fn chudnovsky(n_terms: u64, ctx: &Context) -> Result<Decimal, PiError> {
    require_terms(n_terms, 1)?;

    let c = chudnovsky_constant(ctx)?;
    let mut m = BigInt::one();
    let mut l = BigInt::from(CHUDNOVSKY_L0);
    let mut x = BigInt::one();
    let mut k = BigInt::from(6u32);
    let mut sum = Decimal::from_integer(CHUDNOVSKY_L0);

    for i in 1..n_terms {
        m = next_coefficient(&m, &k, i)?;
        l += CHUDNOVSKY_L_STEP;
        x *= CHUDNOVSKY_X_FACTOR;
        let term = ctx.divide_integers(&(&m * &l), &x)?;
        sum = ctx.add(&sum, &term);
        k += 12u32;
    }

    ctx.div(&c, &sum)
}

/// Binary-splitting state `P(a,b), Q(a,b), T(a,b)` over terms `a..b`.
struct Split {
    p: BigInt,
    q: BigInt,
    t: BigInt,
}

fn split_leaf(a: u64) -> Split {
    if a == 0 {
        return Split {
            p: BigInt::one(),
            q: BigInt::one(),
            t: BigInt::from(CHUDNOVSKY_L0),
        };
    }
    // P_a = (6a-5)(2a-1)(6a-1), Q_a = a³·640320³/24
    let p = BigInt::from(6 * a - 5) * BigInt::from(2 * a - 1) * BigInt::from(6 * a - 1);
    let q = BigInt::from(a).pow(3) * CHUDNOVSKY_C3_OVER_24;
    let l = BigInt::from(CHUDNOVSKY_L0) + BigInt::from(CHUDNOVSKY_L_STEP) * a;
    let t = if a.is_odd() { -(l * &p) } else { l * &p };
    Split { p, q, t }
}

fn binary_split(a: u64, b: u64) -> Split {
    if b - a == 1 {
        return split_leaf(a);
    }
    let mid = a + (b - a) / 2;
    let (left, right) = if b - a >= SPLIT_PARALLEL_THRESHOLD {
        rayon::join(|| binary_split(a, mid), || binary_split(mid, b))
    } else {
        (binary_split(a, mid), binary_split(mid, b))
    };

    // T(a,b) = Q(m,b)·T(a,m) + P(a,m)·T(m,b)
    let t = &right.q * &left.t + &left.p * &right.t;
    Split {
        p: left.p * right.p,
        q: left.q * right.q,
        t,
    }
}

/// Approximate π with `n_terms` Chudnovsky terms by binary splitting.
///
/// `π = 426880·√10005·Q(0,n) / T(0,n)`; the only roundings are the
/// constant, one product, and the final quotient.
pub fn chudnovsky_split(n_terms: u64, ctx: &Context) -> Result<Decimal, PiError> {
    require_terms(n_terms, 1)?;

    let Split { q, t, .. } = binary_split(0, n_terms);
    let c = chudnovsky_constant(ctx)?;
    let numerator = ctx.mul(&c, &Decimal::from_integer(q));
    ctx.div(&numerator, &Decimal::from_integer(t))
}

/// Iterative Chudnovsky calculator.
///
/// Precision defaults to `14·n + 10` digits.
pub struct Chudnovsky;

impl Chudnovsky {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Chudnovsky {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for Chudnovsky {
    fn calculate_core(&self, n_terms: u64, opts: &Options) -> Result<Approximation, PiError> {
        let ctx = opts.context_or(default_precision(n_terms))?;
        chudnovsky(n_terms, &ctx).map(Approximation::Decimal)
    }

    fn name(&self) -> &'static str {
        "Chudnovsky"
    }
}

/// Binary-splitting Chudnovsky calculator.
pub struct ChudnovskySplit;

impl ChudnovskySplit {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ChudnovskySplit {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for ChudnovskySplit {
    fn calculate_core(&self, n_terms: u64, opts: &Options) -> Result<Approximation, PiError> {
        let ctx = opts.context_or(default_precision(n_terms))?;
        chudnovsky_split(n_terms, &ctx).map(Approximation::Decimal)
    }

    fn name(&self) -> &'static str {
        "ChudnovskySplit"
    }
}
