//! Property-based tests for the series evaluators and decimal context.
//!
//! These tests exercise the series functions and the `CoreCalculator`
//! trait directly (without the `PiCalculator` decorator).

use std::sync::OnceLock;

use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;

use picalc_core::accuracy::{correct_decimal_places, leibniz_error_bound, reference_pi};
use picalc_core::bbp::bbp;
use picalc_core::calculator::CoreCalculator;
use picalc_core::chudnovsky::{chudnovsky, chudnovsky_split, default_precision, Chudnovsky};
use picalc_core::context::{Context, Rounding};
use picalc_core::decimal::Decimal;
use picalc_core::leibniz::leibniz_fixed;
use picalc_core::leibniz_rational::leibniz_rational;
use picalc_core::options::Options;

fn reference() -> &'static Decimal {
    static REFERENCE: OnceLock<Decimal> = OnceLock::new();
    REFERENCE.get_or_init(|| reference_pi(300).unwrap())
}

fn ctx(precision: u32) -> Context {
    Context::new(precision).unwrap()
}

fn error(approx: &Decimal) -> Decimal {
    approx.exact_sub(reference()).abs()
}

fn chudnovsky_places(n: u64) -> u64 {
    let result = Chudnovsky::new()
        .calculate_core(n, &Options::default())
        .unwrap();
    correct_decimal_places(result.as_decimal().unwrap(), reference())
}

fn decimal_strategy() -> impl Strategy<Value = Decimal> {
    (-10_000_000i64..10_000_000, -12i64..12).prop_map(|(c, e)| Decimal::new(c, e))
}

fn rounding_strategy() -> impl Strategy<Value = Rounding> {
    prop_oneof![
        Just(Rounding::HalfEven),
        Just(Rounding::HalfUp),
        Just(Rounding::Down),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// |fixed Leibniz − π| stays within the alternating-series bound 4/(2n+1).
    #[test]
    fn fixed_leibniz_within_truncation_bound(n in 1u64..600) {
        let c = ctx(40);
        let pi = leibniz_fixed(n, &c).unwrap();
        let bound = c.from_rational(&leibniz_error_bound(n)).unwrap();
        prop_assert!(error(&pi) <= bound, "n={}: {}", n, pi);
    }

    /// The exact partial sum obeys the same bound.
    #[test]
    fn rational_leibniz_within_truncation_bound(n in 1u64..300) {
        let c = ctx(60);
        let pi = c.from_rational(&leibniz_rational(n).unwrap()).unwrap();
        let bound = c.from_rational(&leibniz_error_bound(n)).unwrap();
        prop_assert!(error(&pi) <= bound, "n={}: {}", n, pi);
    }

    /// Ten times the terms gives roughly a tenth of the error.
    #[test]
    fn tenfold_terms_tighten_error_tenfold(n in 5u64..200) {
        let c = ctx(30);
        let coarse = error(&leibniz_fixed(n, &c).unwrap()).to_f64();
        let fine = error(&leibniz_fixed(10 * n, &c).unwrap()).to_f64();
        let ratio = coarse / fine;
        prop_assert!((5.0..20.0).contains(&ratio), "n={}: ratio {}", n, ratio);
    }

    /// The exact sum, rounded at the end, matches the fixed-precision sum
    /// to within the rounding accumulated over n terms.
    #[test]
    fn rational_matches_fixed_precision(n in 1u64..300, precision in 20u32..60) {
        let c = ctx(precision);
        let exact = c.from_rational(&leibniz_rational(n).unwrap()).unwrap();
        let fixed = leibniz_fixed(n, &c).unwrap();
        let unit = Decimal::new(4 * (n + 1), 1 - i64::from(precision));
        prop_assert!(exact.exact_sub(&fixed).abs() <= unit, "n={}: {} vs {}", n, exact, fixed);
    }

    /// Summing the same terms twice gives bit-identical fractions.
    #[test]
    fn rational_sum_is_deterministic(n in 1u64..200) {
        let a = leibniz_rational(n).unwrap();
        let b = leibniz_rational(n).unwrap();
        prop_assert_eq!(a.numer(), b.numer());
        prop_assert_eq!(a.denom(), b.denom());
    }

    /// Partial sums alternate around π.
    #[test]
    fn rational_partial_sums_bracket_pi(n in 1u64..200) {
        let pi = BigRational::new(
            reference().coefficient().clone(),
            BigInt::from(10u32).pow(300),
        );
        let a = leibniz_rational(n).unwrap();
        let b = leibniz_rational(n + 1).unwrap();
        prop_assert!((a.clone() - &pi) * (b - &pi) < BigRational::from_integer(BigInt::from(0)));
    }

    /// More Chudnovsky terms never lose correct digits.
    #[test]
    fn chudnovsky_accuracy_monotone(n1 in 1u64..15, gap in 1u64..5) {
        prop_assert!(chudnovsky_places(n1 + gap) >= chudnovsky_places(n1));
    }

    /// More BBP terms never lose correct digits once a couple of terms apart.
    #[test]
    fn bbp_accuracy_monotone(n1 in 1u64..120, gap in 3u64..20) {
        let p1 = correct_decimal_places(&bbp(n1).unwrap(), reference());
        let p2 = correct_decimal_places(&bbp(n1 + gap).unwrap(), reference());
        prop_assert!(p2 >= p1, "bbp({}) {} places, bbp({}) {} places", n1, p1, n1 + gap, p2);
    }

    /// Binary splitting and the iterative recurrence agree to the working precision.
    #[test]
    fn binary_split_agrees_with_iteration(n in 1u64..40) {
        let c = ctx(default_precision(n));
        let iterative = chudnovsky(n, &c).unwrap();
        let split = chudnovsky_split(n, &c).unwrap();
        let unit = Decimal::new(n + 10, 1 - i64::from(c.precision()));
        prop_assert!(iterative.exact_sub(&split).abs() <= unit);
    }

    /// Context addition is the exact sum rounded once.
    #[test]
    fn add_rounds_exact_sum(
        a in decimal_strategy(),
        b in decimal_strategy(),
        precision in 1u32..12,
        rounding in rounding_strategy(),
    ) {
        let c = ctx(precision).with_rounding(rounding);
        prop_assert_eq!(c.add(&a, &b), c.round(&a.exact_add(&b)));
    }

    /// Context multiplication is the exact product rounded once.
    #[test]
    fn mul_rounds_exact_product(
        a in decimal_strategy(),
        b in decimal_strategy(),
        precision in 1u32..12,
    ) {
        let c = ctx(precision);
        prop_assert_eq!(c.mul(&a, &b), c.round(&a.exact_mul(&b)));
    }

    /// Context division never carries more digits than the precision and
    /// lies within one unit of the last place of the true quotient.
    #[test]
    fn div_is_within_one_unit(
        a in decimal_strategy(),
        b in decimal_strategy(),
        precision in 1u32..20,
    ) {
        prop_assume!(!b.is_zero() && !a.is_zero());
        let c = ctx(precision);
        let q = c.div(&a, &b).unwrap();
        prop_assert!(q.digits() <= u64::from(precision));
        let back = q.exact_mul(&b);
        let residual = back.exact_sub(&a).abs();
        let unit = Decimal::new(1, q.adjusted() - i64::from(precision) + 1).exact_mul(&b.abs());
        prop_assert!(residual <= unit, "{} / {} = {}", a, b, q);
    }
}
