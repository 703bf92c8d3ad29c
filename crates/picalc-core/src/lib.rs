//! # picalc-core
//!
//! Core library for the picalc arbitrary-precision π calculator.
//! Implements the Chudnovsky (iterative and binary-splitting), BBP,
//! fixed-precision Leibniz and exact-rational Leibniz series on top of an
//! exactly-rounded decimal type with an explicit precision [`Context`].

pub mod accuracy;
pub mod approximation;
pub mod bbp;
pub mod calculator;
pub mod chudnovsky;
pub mod constants;
pub mod context;
pub mod decimal;
pub mod leibniz;
pub mod leibniz_rational;
pub mod options;
pub mod registry;

// Re-exports
pub use accuracy::{correct_decimal_places, leibniz_error_bound, reference_pi};
pub use approximation::Approximation;
pub use bbp::{bbp, bbp_with_guard};
pub use calculator::{Calculator, CoreCalculator, PiCalculator, PiError};
pub use chudnovsky::{chudnovsky, chudnovsky_split};
pub use constants::{exit_codes, BBP_GUARD_DIGITS, DEFAULT_PRECISION};
pub use context::{Context, Rounding};
pub use decimal::Decimal;
pub use leibniz::leibniz_fixed;
pub use leibniz_rational::leibniz_rational;
pub use options::Options;
pub use registry::{CalculatorFactory, DefaultFactory, CALCULATOR_NAMES};

/// Compute π to `places` decimal places.
///
/// This is a convenience function for simple use cases. For a chosen
/// algorithm, term count or rounding mode, use the `Calculator` trait or the
/// series functions directly.
///
/// # Example
/// ```
/// assert_eq!(picalc_core::pi(10).unwrap().to_string(), "3.1415926536");
/// assert_eq!(picalc_core::pi(0).unwrap().to_string(), "3");
/// ```
pub fn pi(places: u32) -> Result<Decimal, PiError> {
    reference_pi(places)
}
