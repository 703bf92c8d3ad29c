//! Core orchestration: parallel execution and accuracy analysis.

use std::sync::Arc;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{debug, warn};

use picalc_core::accuracy::{correct_decimal_places, reference_pi};
use picalc_core::calculator::{Calculator, PiError};
use picalc_core::constants::REFERENCE_GUARD_DIGITS;
use picalc_core::context::Context;
use picalc_core::options::Options;

use crate::interfaces::{AccuracyReport, CalculationResult};

fn run_one(calc: &Arc<dyn Calculator>, n_terms: u64, opts: &Options) -> CalculationResult {
    let outcome = calc.calculate(n_terms, opts);
    if let Err(e) = &outcome {
        warn!(algorithm = calc.name(), error = %e, "Calculation failed");
    }
    CalculationResult {
        algorithm: calc.name().to_string(),
        outcome,
    }
}

/// Execute calculations with all given calculators.
///
/// Several calculators run in parallel; each builds its own precision
/// context, so they cannot interfere. Results keep the input order.
pub fn execute_calculations(
    calculators: &[Arc<dyn Calculator>],
    n_terms: u64,
    opts: &Options,
) -> Vec<CalculationResult> {
    debug!(count = calculators.len(), n_terms, "Executing calculations");

    if calculators.len() == 1 {
        // Single calculator: run directly
        return vec![run_one(&calculators[0], n_terms, opts)];
    }

    calculators
        .par_iter()
        .map(|calc| run_one(calc, n_terms, opts))
        .collect()
}

/// Measure every successful result against π to `reference_places` places.
///
/// Errors when no calculation succeeded.
pub fn analyze_comparison_results(
    results: &[CalculationResult],
    reference_places: u32,
) -> Result<Vec<AccuracyReport>, PiError> {
    let valid: Vec<&CalculationResult> = results.iter().filter(|r| r.is_ok()).collect();
    if valid.is_empty() {
        return Err(PiError::Calculation("no valid results".into()));
    }

    let reference = reference_pi(reference_places)?;
    let ctx = Context::new(
        reference_places
            .saturating_add(1)
            .saturating_add(REFERENCE_GUARD_DIGITS),
    )?;

    let mut reports = Vec::with_capacity(valid.len());
    for result in valid {
        if let Ok(approx) = &result.outcome {
            let value = approx.to_decimal(&ctx)?;
            reports.push(AccuracyReport {
                algorithm: result.algorithm.clone(),
                correct_places: correct_decimal_places(&value, &reference),
            });
        }
    }
    debug!(reports = reports.len(), reference_places, "Accuracy analysis complete");
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use num_rational::BigRational;
    use picalc_core::approximation::Approximation;
    use picalc_core::decimal::Decimal;
    use picalc_core::registry::{CalculatorFactory, DefaultFactory};

    fn calc(name: &str) -> Arc<dyn Calculator> {
        DefaultFactory::new().get(name).unwrap()
    }

    fn decimal_result(algorithm: &str, value: &str) -> CalculationResult {
        CalculationResult {
            algorithm: algorithm.into(),
            outcome: Ok(Approximation::Decimal(value.parse::<Decimal>().unwrap())),
        }
    }

    #[test]
    fn execute_single_calculator() {
        let results = execute_calculations(&[calc("rational")], 3, &Options::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].algorithm, "RationalLeibniz");
        assert_eq!(results[0].outcome.as_ref().unwrap().to_string(), "52/15");
    }

    #[test]
    fn execute_multiple_calculators_parallel() {
        let calcs = [calc("chudnovsky"), calc("binsplit"), calc("bbp")];
        let results = execute_calculations(&calcs, 10, &Options::default());
        let names: Vec<&str> = results.iter().map(|r| r.algorithm.as_str()).collect();
        assert_eq!(names, ["Chudnovsky", "ChudnovskySplit", "BBP"]);
        assert!(results.iter().all(CalculationResult::is_ok));
    }

    #[test]
    fn execute_keeps_failures_per_calculator() {
        // Zero terms is valid for BBP only
        let calcs = [calc("bbp"), calc("leibniz")];
        let results = execute_calculations(&calcs, 0, &Options::default());
        assert!(results[0].is_ok());
        assert!(matches!(results[1].outcome, Err(PiError::InvalidArgument(_))));
    }

    #[test]
    fn analyze_reports_accuracy() {
        let results = vec![
            decimal_result("A", "3.14159265358973420766845"),
            decimal_result("B", "3.140592651"),
        ];
        let reports = analyze_comparison_results(&results, 50).unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].correct_places, 13);
        assert_eq!(reports[1].correct_places, 2);
    }

    #[test]
    fn analyze_converts_rationals_explicitly() {
        let results = vec![CalculationResult {
            algorithm: "RationalLeibniz".into(),
            outcome: Ok(Approximation::Rational(BigRational::new(
                BigInt::from(52),
                BigInt::from(15),
            ))),
        }];
        let reports = analyze_comparison_results(&results, 20).unwrap();
        assert_eq!(reports[0].correct_places, 0);
    }

    #[test]
    fn analyze_ignores_error_entries() {
        let results = vec![
            decimal_result("A", "3.1416"),
            CalculationResult {
                algorithm: "B".into(),
                outcome: Err(PiError::InvalidArgument("n_terms must be >= 1, got 0".into())),
            },
        ];
        let reports = analyze_comparison_results(&results, 10).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].algorithm, "A");
        // |3.1416 - π| = 7.3E-6
        assert_eq!(reports[0].correct_places, 5);
    }

    #[test]
    fn analyze_no_valid_results() {
        let results = vec![CalculationResult {
            algorithm: "A".into(),
            outcome: Err(PiError::DivisionByZero),
        }];
        assert!(matches!(
            analyze_comparison_results(&results, 10),
            Err(PiError::Calculation(_))
        ));
    }

    #[test]
    fn analyze_empty_results() {
        assert!(matches!(
            analyze_comparison_results(&[], 10),
            Err(PiError::Calculation(_))
        ));
    }

    #[test]
    fn analyze_capped_by_reference() {
        let results = execute_calculations(&[calc("chudnovsky")], 10, &Options::default());
        let reports = analyze_comparison_results(&results, 30).unwrap();
        assert_eq!(reports[0].correct_places, 30);
    }
}
