//! CLI result presenter.

use picalc_orchestration::interfaces::{AccuracyReport, CalculationResult, ResultPresenter};

use crate::output::{describe_size, format_number, format_rational_decimal, format_result};
use crate::ui;

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Lines printed for one result.
    #[must_use]
    pub fn result_lines(&self, result: &CalculationResult, n_terms: u64, details: bool) -> Vec<String> {
        let value = match &result.outcome {
            Ok(value) => value,
            Err(e) => return vec![format!("{} {}: {e}", ui::error_tag(), result.algorithm)],
        };
        if self.quiet {
            return vec![value.to_string()];
        }

        let mut lines = vec![
            format!("Algorithm: {}", result.algorithm),
            format!("Terms: {}", format_number(n_terms)),
        ];
        if details {
            lines.push(format!("Size: {}", describe_size(value)));
        }
        lines.push(format!("π ≈ {}", format_result(value, self.verbose)));
        if let Some(decimal) = format_rational_decimal(value) {
            lines.push(format!("  ≈ {decimal}"));
        }
        lines
    }

    /// Lines printed for an accuracy comparison.
    #[must_use]
    pub fn comparison_lines(&self, results: &[CalculationResult], reports: &[AccuracyReport]) -> Vec<String> {
        if self.quiet {
            return Vec::new();
        }

        let mut lines = vec![String::new(), ui::header("Accuracy"), format!("{:-<60}", "")];
        for result in results {
            let status = match &result.outcome {
                Err(e) => format!("{} {e}", ui::error_tag()),
                Ok(_) => reports
                    .iter()
                    .find(|r| r.algorithm == result.algorithm)
                    .map_or_else(String::new, |r| ui::places_label(r.correct_places)),
            };
            lines.push(format!("  {:<20} {status}", result.algorithm));
        }
        lines
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, result: &CalculationResult, n_terms: u64, details: bool) {
        for line in self.result_lines(result, n_terms, details) {
            println!("{line}");
        }
    }

    fn present_comparison(&self, results: &[CalculationResult], reports: &[AccuracyReport]) {
        for line in self.comparison_lines(results, reports) {
            println!("{line}");
        }
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use num_rational::BigRational;
    use picalc_core::approximation::Approximation;
    use picalc_core::calculator::PiError;

    fn plain(lines: &[String]) -> Vec<String> {
        lines
            .iter()
            .map(|l| console::strip_ansi_codes(l).to_string())
            .collect()
    }

    fn ok(algorithm: &str, value: Approximation) -> CalculationResult {
        CalculationResult {
            algorithm: algorithm.into(),
            outcome: Ok(value),
        }
    }

    fn rational_result() -> CalculationResult {
        ok(
            "RationalLeibniz",
            Approximation::Rational(BigRational::new(BigInt::from(52), BigInt::from(15))),
        )
    }

    #[test]
    fn quiet_prints_bare_value() {
        let presenter = CLIResultPresenter::new(false, true);
        assert_eq!(presenter.result_lines(&rational_result(), 3, true), ["52/15"]);
        assert!(presenter.comparison_lines(&[rational_result()], &[]).is_empty());
    }

    #[test]
    fn normal_result_lines() {
        let presenter = CLIResultPresenter::new(false, false);
        let result = ok("BBP", Approximation::Decimal("3.13333".parse().unwrap()));
        assert_eq!(
            presenter.result_lines(&result, 1, false),
            ["Algorithm: BBP", "Terms: 1", "π ≈ 3.13333"]
        );
    }

    #[test]
    fn rational_shows_decimal_and_size() {
        let presenter = CLIResultPresenter::new(false, false);
        let lines = presenter.result_lines(&rational_result(), 3, true);
        assert_eq!(lines[2], "Size: numerator 2 digits, denominator 2 digits");
        assert_eq!(lines[3], "π ≈ 52/15");
        assert_eq!(lines[4], "  ≈ 3.4666666666666666667");
    }

    #[test]
    fn error_result_line() {
        let presenter = CLIResultPresenter::new(false, false);
        let result = CalculationResult {
            algorithm: "Chudnovsky".into(),
            outcome: Err(PiError::InvalidArgument("n_terms must be >= 1, got 0".into())),
        };
        let lines = plain(&presenter.result_lines(&result, 0, false));
        assert_eq!(
            lines,
            ["[ERROR] Chudnovsky: invalid argument: n_terms must be >= 1, got 0"]
        );
    }

    #[test]
    fn comparison_table() {
        let presenter = CLIResultPresenter::new(false, false);
        let results = vec![
            ok("BBP", Approximation::Decimal("3.14159265358978".parse().unwrap())),
            CalculationResult {
                algorithm: "FixedLeibniz".into(),
                outcome: Err(PiError::InvalidArgument("n_terms must be >= 1, got 0".into())),
            },
        ];
        let reports = vec![AccuracyReport {
            algorithm: "BBP".into(),
            correct_places: 13,
        }];
        let lines = plain(&presenter.comparison_lines(&results, &reports));
        assert_eq!(lines[1], "=== Accuracy ===");
        assert!(lines[3].contains("BBP") && lines[3].ends_with("13 places"));
        assert!(lines[4].contains("[ERROR] invalid argument"));
    }

    #[test]
    fn present_does_not_panic() {
        let presenter = CLIResultPresenter::new(true, false);
        presenter.present_result(&rational_result(), 3, true);
        presenter.present_comparison(&[rational_result()], &[]);
        presenter.present_error("test error message");
    }
}
