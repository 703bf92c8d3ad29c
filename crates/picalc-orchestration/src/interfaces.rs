//! Orchestration interfaces.

use picalc_core::approximation::Approximation;
use picalc_core::calculator::PiError;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a calculation result.
    fn present_result(&self, result: &CalculationResult, n_terms: u64, details: bool);

    /// Present the accuracy of several results against a reference π.
    fn present_comparison(&self, results: &[CalculationResult], reports: &[AccuracyReport]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single calculation.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Algorithm name.
    pub algorithm: String,
    /// The approximation in its native representation, or a structured error.
    pub outcome: Result<Approximation, PiError>,
}

impl CalculationResult {
    /// Whether the calculation produced a value.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Accuracy of one successful result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccuracyReport {
    /// Algorithm name.
    pub algorithm: String,
    /// Decimal places agreeing with the reference π.
    pub correct_places: u64,
}
