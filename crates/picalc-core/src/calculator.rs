//! Calculator traits and the `PiCalculator` decorator.
//!
//! `Calculator` is the public trait consumed by orchestration.
//! `CoreCalculator` is the internal trait implemented by algorithms.
//! `PiCalculator` is a decorator that rejects invalid term counts up front and traces each run.

use std::sync::Arc;

use tracing::debug;

use crate::approximation::Approximation;
use crate::options::Options;

/// Error type for π calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PiError {
    /// A term count or precision outside the algorithm's preconditions.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Division by an induced zero denominator.
    #[error("division by zero")]
    DivisionByZero,

    /// The Chudnovsky coefficient recurrence did not divide exactly.
    #[error("inexact coefficient division at term {term}")]
    InexactDivision {
        /// Index of the offending term.
        term: u64,
    },

    /// A decimal literal could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A calculation error occurred.
    #[error("calculation error: {0}")]
    Calculation(String),
}

/// Reject a term count below `min`.
pub fn require_terms(n_terms: u64, min: u64) -> Result<(), PiError> {
    if n_terms < min {
        return Err(PiError::InvalidArgument(format!(
            "n_terms must be >= {min}, got {n_terms}"
        )));
    }
    Ok(())
}

/// Public trait for π calculators, consumed by orchestration.
pub trait Calculator: Send + Sync {
    /// Approximate π with `n_terms` series terms.
    fn calculate(&self, n_terms: u64, opts: &Options) -> Result<Approximation, PiError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Internal trait for algorithm implementations.
/// Wrapped by `PiCalculator` which adds argument checks and tracing.
pub trait CoreCalculator: Send + Sync {
    /// Perform the series evaluation.
    fn calculate_core(&self, n_terms: u64, opts: &Options) -> Result<Approximation, PiError>;

    /// Get the name of this algorithm.
    fn name(&self) -> &'static str;

    /// Smallest accepted term count.
    fn min_terms(&self) -> u64 {
        1
    }
}

/// Decorator that wraps a `CoreCalculator` with precondition checks and tracing.
pub struct PiCalculator {
    inner: Arc<dyn CoreCalculator>,
}

impl PiCalculator {
    /// Create a new `PiCalculator` wrapping the given core calculator.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreCalculator>) -> Self {
        Self { inner }
    }
}

impl Calculator for PiCalculator {
    fn calculate(&self, n_terms: u64, opts: &Options) -> Result<Approximation, PiError> {
        // Fail before any arithmetic
        require_terms(n_terms, self.inner.min_terms())?;

        debug!(
            algorithm = self.inner.name(),
            n_terms,
            precision = opts.precision,
            "Calculation started"
        );
        let result = self.inner.calculate_core(n_terms, opts);
        match &result {
            Ok(_) => debug!(algorithm = self.inner.name(), "Calculation complete"),
            Err(e) => debug!(algorithm = self.inner.name(), error = %e, "Calculation failed"),
        }
        result
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
