//! Calculator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::bbp::Bbp;
use crate::calculator::{Calculator, CoreCalculator, PiCalculator, PiError};
use crate::chudnovsky::{Chudnovsky, ChudnovskySplit};
use crate::leibniz::FixedLeibniz;
use crate::leibniz_rational::RationalLeibniz;

/// Canonical calculator names, in presentation order.
pub const CALCULATOR_NAMES: [&str; 5] = ["chudnovsky", "binsplit", "bbp", "leibniz", "rational"];

/// Factory trait for creating calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Get or create a calculator by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, PiError>;

    /// List all available calculator names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn Calculator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_calculator(name: &str) -> Result<Arc<dyn Calculator>, PiError> {
        let core: Arc<dyn CoreCalculator> = match name {
            "chudnovsky" | "chud" => Arc::new(Chudnovsky::new()),
            "binsplit" | "split" => Arc::new(ChudnovskySplit::new()),
            "bbp" => Arc::new(Bbp::new()),
            "leibniz" | "fixed" => Arc::new(FixedLeibniz::new()),
            "rational" | "fraction" => Arc::new(RationalLeibniz::new()),
            _ => return Err(PiError::Config(format!("unknown calculator: {name}"))),
        };
        debug!(name, algorithm = core.name(), "Calculator created");
        Ok(Arc::new(PiCalculator::new(core)))
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, PiError> {
        // Check cache first
        if let Some(calc) = self.cache.read().get(name) {
            return Ok(Arc::clone(calc));
        }

        let calc = Self::create_calculator(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&calc));
        Ok(calc)
    }

    fn available(&self) -> Vec<&str> {
        CALCULATOR_NAMES.to_vec()
    }
}
