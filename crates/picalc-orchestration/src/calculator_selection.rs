//! Calculator selection logic.

use std::sync::Arc;

use picalc_core::calculator::{Calculator, PiError};
use picalc_core::registry::CalculatorFactory;

/// Get calculators to run based on algorithm selection.
///
/// `algo` is `all`, a single calculator name, or a comma-separated list.
pub fn get_calculators_to_run(
    algo: &str,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<Arc<dyn Calculator>>, PiError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        names => {
            let calcs = names
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(|name| factory.get(name))
                .collect::<Result<Vec<_>, _>>()?;
            if calcs.is_empty() {
                return Err(PiError::Config("no calculator selected".into()));
            }
            Ok(calcs)
        }
    }
}
