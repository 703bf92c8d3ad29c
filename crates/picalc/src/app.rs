//! Application entry point and dispatch.

use anyhow::Result;
use tracing::{debug, warn};

use picalc_cli::output::write_to_file;
use picalc_cli::presenter::CLIResultPresenter;
use picalc_core::registry::DefaultFactory;
use picalc_orchestration::calculator_selection::get_calculators_to_run;
use picalc_orchestration::interfaces::{CalculationResult, ResultPresenter};
use picalc_orchestration::orchestrator::{analyze_comparison_results, execute_calculations};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        picalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let opts = config.options()?;
    let factory = DefaultFactory::new();
    let calculators = get_calculators_to_run(&config.algo, &factory)?;
    debug!(algo = %config.algo, n_terms = config.terms, precision = opts.precision, "Running");

    let results = execute_calculations(&calculators, config.terms, &opts);

    // Nothing succeeded: report the first failure
    if !results.iter().any(CalculationResult::is_ok) {
        if let Some(Err(e)) = results.first().map(|r| r.outcome.clone()) {
            return Err(e.into());
        }
    }

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    for result in &results {
        presenter.present_result(result, config.terms, config.details);
    }

    if config.compare {
        match analyze_comparison_results(&results, config.reference_digits) {
            Ok(reports) => presenter.present_comparison(&results, &reports),
            Err(e) => {
                warn!(error = %e, "Accuracy analysis failed");
                presenter.present_error(&format!("accuracy analysis failed: {e}"));
            }
        }
    }

    // Write the first successful value to file if requested
    if let Some(ref path) = config.output {
        if let Some(value) = results.iter().find_map(|r| r.outcome.as_ref().ok()) {
            write_to_file(path, value)?;
        }
    }

    Ok(())
}
