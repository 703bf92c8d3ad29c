//! Error handling and exit codes.

use picalc_core::calculator::PiError;
use picalc_core::constants::exit_codes;

/// Map a calculation error to its exit code.
pub fn handle_error(err: &PiError) -> i32 {
    match err {
        PiError::InvalidArgument(_) | PiError::Parse(_) => exit_codes::ERROR_INVALID_ARGUMENT,
        PiError::DivisionByZero | PiError::InexactDivision { .. } => exit_codes::ERROR_NUMERIC,
        PiError::Config(_) => exit_codes::ERROR_CONFIG,
        PiError::Calculation(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for any error reaching `main`; non-calculation errors are generic.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<PiError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
