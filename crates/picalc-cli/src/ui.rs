//! UI helpers for CLI display.

use console::style;

/// Accuracy at or above which a result is shown as good.
const GOOD_PLACES: u64 = 10;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// A styled section header.
#[must_use]
pub fn header(text: &str) -> String {
    let plain = format!("=== {text} ===");
    if is_color_disabled() {
        plain
    } else {
        style(plain).bold().cyan().to_string()
    }
}

/// Correct-place count, coloured by how useful it is.
#[must_use]
pub fn places_label(places: u64) -> String {
    let plain = format!("{places} places");
    if is_color_disabled() {
        plain
    } else if places >= GOOD_PLACES {
        style(plain).green().to_string()
    } else {
        style(plain).yellow().to_string()
    }
}

/// Status tag for a failed calculation.
#[must_use]
pub fn error_tag() -> String {
    if is_color_disabled() {
        "[ERROR]".to_string()
    } else {
        style("[ERROR]").red().bold().to_string()
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    eprintln!("{} {text}", error_tag());
}
