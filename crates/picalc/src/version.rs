//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Get the full version string with the default decimal settings.
#[must_use]
pub fn full_version() -> String {
    format!(
        "picalc {} (default precision {}, rounding {})",
        version(),
        picalc_core::DEFAULT_PRECISION,
        picalc_core::Rounding::default()
    )
}
