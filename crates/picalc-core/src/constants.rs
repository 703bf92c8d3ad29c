//! Series constants, precision defaults, and exit codes.

/// Leading numerator of the Chudnovsky series (`L₀`).
pub const CHUDNOVSKY_L0: u64 = 13_591_409;

/// Increment of the linear term `L` per Chudnovsky term.
pub const CHUDNOVSKY_L_STEP: u64 = 545_140_134;

/// Ratio of successive powers `X`: `-640320³`.
pub const CHUDNOVSKY_X_FACTOR: i64 = -262_537_412_640_768_000;

/// `640320³ / 24`, used by the binary-splitting recurrence.
pub const CHUDNOVSKY_C3_OVER_24: u64 = 10_939_058_860_032_000;

/// Scale factor of `C = 426880·√10005`.
pub const CHUDNOVSKY_C_FACTOR: u64 = 426_880;

/// Radicand of `C = 426880·√10005`.
pub const CHUDNOVSKY_C_RADICAND: u64 = 10_005;

/// Approximate correct decimal digits contributed by each Chudnovsky term.
pub const CHUDNOVSKY_DIGITS_PER_TERM: u32 = 14;

/// Extra working digits on top of `14·n` for the Chudnovsky default precision.
pub const CHUDNOVSKY_GUARD_DIGITS: u32 = 10;

/// Term-range size above which binary-splitting halves run in parallel.
pub const SPLIT_PARALLEL_THRESHOLD: u64 = 256;

/// Fixed headroom of the BBP evaluator: working precision is `n + 5`.
///
/// Not derived from an error analysis. Accumulated rounding error grows
/// with the term count, so for large `n` the last few digits are unreliable.
pub const BBP_GUARD_DIGITS: u32 = 5;

/// Default working precision for the fixed-precision Leibniz evaluator and
/// for decimal rendering of exact rationals.
pub const DEFAULT_PRECISION: u32 = 20;

/// Working digits added on top of the requested digits of a reference π.
pub const REFERENCE_GUARD_DIGITS: u32 = 10;

/// Exit codes for the `picalc` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A term count or precision outside the preconditions.
    pub const ERROR_INVALID_ARGUMENT: i32 = 2;
    /// Numeric degeneracy (division by zero, inexact coefficient).
    pub const ERROR_NUMERIC: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
