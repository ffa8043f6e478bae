//! Constants of the Chudnovsky series and engine configuration.

use std::time::Duration;

/// The Chudnovsky constant C = 640320.
///
/// The series converges because C³/24 ≈ 1.09e16 dominates the k³ growth of
/// the term denominators.
pub const CHUDNOVSKY_C: u32 = 640_320;

/// Linear coefficient of the series numerator: 13591409 + 545140134·k.
pub const LINEAR_COEFFICIENT: u32 = 13_591_409;

/// Per-term coefficient of the series numerator.
pub const TERM_COEFFICIENT: u32 = 545_140_134;

/// Argument of the square root in the closed form: π = 426880·√10005 / S.
pub const SQRT_ARGUMENT: u32 = 10_005;

/// Constant factor of the closed form.
pub const FINAL_FACTOR: u32 = 426_880;

/// Extra decimal digits carried through all intermediate arithmetic:
/// one for the leading "3", one for rounding at the final truncation.
pub const GUARD_DIGITS: u64 = 2;

/// Extra binary precision on top of the decimal-to-bit conversion, so the
/// final decimal truncation never lands on an uncertain digit.
pub const PRECISION_SLACK_BITS: u32 = 32;

/// Precision boost applied to the closed-form starting term of a range.
///
/// The factorial division chain loses relative precision faster than the
/// iterative recurrence; 8% is a safe empirical margin.
pub const CLOSED_FORM_PRECISION_BOOST: f64 = 1.08;

/// Each series term contributes ≈ log10(C³/24 / 72) decimal digits.
///
/// The planner recomputes this at working precision; the constant is for
/// estimates and sanity checks only.
pub const DIGITS_PER_TERM_APPROX: f64 = 14.181_647_462_725_477;

/// Default bound on how long a batch of range workers may run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Minimum progress change (1%) before an observer reports an update.
pub const PROGRESS_REPORT_THRESHOLD: f64 = 0.01;

/// Exit codes for the command-line binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic computation error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Computation timed out.
    pub const ERROR_TIMEOUT: i32 = 2;
    /// Invalid configuration or arguments.
    pub const ERROR_CONFIG: i32 = 4;
    /// Computation cancelled by user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_cubed_over_24_is_exact() {
        let c = u128::from(CHUDNOVSKY_C);
        assert_eq!((c * c * c) % 24, 0);
        assert_eq!((c * c * c) / 24, 10_939_058_860_032_000);
    }

    #[test]
    fn digits_per_term_matches_constant() {
        let c3_over_24 = 10_939_058_860_032_000f64;
        let computed = (c3_over_24 / 72.0).log10();
        assert!((computed - DIGITS_PER_TERM_APPROX).abs() < 1e-9);
    }
}
