//! # picalc-core
//!
//! Core engine of the PiCalc-rs arbitrary-precision π calculator.
//! Implements the Chudnovsky series: precision planning, the per-term
//! recurrence, deterministic range partitioning, independent range
//! summation, and the final merge — all over `rug` (GMP/MPFR) values that
//! carry their own working precision.

pub mod constants;
pub mod error;
pub mod memo;
pub mod merge;
pub mod observer;
pub mod options;
pub mod precision;
pub mod progress;
pub mod range;
pub mod summation;
pub mod term;
pub mod value;

// Re-exports
pub use constants::{exit_codes, DEFAULT_TIMEOUT, DIGITS_PER_TERM_APPROX, GUARD_DIGITS};
pub use error::PiError;
pub use memo::{MemoCache, MemoKey};
pub use merge::merge_partial_sums;
pub use observer::{LoggingObserver, NoOpObserver, ProgressObserver};
pub use options::ComputeOptions;
pub use precision::PrecisionPlan;
pub use progress::{CancellationToken, ProgressUpdate, TimeoutCancellationToken};
pub use range::{partition_terms, Range};
pub use summation::{full_series_sum, range_partial_sum, PartialSum};
pub use value::PiValue;

/// Compute π to `digits` significant digits on the single-threaded path.
///
/// This is a convenience function for simple use cases. For thread counts,
/// memoization, timeouts, progress, and cancellation, use
/// `picalc-orchestration`.
///
/// # Example
/// ```
/// let pi = picalc_core::pi(10).unwrap();
/// assert_eq!(pi.to_digit_string(), "3.141592653");
/// ```
pub fn pi(digits: u64) -> Result<PiValue, PiError> {
    let plan = PrecisionPlan::new(digits)?;
    let cancel = TimeoutCancellationToken::new(constants::DEFAULT_TIMEOUT);
    let partial = summation::full_series_sum(&plan, None, &cancel, &NoOpObserver::new(), 0)?;
    merge::merge_partial_sums(&[partial], &plan)
}
