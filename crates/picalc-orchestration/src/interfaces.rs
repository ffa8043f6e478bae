//! Interfaces between orchestration and presentation layers.

use std::time::Duration;

use picalc_core::{PiError, PiValue};

/// Outcome of one orchestrated computation, with wall-clock timing.
#[derive(Debug)]
pub struct ComputationReport {
    /// Requested significant digits.
    pub digits: u64,
    /// Worker count the computation ran with.
    pub threads: usize,
    /// The computed value or the failure that aborted the batch.
    pub outcome: Result<PiValue, PiError>,
    /// Wall-clock duration of the computation.
    pub duration: Duration,
}

/// Trait for presenting computation outcomes to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a successful computation.
    fn present_result(&self, digits: u64, value: &PiValue, duration: Duration);

    /// Present a failure.
    fn present_error(&self, error: &PiError);
}

/// Null presenter (does nothing).
pub struct NullPresenter;

impl ResultPresenter for NullPresenter {
    fn present_result(&self, _digits: u64, _value: &PiValue, _duration: Duration) {}
    fn present_error(&self, _error: &PiError) {}
}
