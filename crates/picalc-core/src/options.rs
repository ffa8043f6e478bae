//! Computation options.

use std::time::Duration;

use crate::constants::DEFAULT_TIMEOUT;
use crate::error::PiError;

/// Options for a π computation.
#[derive(Debug, Clone)]
pub struct ComputeOptions {
    /// Number of worker ranges; 1 selects the non-partitioned path.
    pub threads: usize,
    /// Whether to route recurrence steps through a memoization cache.
    pub use_memo: bool,
    /// Wait bound for the whole batch of workers.
    pub timeout: Duration,
}

impl Default for ComputeOptions {
    fn default() -> Self {
        Self {
            threads: 1,
            use_memo: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ComputeOptions {
    /// Reject option combinations before any work is scheduled.
    pub fn validate(&self) -> Result<(), PiError> {
        if self.threads == 0 {
            return Err(PiError::InvalidRangeCount(0));
        }
        Ok(())
    }
}
