//! Error type for π computations.

/// Error type for π computations.
///
/// Validation errors are raised before any work is scheduled; worker and
/// timeout errors abort the whole computation — no partial π is ever
/// produced for a failed batch.
#[derive(Debug, thiserror::Error)]
pub enum PiError {
    /// Requested digit count was below 1 (or unrepresentably large).
    #[error("invalid precision: {0} (must be at least 1 digit)")]
    InvalidPrecision(u64),

    /// Requested range/thread count was zero.
    #[error("invalid range count: {0} (must be positive)")]
    InvalidRangeCount(usize),

    /// A range was constructed with an upper bound below its lower bound.
    #[error("invalid range bounds: [{initial}, {end})")]
    InvalidRangeBounds {
        /// First term of the range.
        initial: u64,
        /// One past the last term of the range.
        end: u64,
    },

    /// An individual range worker failed.
    #[error("range worker failed: {0}")]
    Worker(String),

    /// The batch exceeded its wait bound.
    #[error("computation timed out after {0}")]
    Timeout(String),

    /// The merged series total was zero, so π cannot be formed.
    #[error("degenerate result: series total is zero")]
    DegenerateResult,

    /// Computation was cancelled.
    #[error("computation cancelled")]
    Cancelled,
}
