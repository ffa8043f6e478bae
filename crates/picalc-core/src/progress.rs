//! Progress updates and cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::PiError;

/// Progress update sent from a range worker to observers.
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    /// Index of the worker producing this update.
    pub worker_index: usize,
    /// Name of the computation stage.
    pub stage: &'static str,
    /// Progress as a fraction in [0.0, 1.0].
    pub progress: f64,
    /// Terms completed by this worker.
    pub current_term: u64,
    /// Total terms assigned to this worker.
    pub total_terms: u64,
    /// Whether this is the final update.
    pub done: bool,
}

impl ProgressUpdate {
    /// Create a new progress update.
    #[must_use]
    pub fn new(
        worker_index: usize,
        stage: &'static str,
        progress: f64,
        current_term: u64,
        total_terms: u64,
    ) -> Self {
        Self {
            worker_index,
            stage,
            progress,
            current_term,
            total_terms,
            done: false,
        }
    }

    /// Create a completion update.
    #[must_use]
    pub fn done(worker_index: usize, stage: &'static str) -> Self {
        Self {
            worker_index,
            stage,
            progress: 1.0,
            current_term: 0,
            total_terms: 0,
            done: true,
        }
    }
}

/// Cooperative cancellation token.
///
/// Clones share the same flag, so cancelling any clone cancels them all.
///
/// # Example
/// ```
/// use picalc_core::progress::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
/// token.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Clone)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a new, uncancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Checkpoint: error out if cancellation has been requested.
    pub fn check_cancelled(&self) -> Result<(), PiError> {
        if self.is_cancelled() {
            Err(PiError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

/// A cancellation token with an absolute deadline.
///
/// Workers poll this at every loop iteration; once the deadline passes the
/// whole batch fails with `Timeout` — a deadline overrun never produces a
/// partial result.
#[derive(Clone)]
pub struct TimeoutCancellationToken {
    inner: CancellationToken,
    deadline: Instant,
    timeout: Duration,
}

impl TimeoutCancellationToken {
    /// Create a token with a fresh cancellation flag and the given bound.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self::with_token(CancellationToken::new(), timeout)
    }

    /// Wrap an existing cancellation token with a deadline, so external
    /// cancellation and the wait bound share one checkpoint.
    #[must_use]
    pub fn with_token(token: CancellationToken, timeout: Duration) -> Self {
        Self {
            inner: token,
            deadline: Instant::now() + timeout,
            timeout,
        }
    }

    /// Whether the token was cancelled or the deadline has passed.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.is_cancelled() || Instant::now() >= self.deadline
    }

    /// Request manual cancellation.
    pub fn cancel(&self) {
        self.inner.cancel();
    }

    /// Checkpoint: `Cancelled` if the flag is set, `Timeout` past the
    /// deadline.
    pub fn check_cancelled(&self) -> Result<(), PiError> {
        if self.inner.is_cancelled() {
            return Err(PiError::Cancelled);
        }
        if Instant::now() >= self.deadline {
            return Err(PiError::Timeout(format!("{:?}", self.timeout)));
        }
        Ok(())
    }

    /// Remaining time before the deadline.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    /// The inner token, for handing to code that only needs the flag.
    #[must_use]
    pub fn token(&self) -> &CancellationToken {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_starts_uncancelled() {
        let token = CancellationToken::new();
        assert!(token.check_cancelled().is_ok());
    }

    #[test]
    fn cancel_propagates_through_clone() {
        let token = CancellationToken::new();
        let clone = token.clone();
        token.cancel();
        assert!(clone.is_cancelled());
        assert!(matches!(clone.check_cancelled(), Err(PiError::Cancelled)));
    }

    #[test]
    fn deadline_not_yet_reached() {
        let token = TimeoutCancellationToken::new(Duration::from_secs(60));
        assert!(!token.is_cancelled());
        assert!(token.check_cancelled().is_ok());
        assert!(token.remaining() > Duration::ZERO);
    }

    #[test]
    fn manual_cancel_beats_deadline() {
        let token = TimeoutCancellationToken::new(Duration::from_secs(60));
        token.cancel();
        assert!(matches!(token.check_cancelled(), Err(PiError::Cancelled)));
    }

    #[test]
    fn expired_deadline_reports_timeout() {
        let token = TimeoutCancellationToken::new(Duration::ZERO);
        std::thread::sleep(Duration::from_millis(1));
        assert!(token.is_cancelled());
        assert!(matches!(token.check_cancelled(), Err(PiError::Timeout(_))));
    }

    #[test]
    fn linked_token_shares_flag() {
        let outer = CancellationToken::new();
        let token = TimeoutCancellationToken::with_token(outer.clone(), Duration::from_secs(60));
        outer.cancel();
        assert!(token.is_cancelled());
        assert!(token.token().is_cancelled());
    }

    #[test]
    fn progress_update_done() {
        let update = ProgressUpdate::done(2, "chudnovsky/range");
        assert!(update.done);
        assert!((update.progress - 1.0).abs() < f64::EPSILON);
        assert_eq!(update.worker_index, 2);
    }
}
