//! Observers for progress reporting.
//!
//! Workers publish a `ProgressUpdate` every iteration; throttling is the
//! observer's business, so the engine stays oblivious to reporting policy.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info};

use crate::constants::PROGRESS_REPORT_THRESHOLD;
use crate::progress::ProgressUpdate;

/// Observer trait for receiving progress updates.
pub trait ProgressObserver: Send + Sync {
    /// Receive a progress update.
    fn on_progress(&self, update: &ProgressUpdate);
}

/// Null object pattern — discards all progress updates.
pub struct NoOpObserver;

impl NoOpObserver {
    /// Create a new no-op observer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for NoOpObserver {
    fn on_progress(&self, _update: &ProgressUpdate) {
        // Intentionally empty
    }
}

/// Observer that logs progress through `tracing`, throttled so hot loops
/// do not flood the log.
pub struct LoggingObserver {
    last_reported: AtomicU64,
}

impl LoggingObserver {
    /// Create a new logging observer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_reported: AtomicU64::new(0),
        }
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for LoggingObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        if update.done {
            info!(stage = %update.stage, worker = update.worker_index, "worker finished");
            return;
        }
        let last = f64::from_bits(self.last_reported.load(Ordering::Relaxed));
        if (update.progress - last) >= PROGRESS_REPORT_THRESHOLD {
            debug!(
                stage = %update.stage,
                worker = update.worker_index,
                progress = format!("{:.1}%", update.progress * 100.0),
                term = update.current_term,
                total = update.total_terms,
                "progress"
            );
            self.last_reported
                .store(update.progress.to_bits(), Ordering::Relaxed);
        }
    }
}
