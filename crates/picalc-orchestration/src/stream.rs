//! Unbounded stream of increasing-precision π values.
//!
//! Modeled as a cooperative generator: the cancellation token is checked
//! before each emission starts, so disposing the consumer stops the stream
//! promptly without cancelling a computation already in flight. A failed
//! computation is yielded once as an error and the stream then terminates.

use std::sync::Arc;

use picalc_core::observer::NoOpObserver;
use picalc_core::progress::CancellationToken;
use picalc_core::{ComputeOptions, MemoCache, PiError, PiValue};

use crate::orchestrator::compute_pi;

/// Iterator yielding π at 1, 2, 3, … significant digits.
pub struct PiStream {
    options: ComputeOptions,
    cache: Option<Arc<MemoCache>>,
    cancel: CancellationToken,
    next_digits: u64,
    terminated: bool,
}

impl PiStream {
    /// Create a stream starting at one digit.
    #[must_use]
    pub fn new(options: ComputeOptions) -> Self {
        Self {
            options,
            cache: None,
            cancel: CancellationToken::new(),
            next_digits: 1,
            terminated: false,
        }
    }

    /// Share a memoization cache across all emissions.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<MemoCache>) -> Self {
        self.options.use_memo = true;
        self.cache = Some(cache);
        self
    }

    /// A handle for stopping the stream from another thread; the stream
    /// ends before the next emission would start.
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Digit count the next emission will carry.
    #[must_use]
    pub fn next_digits(&self) -> u64 {
        self.next_digits
    }
}

impl Iterator for PiStream {
    type Item = Result<PiValue, PiError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.terminated || self.cancel.is_cancelled() {
            return None;
        }

        let result = compute_pi(
            &self.cancel,
            &NoOpObserver::new(),
            self.next_digits,
            &self.options,
            self.cache.as_deref(),
        );
        self.next_digits += 1;
        if result.is_err() {
            self.terminated = true;
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_increasing_precision() {
        let stream = PiStream::new(ComputeOptions::default());
        let values: Vec<String> = stream
            .take(5)
            .map(|r| r.unwrap().to_digit_string())
            .collect();
        assert_eq!(values, ["3", "3.1", "3.14", "3.141", "3.1415"]);
    }

    #[test]
    fn cancellation_stops_before_the_next_emission() {
        let mut stream = PiStream::new(ComputeOptions::default());
        let token = stream.cancellation_token();

        assert!(stream.next().unwrap().is_ok());
        token.cancel();
        assert!(stream.next().is_none());
    }

    #[test]
    fn shared_cache_persists_across_emissions() {
        let cache = Arc::new(MemoCache::new());
        let mut stream = PiStream::new(ComputeOptions::default()).with_cache(Arc::clone(&cache));
        for _ in 0..3 {
            stream.next().unwrap().unwrap();
        }
        // Each emission runs at a new precision, so entries accumulate.
        assert!(!cache.is_empty());
    }

    #[test]
    fn error_terminates_the_stream() {
        let options = ComputeOptions {
            threads: 0,
            ..Default::default()
        };
        let mut stream = PiStream::new(options);
        assert!(matches!(
            stream.next(),
            Some(Err(PiError::InvalidRangeCount(0)))
        ));
        assert!(stream.next().is_none());
    }
}
