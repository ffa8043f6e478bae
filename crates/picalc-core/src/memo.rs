//! Term-level memoization cache.
//!
//! The key includes the previous term value itself (with its precision), so
//! within a single pass every probe misses — the value evolves each
//! iteration. Hits happen when the same computation is repeated at the same
//! precision, e.g. a stream recomputing earlier digit counts. The cache is
//! internally synchronized so one instance may be shared across workers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use rug::Float;

/// Composite key for one recurrence step.
///
/// Two numerically equal floats at different working precisions produce
/// different keys; a fingerprint encodes both the exact value and its
/// precision.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemoKey {
    a_k: String,
    k: u64,
    c3_over_24: String,
}

impl MemoKey {
    /// Build the key for computing term `k` from the previous term.
    #[must_use]
    pub fn new(previous_a_k: &Float, k: u64, c3_over_24: &Float) -> Self {
        Self {
            a_k: fingerprint(previous_a_k),
            k,
            c3_over_24: fingerprint(c3_over_24),
        }
    }
}

/// Exact value-plus-precision fingerprint of a float.
fn fingerprint(value: &Float) -> String {
    format!("{}:{}", value.prec(), value.to_string_radix(16, None))
}

/// Unbounded cache of recurrence steps, cleared only on request.
#[derive(Default)]
pub struct MemoCache {
    entries: Mutex<HashMap<MemoKey, Float>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, or compute, store, and return it.
    ///
    /// The lock is not held during `compute`, so workers sharing a cache do
    /// not serialize on the arithmetic; racing inserts of the same key
    /// store the same value.
    pub fn get_or_compute(&self, key: MemoKey, compute: impl FnOnce() -> Float) -> Float {
        if let Some(value) = self.entries.lock().get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return value.clone();
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let value = compute();
        self.entries.lock().insert(key, value.clone());
        value
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Number of probes answered from the cache.
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of probes that had to compute.
    #[must_use]
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}
