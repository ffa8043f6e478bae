//! Single-shot orchestration: validate, plan, partition, execute, merge.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use tracing::{debug, info, warn};

use picalc_core::observer::ProgressObserver;
use picalc_core::precision::PrecisionPlan;
use picalc_core::progress::{CancellationToken, TimeoutCancellationToken};
use picalc_core::range::partition_terms;
use picalc_core::summation::{full_series_sum, range_partial_sum};
use picalc_core::{merge_partial_sums, ComputeOptions, MemoCache, PiError, PiValue};

use crate::interfaces::ComputationReport;
use crate::pool;

/// Compute π to `digits` significant digits.
///
/// `opts.threads == 1` runs the series from the base case on the calling
/// thread; larger counts partition the term index range and compute every
/// range independently on a worker pool, with the merge as the single
/// synchronization point. Validation errors are raised before any work is
/// scheduled; a worker failure or deadline overrun fails the whole
/// computation.
///
/// The cache handle is honored only when `opts.use_memo` is set; with
/// `use_memo` and no handle, a call-local cache is used.
pub fn compute_pi(
    cancel: &CancellationToken,
    observer: &dyn ProgressObserver,
    digits: u64,
    opts: &ComputeOptions,
    cache: Option<&MemoCache>,
) -> Result<PiValue, PiError> {
    opts.validate()?;
    let plan = PrecisionPlan::new(digits)?;
    let deadline = TimeoutCancellationToken::with_token(cancel.clone(), opts.timeout);

    let local_cache = (opts.use_memo && cache.is_none()).then(MemoCache::new);
    let cache = if opts.use_memo {
        cache.or(local_cache.as_ref())
    } else {
        None
    };

    info!(
        digits,
        threads = opts.threads,
        terms = plan.term_count,
        memo = cache.is_some(),
        "starting Chudnovsky computation"
    );

    let partials = if opts.threads == 1 {
        vec![full_series_sum(&plan, cache, &deadline, observer, 0)?]
    } else {
        let ranges = partition_terms(plan.term_count, opts.threads)?;
        debug!(ranges = ranges.len(), "partitioned term index range");

        let plan_ref = &plan;
        let deadline_ref = &deadline;
        let tasks: Vec<_> = ranges
            .into_iter()
            .enumerate()
            .map(|(index, range)| {
                move |abort: &AtomicBool| {
                    if abort.load(Ordering::Relaxed) {
                        return Err(PiError::Cancelled);
                    }
                    range_partial_sum(range, plan_ref, cache, deadline_ref, observer, index)
                }
            })
            .collect();
        pool::execute_all(tasks, opts.threads)?
    };

    merge_partial_sums(&partials, &plan)
}

/// Run a computation and wrap the outcome with wall-clock timing.
pub fn run_computation(
    cancel: &CancellationToken,
    observer: &dyn ProgressObserver,
    digits: u64,
    opts: &ComputeOptions,
    cache: Option<&MemoCache>,
) -> ComputationReport {
    let start = Instant::now();
    let outcome = compute_pi(cancel, observer, digits, opts, cache);
    let duration = start.elapsed();

    match &outcome {
        Ok(_) => info!(digits, ?duration, "π computed"),
        Err(e) => warn!(digits, error = %e, "computation failed"),
    }

    ComputationReport {
        digits,
        threads: opts.threads,
        outcome,
        duration,
    }
}
