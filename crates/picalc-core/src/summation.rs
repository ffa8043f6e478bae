//! Range sum workers: the two ways of producing a `PartialSum`.

use rug::Float;

use crate::error::PiError;
use crate::memo::MemoCache;
use crate::observer::ProgressObserver;
use crate::precision::PrecisionPlan;
use crate::progress::{ProgressUpdate, TimeoutCancellationToken};
use crate::range::Range;
use crate::term::{closed_form_term, TermState};

/// Stage label for the full single-threaded series.
pub const FULL_SERIES_STAGE: &str = "chudnovsky/series";

/// Stage label for one partitioned range.
pub const RANGE_STAGE: &str = "chudnovsky/range";

/// Immutable `(ΣA, Σk·A)` contribution of one range.
///
/// Produced by exactly one worker; ownership moves to the merge step.
#[derive(Debug, Clone)]
pub struct PartialSum {
    a_sum: Float,
    b_sum: Float,
}

impl PartialSum {
    /// Wrap a finished pair of sums.
    #[must_use]
    pub fn new(a_sum: Float, b_sum: Float) -> Self {
        Self { a_sum, b_sum }
    }

    /// The zero contribution of a degenerate range.
    #[must_use]
    pub fn zero(working_bits: u32) -> Self {
        Self {
            a_sum: Float::new(working_bits),
            b_sum: Float::new(working_bits),
        }
    }

    /// ΣA over the range.
    #[must_use]
    pub fn a_sum(&self) -> &Float {
        &self.a_sum
    }

    /// Σk·A over the range.
    #[must_use]
    pub fn b_sum(&self) -> &Float {
        &self.b_sum
    }
}

/// Run the full series from the k = 0 base case (the single-threaded path).
#[allow(clippy::cast_precision_loss)]
pub fn full_series_sum(
    plan: &PrecisionPlan,
    cache: Option<&MemoCache>,
    cancel: &TimeoutCancellationToken,
    observer: &dyn ProgressObserver,
    worker_index: usize,
) -> Result<PartialSum, PiError> {
    let total = plan.term_count;
    let mut state = TermState::base(plan.working_bits);
    while state.k() + 1 < total {
        cancel.check_cancelled()?;
        state.advance(&plan.c3_over_24, cache);
        observer.on_progress(&ProgressUpdate::new(
            worker_index,
            FULL_SERIES_STAGE,
            state.k() as f64 / total as f64,
            state.k(),
            total,
        ));
    }
    observer.on_progress(&ProgressUpdate::done(worker_index, FULL_SERIES_STAGE));
    let (a_sum, b_sum) = state.into_sums();
    Ok(PartialSum::new(a_sum, b_sum))
}

/// Compute one range's contribution independently of every other range.
///
/// Seeds the recurrence with the closed-form term at the range's first
/// index, then iterates the ordinary recurrence across the rest of the
/// range. Degenerate ranges contribute zero without touching the series.
#[allow(clippy::cast_precision_loss)]
pub fn range_partial_sum(
    range: Range,
    plan: &PrecisionPlan,
    cache: Option<&MemoCache>,
    cancel: &TimeoutCancellationToken,
    observer: &dyn ProgressObserver,
    worker_index: usize,
) -> Result<PartialSum, PiError> {
    if range.is_empty() {
        return Ok(PartialSum::zero(plan.working_bits));
    }

    cancel.check_cancelled()?;
    let seed = closed_form_term(range.initial_term(), plan)?;
    let mut state = TermState::seeded(range.initial_term(), seed, plan.working_bits);

    let total = range.len();
    while state.k() + 1 < range.final_term() {
        cancel.check_cancelled()?;
        state.advance(&plan.c3_over_24, cache);
        let completed = state.k() - range.initial_term();
        observer.on_progress(&ProgressUpdate::new(
            worker_index,
            RANGE_STAGE,
            completed as f64 / total as f64,
            completed,
            total,
        ));
    }
    observer.on_progress(&ProgressUpdate::done(worker_index, RANGE_STAGE));
    let (a_sum, b_sum) = state.into_sums();
    Ok(PartialSum::new(a_sum, b_sum))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_TIMEOUT;
    use crate::merge::merge_partial_sums;
    use crate::observer::NoOpObserver;

    fn context(digits: u64) -> (PrecisionPlan, TimeoutCancellationToken) {
        (
            PrecisionPlan::new(digits).unwrap(),
            TimeoutCancellationToken::new(DEFAULT_TIMEOUT),
        )
    }

    #[test]
    fn degenerate_range_contributes_zero() {
        let (plan, cancel) = context(20);
        let range = Range::new(4, 4).unwrap();
        let partial =
            range_partial_sum(range, &plan, None, &cancel, &NoOpObserver::new(), 0).unwrap();
        assert!(partial.a_sum().is_zero());
        assert!(partial.b_sum().is_zero());
    }

    #[test]
    fn split_ranges_reproduce_the_full_series() {
        let (plan, cancel) = context(120);
        let observer = NoOpObserver::new();
        assert!(plan.term_count >= 4, "need enough terms to split");

        let full = full_series_sum(&plan, None, &cancel, &observer, 0).unwrap();
        let pi_full = merge_partial_sums(&[full], &plan).unwrap();

        let mid = plan.term_count / 2;
        let low = Range::new(0, mid).unwrap();
        let high = Range::new(mid, plan.term_count).unwrap();
        let partials = vec![
            range_partial_sum(low, &plan, None, &cancel, &observer, 0).unwrap(),
            range_partial_sum(high, &plan, None, &cancel, &observer, 1).unwrap(),
        ];
        let pi_split = merge_partial_sums(&partials, &plan).unwrap();

        assert_eq!(pi_full.to_digit_string(), pi_split.to_digit_string());
    }

    #[test]
    fn cancelled_token_aborts_the_worker() {
        let (plan, cancel) = context(200);
        cancel.cancel();
        let range = Range::new(0, plan.term_count).unwrap();
        let result = range_partial_sum(range, &plan, None, &cancel, &NoOpObserver::new(), 0);
        assert!(matches!(result, Err(PiError::Cancelled)));
    }

    #[test]
    fn expired_deadline_aborts_the_worker() {
        let plan = PrecisionPlan::new(200).unwrap();
        let cancel = TimeoutCancellationToken::new(std::time::Duration::ZERO);
        let range = Range::new(0, plan.term_count).unwrap();
        let result = range_partial_sum(range, &plan, None, &cancel, &NoOpObserver::new(), 0);
        assert!(matches!(result, Err(PiError::Timeout(_))));
    }
}
