//! Parallel task execution with first-error-wins semantics.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::ThreadPoolBuilder;

use picalc_core::PiError;

/// Execute tasks on a dedicated pool, returning either every result or the
/// first real failure.
///
/// When a task fails, an abort flag is raised so tasks that have not
/// started yet bail out as `Cancelled`; those secondary cancellations are
/// filtered so the error the caller sees is the one that caused the abort.
/// Merging a subset of results is therefore unreachable: the output is all
/// partial results or an error, never a mix.
pub fn execute_all<T, F>(tasks: Vec<F>, max_concurrency: usize) -> Result<Vec<T>, PiError>
where
    T: Send,
    F: FnOnce(&AtomicBool) -> Result<T, PiError> + Send,
{
    let pool = ThreadPoolBuilder::new()
        .num_threads(max_concurrency)
        .build()
        .map_err(|e| PiError::Worker(format!("failed to create thread pool: {e}")))?;

    let abort_flag = Arc::new(AtomicBool::new(false));

    let results: Vec<Result<T, PiError>> = pool.install(|| {
        use rayon::iter::{IntoParallelIterator, ParallelIterator};
        tasks
            .into_par_iter()
            .map(|task| {
                if abort_flag.load(Ordering::Relaxed) {
                    return Err(PiError::Cancelled);
                }

                let result = task(&abort_flag);

                if result.is_err() {
                    abort_flag.store(true, Ordering::Relaxed);
                }

                result
            })
            .collect()
    });

    let mut collected = Vec::with_capacity(results.len());
    let mut first_error: Option<PiError> = None;
    let mut cancelled = false;

    for result in results {
        match result {
            Ok(value) => collected.push(value),
            Err(PiError::Cancelled) => cancelled = true,
            Err(e) => {
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
    }

    // A real failure outranks the bail-outs it caused, regardless of the
    // order tasks happened to finish in.
    if let Some(err) = first_error {
        return Err(err);
    }
    if cancelled {
        return Err(PiError::Cancelled);
    }

    Ok(collected)
}
