//! Merge partial sums and finalize the π approximation.

use rug::{Float, Integer};

use crate::constants::{FINAL_FACTOR, LINEAR_COEFFICIENT, SQRT_ARGUMENT, TERM_COEFFICIENT};
use crate::error::PiError;
use crate::precision::PrecisionPlan;
use crate::summation::PartialSum;
use crate::value::PiValue;

/// Combine partial sums into π at the plan's requested precision.
///
/// Summation is commutative and associative, so arrival order is
/// irrelevant. Fails with `DegenerateResult` when the series total is zero
/// (e.g. nothing but degenerate ranges), which would otherwise divide to
/// infinity.
pub fn merge_partial_sums(partials: &[PartialSum], plan: &PrecisionPlan) -> Result<PiValue, PiError> {
    let bits = plan.working_bits;

    let mut a_sum = Float::new(bits);
    let mut b_sum = Float::new(bits);
    for partial in partials {
        a_sum += partial.a_sum();
        b_sum += partial.b_sum();
    }

    let mut total = Float::with_val(bits, &a_sum * &Integer::from(LINEAR_COEFFICIENT));
    total += Float::with_val(bits, &b_sum * &Integer::from(TERM_COEFFICIENT));
    if total.is_zero() {
        return Err(PiError::DegenerateResult);
    }

    let sqrt = Float::with_val(bits, SQRT_ARGUMENT).sqrt();
    let mut pi = Float::with_val(bits, &sqrt * &Integer::from(FINAL_FACTOR));
    pi /= &total;

    Ok(PiValue::new(pi, plan.requested_digits))
}
