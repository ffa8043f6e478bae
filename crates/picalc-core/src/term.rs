//! The per-term recurrence and the closed-form starting term.
//!
//! The series is Σ (13591409 + 545140134·k)·a_k with
//! a_k = (-1)^k (6k)! / ((k!)³ (3k)! C^(3k)). Consecutive terms are related
//! by a short multiplicative update, which is what both computation paths
//! iterate; only a range starting at k₀ > 0 needs the factorial form once.

use rug::ops::Pow;
use rug::{Float, Integer};

use crate::constants::CHUDNOVSKY_C;
use crate::error::PiError;
use crate::memo::{MemoCache, MemoKey};
use crate::precision::PrecisionPlan;

/// Mutable state of the recurrence over one contiguous range of terms.
///
/// Owned exclusively by the worker processing that range; mutated once per
/// iteration.
pub struct TermState {
    k: u64,
    a_k: Float,
    a_sum: Float,
    b_sum: Float,
}

impl TermState {
    /// State at the k = 0 base case: a₀ = 1, ΣA = 1, ΣB = 0.
    #[must_use]
    pub fn base(working_bits: u32) -> Self {
        Self {
            k: 0,
            a_k: Float::with_val(working_bits, 1),
            a_sum: Float::with_val(working_bits, 1),
            b_sum: Float::new(working_bits),
        }
    }

    /// State seeded at an arbitrary k₀ with a precomputed starting term.
    ///
    /// The seed keeps its (boosted) precision; the sums are carried at
    /// working precision.
    #[must_use]
    pub fn seeded(initial_term: u64, seed: Float, working_bits: u32) -> Self {
        let a_sum = Float::with_val(working_bits, &seed);
        let b_sum = Float::with_val(working_bits, &seed * &Integer::from(initial_term));
        Self {
            k: initial_term,
            a_k: seed,
            a_sum,
            b_sum,
        }
    }

    /// Current term index.
    #[must_use]
    pub fn k(&self) -> u64 {
        self.k
    }

    /// Current term value.
    #[must_use]
    pub fn a_k(&self) -> &Float {
        &self.a_k
    }

    /// Advance one term: compute a_{k+1} (through the cache when enabled)
    /// and fold it into both running sums.
    pub fn advance(&mut self, c3_over_24: &Float, cache: Option<&MemoCache>) {
        let k = self.k + 1;
        let a_k = match cache {
            Some(cache) => {
                let key = MemoKey::new(&self.a_k, k, c3_over_24);
                cache.get_or_compute(key, || next_term(&self.a_k, k, c3_over_24))
            }
            None => next_term(&self.a_k, k, c3_over_24),
        };
        self.a_sum += &a_k;
        self.b_sum += Float::with_val(self.b_sum.prec(), &a_k * &Integer::from(k));
        self.a_k = a_k;
        self.k = k;
    }

    /// Consume the state, yielding the accumulated `(ΣA, Σk·A)` pair.
    #[must_use]
    pub fn into_sums(self) -> (Float, Float) {
        (self.a_sum, self.b_sum)
    }
}

/// One multiplicative recurrence step:
/// a_k = a_{k-1} · −((6k−5)(2k−1)(6k−1)) / (k³ · C³/24).
///
/// The integer factors are exact; the quotient is formed at working
/// precision, so intermediates are never truncated below it.
#[must_use]
pub fn next_term(previous: &Float, k: u64, c3_over_24: &Float) -> Float {
    let bits = c3_over_24.prec();
    let numerator =
        -(Integer::from(6 * k - 5) * Integer::from(2 * k - 1) * Integer::from(6 * k - 1));
    let k_cubed = Integer::from(k).pow(3);
    let mut a_k = Float::with_val(bits, previous * &numerator);
    a_k /= Float::with_val(bits, c3_over_24 * &k_cubed);
    a_k
}

/// Closed-form term value at an arbitrary offset:
/// a_k₀ = sign(k₀) · (6k₀)! / ((k₀!)³ (3k₀)! C^(3k₀)).
///
/// The factorials are exact integers; the single division runs at boosted
/// precision because the division chain loses relative precision faster
/// than the iterative recurrence does.
pub fn closed_form_term(initial_term: u64, plan: &PrecisionPlan) -> Result<Float, PiError> {
    let six_k = initial_term
        .checked_mul(6)
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| oversized(initial_term))?;
    let k = six_k / 6;
    let three_k = six_k / 2;

    let six_factorial = Integer::from(Integer::factorial(six_k));
    let k_factorial = Integer::from(Integer::factorial(k));
    let denominator = k_factorial.pow(3)
        * Integer::from(Integer::factorial(three_k))
        * Integer::from(CHUDNOVSKY_C).pow(three_k);

    let boosted = plan.boosted_bits();
    let mut a_k = Float::with_val(boosted, six_factorial);
    if initial_term % 2 == 1 {
        a_k = -a_k;
    }
    a_k /= Float::with_val(boosted, denominator);
    Ok(a_k)
}

fn oversized(term: u64) -> PiError {
    PiError::Worker(format!("term index {term} exceeds factorial range"))
}
