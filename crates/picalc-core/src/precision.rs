//! Precision planning: how many series terms a digit request needs.
//!
//! The plan carries the working precision (requested digits plus guard
//! digits, mapped to binary precision) and the `C³/24` constant evaluated at
//! that precision. One plan feeds both the single-threaded and the
//! range-partitioned path, so both iterate the same number of terms.

use rug::ops::Pow;
use rug::{Float, Integer};

use crate::constants::{
    CHUDNOVSKY_C, CLOSED_FORM_PRECISION_BOOST, GUARD_DIGITS, PRECISION_SLACK_BITS,
};
use crate::error::PiError;

/// Everything a computation path needs to know about a digit request.
#[derive(Debug, Clone)]
pub struct PrecisionPlan {
    /// Digits the caller asked for.
    pub requested_digits: u64,
    /// Requested digits plus guard digits; all arithmetic runs at this
    /// decimal precision.
    pub working_digits: u64,
    /// Binary precision corresponding to `working_digits`.
    pub working_bits: u32,
    /// Number of series terms, shared by both computation paths.
    pub term_count: u64,
    /// C³/24 evaluated at `working_bits`.
    pub c3_over_24: Float,
}

impl PrecisionPlan {
    /// Plan a computation for `requested_digits` significant digits.
    pub fn new(requested_digits: u64) -> Result<Self, PiError> {
        if requested_digits == 0 {
            return Err(PiError::InvalidPrecision(0));
        }

        let working_digits = requested_digits + GUARD_DIGITS;
        let working_bits = bits_for_digits(working_digits);
        let c3_over_24 = c3_over_24(working_bits);

        // digits_per_term = log10(C³/24 / 72) ≈ 14.18
        let digits_per_term = Float::with_val(working_bits, &c3_over_24 / 72u32).log10();
        let terms = Float::with_val(working_bits, working_digits) / &digits_per_term;
        let term_count = terms
            .ceil()
            .to_integer()
            .and_then(|i| i.to_u64())
            .ok_or(PiError::InvalidPrecision(requested_digits))?
            + 1;

        Ok(Self {
            requested_digits,
            working_digits,
            working_bits,
            term_count,
            c3_over_24,
        })
    }

    /// Binary precision for the closed-form starting term of a range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn boosted_bits(&self) -> u32 {
        (f64::from(self.working_bits) * CLOSED_FORM_PRECISION_BOOST).ceil() as u32
    }
}

/// Map a decimal digit count to binary precision, with slack so the final
/// decimal truncation never lands on an uncertain digit.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn bits_for_digits(digits: u64) -> u32 {
    (digits as f64 * std::f64::consts::LOG2_10).ceil() as u32 + PRECISION_SLACK_BITS
}

/// C³/24 at the given binary precision.
#[must_use]
pub fn c3_over_24(bits: u32) -> Float {
    let c_cubed = Integer::from(CHUDNOVSKY_C).pow(3);
    let mut value = Float::with_val(bits, c_cubed);
    value /= 24u32;
    value
}
