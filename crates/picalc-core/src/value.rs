//! The π result value and its decimal rendering.

use std::fmt;

use rug::ops::Pow;
use rug::{Float, Integer};

/// A computed π approximation.
///
/// Carries the full working-precision float together with the digit count
/// the caller asked for; rendering truncates to exactly that many
/// significant digits (the guard digits absorb the rounding).
#[derive(Debug, Clone)]
pub struct PiValue {
    value: Float,
    digits: u64,
}

impl PiValue {
    /// Wrap a finished value at the requested digit count.
    #[must_use]
    pub fn new(value: Float, digits: u64) -> Self {
        Self { value, digits }
    }

    /// Requested number of significant digits.
    #[must_use]
    pub fn digits(&self) -> u64 {
        self.digits
    }

    /// The underlying working-precision float.
    #[must_use]
    pub fn as_float(&self) -> &Float {
        &self.value
    }

    /// Render as a decimal string with exactly `digits` significant digits,
    /// truncated: 10 digits yield `3.141592653`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_digit_string(&self) -> String {
        // Shift the fraction into the integer part and truncate; π lies in
        // [3, 4), so the scaled integer has exactly `digits` digits.
        let scale = Integer::from(10u32).pow((self.digits - 1) as u32);
        let scaled = Float::with_val(self.value.prec(), &self.value * &scale).trunc();
        let Some(int) = scaled.to_integer() else {
            return String::new();
        };
        let rendered = int.to_string();
        if self.digits == 1 {
            return rendered;
        }
        format!("{}.{}", &rendered[..1], &rendered[1..])
    }
}

impl fmt::Display for PiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_digit_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(digits: u64) -> PiValue {
        // A float accurate well past any digit count used in these tests.
        let float = Float::with_val(256, 3.141_592_653_589_793_1_f64);
        PiValue::new(float, digits)
    }

    #[test]
    fn one_digit_has_no_point() {
        assert_eq!(value(1).to_digit_string(), "3");
    }

    #[test]
    fn two_digits() {
        assert_eq!(value(2).to_digit_string(), "3.1");
    }

    #[test]
    fn truncates_rather_than_rounds() {
        // The 11th significant digit of π is 5; truncation keeps ...653.
        assert_eq!(value(10).to_digit_string(), "3.141592653");
    }

    #[test]
    fn display_matches_digit_string() {
        let v = value(6);
        assert_eq!(v.to_string(), v.to_digit_string());
        assert_eq!(v.to_string(), "3.14159");
    }

    #[test]
    fn accessors() {
        let v = value(10);
        assert_eq!(v.digits(), 10);
        assert_eq!(v.as_float().prec(), 256);
    }
}
