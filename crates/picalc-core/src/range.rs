//! Term ranges and deterministic work partitioning.

use crate::error::PiError;

/// A half-open range of series terms `[initial_term, final_term)`.
///
/// `initial_term == final_term` is valid and denotes zero contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    initial_term: u64,
    final_term: u64,
}

impl Range {
    /// Create a range, rejecting inverted bounds.
    pub fn new(initial_term: u64, final_term: u64) -> Result<Self, PiError> {
        if final_term < initial_term {
            return Err(PiError::InvalidRangeBounds {
                initial: initial_term,
                end: final_term,
            });
        }
        Ok(Self {
            initial_term,
            final_term,
        })
    }

    /// First term of the range.
    #[must_use]
    pub fn initial_term(&self) -> u64 {
        self.initial_term
    }

    /// One past the last term of the range.
    #[must_use]
    pub fn final_term(&self) -> u64 {
        self.final_term
    }

    /// Number of terms in the range.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.final_term - self.initial_term
    }

    /// Whether the range contributes no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.initial_term == self.final_term
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.initial_term, self.final_term)
    }
}

/// Split `term_count` terms into `number_of_ranges` contiguous ranges.
///
/// Boundary i is `floor(i * term_count / n)` with the first boundary pinned
/// to 0 and the last to `term_count`, and each range starting exactly where
/// the previous one ended. The ranges are therefore pairwise disjoint and
/// their union is exactly `[0, term_count)`; trailing ranges may be smaller
/// or empty when the division does not come out even.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn partition_terms(term_count: u64, number_of_ranges: usize) -> Result<Vec<Range>, PiError> {
    if number_of_ranges == 0 {
        return Err(PiError::InvalidRangeCount(0));
    }

    let range_size = term_count as f64 / number_of_ranges as f64;
    let mut ranges = Vec::with_capacity(number_of_ranges);
    let mut start = 0u64;
    for i in 1..=number_of_ranges {
        let end = if i == number_of_ranges {
            term_count
        } else {
            ((i as f64 * range_size).floor() as u64).clamp(start, term_count)
        };
        ranges.push(Range::new(start, end)?);
        start = end;
    }

    debug_assert_eq!(start, term_count);
    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_exhaustive(ranges: &[Range], term_count: u64) {
        let mut cursor = 0;
        for range in ranges {
            assert_eq!(range.initial_term(), cursor, "gap or overlap at {range}");
            cursor = range.final_term();
        }
        assert_eq!(cursor, term_count);
    }

    #[test]
    fn inverted_bounds_rejected() {
        assert!(matches!(
            Range::new(5, 3),
            Err(PiError::InvalidRangeBounds { initial: 5, end: 3 })
        ));
    }

    #[test]
    fn degenerate_range_is_valid() {
        let range = Range::new(7, 7).unwrap();
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
    }

    #[test]
    fn zero_ranges_rejected() {
        assert!(matches!(
            partition_terms(100, 0),
            Err(PiError::InvalidRangeCount(0))
        ));
    }

    #[test]
    fn single_range_covers_everything() {
        let ranges = partition_terms(42, 1).unwrap();
        assert_eq!(ranges, vec![Range::new(0, 42).unwrap()]);
    }

    #[test]
    fn even_split() {
        let ranges = partition_terms(12, 4).unwrap();
        assert_eq!(ranges.len(), 4);
        assert!(ranges.iter().all(|r| r.len() == 3));
        assert_exhaustive(&ranges, 12);
    }

    #[test]
    fn uneven_split_stays_contiguous() {
        let ranges = partition_terms(10, 3).unwrap();
        assert_eq!(ranges.len(), 3);
        assert_exhaustive(&ranges, 10);
    }

    #[test]
    fn more_ranges_than_terms() {
        let ranges = partition_terms(3, 8).unwrap();
        assert_eq!(ranges.len(), 8);
        assert_exhaustive(&ranges, 3);
        assert!(ranges.iter().any(Range::is_empty));
    }

    #[test]
    fn zero_terms_yield_empty_ranges() {
        let ranges = partition_terms(0, 4).unwrap();
        assert_eq!(ranges.len(), 4);
        assert!(ranges.iter().all(Range::is_empty));
        assert_exhaustive(&ranges, 0);
    }

    #[test]
    fn display_format() {
        assert_eq!(Range::new(3, 9).unwrap().to_string(), "[3, 9)");
    }
}
