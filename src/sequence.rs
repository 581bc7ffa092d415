//! Number sequence and the lazy even-squares pipeline
//!
//! The source sequence is the integers 1..=10, built once and never
//! mutated. The derived sequence filters to even values and maps each to
//! its square, lazily, preserving source order.

use crate::numeric::square;

/// Build the fixed source sequence 1..=10.
pub fn source_numbers() -> Vec<i32> {
    (1..=10).collect()
}

/// Lazily filter a sequence to its even values and square each one.
///
/// Odd values are omitted, not replaced; the relative order of the
/// qualifying values is preserved. Nothing is computed until the
/// returned iterator is driven.
///
/// # Examples
///
/// ```
/// use modern_demo::sequence::even_squares;
///
/// let squares: Vec<i32> = even_squares(1..=10).collect();
/// assert_eq!(squares, [4, 16, 36, 64, 100]);
/// ```
pub fn even_squares<I>(numbers: I) -> impl Iterator<Item = i32>
where
    I: IntoIterator<Item = i32>,
{
    numbers.into_iter().filter(|n| n % 2 == 0).map(square)
}

/// Render a sequence as a row of space-terminated values.
///
/// Every value, including the last, is followed by a single space:
/// `1 2 3 ` for `[1, 2, 3]`.
pub fn spaced_row<I>(values: I) -> String
where
    I: IntoIterator<Item = i32>,
{
    use std::fmt::Write;

    let mut row = String::new();
    for value in values {
        // Writing to a String cannot fail
        let _ = write!(row, "{} ", value);
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_numbers_fixed() {
        assert_eq!(source_numbers(), [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_even_squares_exact() {
        let result: Vec<i32> = even_squares(source_numbers()).collect();
        assert_eq!(result, [4, 16, 36, 64, 100]);
    }

    #[test]
    fn test_even_squares_preserves_order() {
        // Qualifying elements keep their relative source order
        let result: Vec<i32> = even_squares(vec![6, 3, 2, 8]).collect();
        assert_eq!(result, [36, 4, 64]);
    }

    #[test]
    fn test_even_squares_empty_when_all_odd() {
        let result: Vec<i32> = even_squares(vec![1, 3, 5]).collect();
        assert!(result.is_empty());
    }

    #[test]
    fn test_even_squares_is_restartable() {
        // The pipeline carries no state of its own; rebuilding it over
        // the same source yields the same elements
        let first: Vec<i32> = even_squares(source_numbers()).collect();
        let second: Vec<i32> = even_squares(source_numbers()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_spaced_row_trailing_space() {
        assert_eq!(spaced_row(vec![1, 2, 3]), "1 2 3 ");
        assert_eq!(spaced_row(vec![]), "");
    }

    #[test]
    fn test_spaced_row_full_source() {
        assert_eq!(spaced_row(source_numbers()), "1 2 3 4 5 6 7 8 9 10 ");
    }
}
