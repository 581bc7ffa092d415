//! Generic squaring over numeric-like types
//!
//! The capability set is deliberately minimal: a type qualifies if it can
//! be multiplied by itself and the product has the same type. Integers
//! and floats both satisfy it out of the box.

use std::ops::Mul;

/// Capability marker for types that support self-multiplication.
///
/// Blanket-implemented for every `Copy` type whose `Mul` produces the
/// same type, so callers never implement it by hand.
pub trait Numeric: Mul<Output = Self> + Copy {}

impl<T> Numeric for T where T: Mul<Output = T> + Copy {}

/// Multiply a value by itself.
///
/// # Examples
///
/// ```
/// use modern_demo::numeric::square;
///
/// assert_eq!(square(5), 25);
/// assert!((square(3.14_f64) - 9.8596).abs() < 1e-9);
/// ```
pub fn square<T: Numeric>(value: T) -> T {
    value * value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_integer() {
        assert_eq!(square(5), 25);
        assert_eq!(square(0), 0);
        assert_eq!(square(-4), 16);
    }

    #[test]
    fn test_square_float() {
        // f64 comparison with representation-appropriate tolerance
        assert!((square(3.14_f64) - 9.8596).abs() < 1e-9);
        assert!((square(0.5_f64) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_square_preserves_type() {
        let n: i64 = square(3_i64);
        assert_eq!(n, 9);
        let f: f32 = square(2.0_f32);
        assert_eq!(f, 4.0);
    }
}
