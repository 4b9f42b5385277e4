//! Triangle classification by side lengths.

use std::ops::Add;

/// Returns `true` if the three lengths form a non-degenerate triangle.
///
/// Every side must be strictly shorter than the sum of the other two, which
/// also rules out zero and negative lengths.
///
/// # Examples
///
/// ```
/// use branchwork::is_triangle;
///
/// assert!(is_triangle(3, 4, 5));
/// assert!(!is_triangle(1, 2, 3)); // degenerate
/// assert!(!is_triangle(3, 0, 3));
/// ```
#[must_use]
pub fn is_triangle<T>(a: T, b: T, c: T) -> bool
where
    T: Copy + PartialOrd + Add<Output = T>,
{
    a < b + c && b < a + c && c < a + b
}

/// Returns `true` if the three lengths form a triangle with at least two equal sides.
///
/// Equilateral triangles count as isosceles.
///
/// # Examples
///
/// ```
/// use branchwork::is_isosceles_triangle;
///
/// assert!(is_isosceles_triangle(2, 3, 2));
/// assert!(is_isosceles_triangle(3, 2, 2));
/// assert!(!is_isosceles_triangle(2, 2, 5)); // not a triangle
/// assert!(!is_isosceles_triangle(3, 4, 5)); // no equal sides
/// ```
#[must_use]
pub fn is_isosceles_triangle<T>(a: T, b: T, c: T) -> bool
where
    T: Copy + PartialOrd + Add<Output = T>,
{
    is_triangle(a, b, c) && (a == b || b == c || a == c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_examples() {
        assert!(!is_isosceles_triangle(1, 2, 3));
        assert!(!is_isosceles_triangle(3, 1, 2));
        assert!(is_isosceles_triangle(2, 3, 2));
        assert!(is_isosceles_triangle(3, 2, 2));
        assert!(is_isosceles_triangle(2, 2, 3));
        assert!(!is_isosceles_triangle(2, 2, 5));
        assert!(!is_isosceles_triangle(3, 0, 3));
    }

    #[test]
    fn test_valid_scalene_is_not_isosceles() {
        assert!(is_triangle(3, 4, 5));
        assert!(!is_isosceles_triangle(3, 4, 5));
        assert!(!is_isosceles_triangle(2.5, 3.0, 4.0));
    }

    #[test]
    fn test_equilateral_and_fractional() {
        assert!(is_isosceles_triangle(1, 1, 1));
        assert!(is_isosceles_triangle(0.5, 0.5, 0.9));
        assert!(!is_isosceles_triangle(0.5, 0.5, 1.0));
    }

    #[test]
    fn test_negative_sides_rejected() {
        assert!(!is_triangle(-1, 5, 5));
        assert!(!is_isosceles_triangle(-2, -2, -2));
    }
}
