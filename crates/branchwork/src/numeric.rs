//! Numeric predicates.

use branchwork_core::{Digit, Digits};

/// Returns `true` if `number` is zero or positive.
///
/// Only a comparison against the type's zero value is used. For floats,
/// `-0.0` counts as zero and `NaN` is not positive.
///
/// # Examples
///
/// ```
/// use branchwork::is_positive;
///
/// assert!(is_positive(10));
/// assert!(is_positive(0));
/// assert!(!is_positive(-5));
/// assert!(is_positive(-0.0));
/// assert!(!is_positive(f64::NAN));
/// ```
#[must_use]
pub fn is_positive<T>(number: T) -> bool
where
    T: PartialOrd + Default,
{
    number >= T::default()
}

/// Returns the greatest of three values.
///
/// Values are compared pairwise with `>=` in argument order, so ties resolve
/// to the earliest argument.
///
/// # Examples
///
/// ```
/// use branchwork::max_of_three;
///
/// assert_eq!(max_of_three(1, 2, 3), 3);
/// assert_eq!(max_of_three(-5, 0, 5), 5);
/// assert_eq!(max_of_three(-0.1, 0.0, 0.2), 0.2);
/// ```
#[must_use]
pub fn max_of_three<T>(a: T, b: T, c: T) -> T
where
    T: PartialOrd,
{
    if a >= b && a >= c {
        a
    } else if b >= a && b >= c {
        b
    } else {
        c
    }
}

/// Returns `true` if `digit` occurs in the decimal representation of `number`.
///
/// The sign of `number` is ignored.
///
/// # Examples
///
/// ```
/// use branchwork::{Digit, contains_digit};
///
/// assert!(contains_digit(123_450, Digit::D5));
/// assert!(contains_digit(123_450, Digit::D0));
/// assert!(!contains_digit(12_345, Digit::D0));
/// assert!(!contains_digit(12_345, Digit::D6));
/// ```
#[must_use]
pub fn contains_digit(number: i64, digit: Digit) -> bool {
    Digits::from_signed(number).contains(digit)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_is_positive() {
        assert!(is_positive(10_i64));
        assert!(is_positive(0_i64));
        assert!(!is_positive(-5_i64));
        assert!(!is_positive(i64::MIN));
        assert!(is_positive(0.5_f64));
        assert!(!is_positive(-0.5_f64));
        // even/odd has nothing to do with sign
        assert!(is_positive(7_i64));
        assert!(!is_positive(-4_i64));
    }

    #[test]
    fn test_max_of_three_examples() {
        assert_eq!(max_of_three(1, 2, 3), 3);
        assert_eq!(max_of_three(3, 2, 1), 3);
        assert_eq!(max_of_three(2, 3, 1), 3);
        assert_eq!(max_of_three(-5, 0, 5), 5);
        assert_eq!(max_of_three(7, 7, 7), 7);
    }

    #[test]
    fn test_max_of_three_ties_prefer_earliest() {
        // ordered by key only, so equal keys with different labels tie
        #[derive(Debug)]
        struct Keyed(i32, &'static str);
        impl PartialEq for Keyed {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        let max = max_of_three(Keyed(5, "a"), Keyed(5, "b"), Keyed(1, "c"));
        assert_eq!(max.1, "a");
        let max = max_of_three(Keyed(1, "a"), Keyed(5, "b"), Keyed(5, "c"));
        assert_eq!(max.1, "b");
        let max = max_of_three(Keyed(1, "a"), Keyed(2, "b"), Keyed(5, "c"));
        assert_eq!(max.1, "c");
    }

    #[test]
    fn test_contains_digit() {
        assert!(contains_digit(123_450, Digit::D1));
        assert!(contains_digit(0, Digit::D0));
        assert!(contains_digit(-709, Digit::D7));
        assert!(!contains_digit(-709, Digit::D1));
        assert!(contains_digit(i64::MIN, Digit::D8));
    }

    proptest! {
        #[test]
        fn prop_max_of_three_is_upper_bound(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
            let max = max_of_three(a, b, c);
            prop_assert!(max >= a && max >= b && max >= c);
            prop_assert!(max == a || max == b || max == c);
        }

        #[test]
        fn prop_contains_digit_matches_rendering(n in any::<i64>(), d in 0_u8..10) {
            let digit = Digit::from_value(d);
            let expected = n.to_string().contains(digit.to_char());
            prop_assert_eq!(contains_digit(n, digit), expected);
        }
    }
}
