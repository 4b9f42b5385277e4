//! Decimal digit sequences.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::Digit;

/// The decimal digits of a non-negative integer, most significant first.
///
/// Order matters and duplicates are allowed. Zero is the single digit `0`;
/// numbers never carry leading zeros, but sequences parsed from a string keep
/// whatever the string contained.
///
/// # Examples
///
/// ```
/// use branchwork_core::{Digit, Digits};
///
/// let digits = Digits::from_number(907);
/// assert_eq!(digits.as_slice(), [Digit::D9, Digit::D0, Digit::D7]);
/// assert_eq!(digits.to_number(), Some(907));
///
/// // Sign is ignored for signed inputs
/// assert_eq!(Digits::from_signed(-42), Digits::from_number(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digits {
    digits: Vec<Digit>,
}

/// Error returned when parsing [`Digits`] from a string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DigitsError {
    /// The string contained no characters.
    #[display("digit string is empty")]
    Empty,
    /// The string contained a character other than `'0'..='9'`.
    #[display("invalid digit {found:?} at index {index}")]
    InvalidDigit {
        /// Character index of the offending character.
        index: usize,
        /// The offending character.
        found: char,
    },
}

impl Digits {
    /// Returns the digits of `number`.
    #[must_use]
    pub fn from_number(mut number: u64) -> Self {
        let mut digits = Vec::new();
        loop {
            #[expect(clippy::cast_possible_truncation)]
            let last = (number % 10) as u8;
            digits.push(Digit::from_value(last));
            number /= 10;
            if number == 0 {
                break;
            }
        }
        digits.reverse();
        Self { digits }
    }

    /// Returns the digits of the magnitude of `number`.
    #[must_use]
    pub fn from_signed(number: i64) -> Self {
        Self::from_number(number.unsigned_abs())
    }

    /// Returns the digits as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Digit] {
        &self.digits
    }

    /// Returns the digits as a mutable slice, for in-place rearrangement.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [Digit] {
        &mut self.digits
    }

    /// Returns the number of digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns `true` if there are no digits.
    ///
    /// Sequences built from numbers always hold at least one digit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns `true` if `digit` occurs anywhere in the sequence.
    #[must_use]
    pub fn contains(&self, digit: Digit) -> bool {
        self.digits.contains(&digit)
    }

    /// Returns an iterator over the digits, most significant first.
    pub fn iter(&self) -> std::slice::Iter<'_, Digit> {
        self.digits.iter()
    }

    /// Reassembles the digits into a number.
    ///
    /// Returns `None` if the value does not fit in a `u64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use branchwork_core::Digits;
    ///
    /// let digits: Digits = "0042".parse()?;
    /// assert_eq!(digits.to_number(), Some(42));
    ///
    /// let huge: Digits = "99999999999999999999".parse()?;
    /// assert_eq!(huge.to_number(), None);
    /// # Ok::<(), branchwork_core::DigitsError>(())
    /// ```
    #[must_use]
    pub fn to_number(&self) -> Option<u64> {
        self.digits.iter().try_fold(0_u64, |acc, digit| {
            acc.checked_mul(10)?.checked_add(u64::from(digit.value()))
        })
    }
}

impl FromStr for Digits {
    type Err = DigitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DigitsError::Empty);
        }
        let digits = s
            .chars()
            .enumerate()
            .map(|(index, found)| {
                Digit::from_char(found).ok_or(DigitsError::InvalidDigit { index, found })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { digits })
    }
}

impl Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            Display::fmt(digit, f)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Digits {
    type Item = &'a Digit;
    type IntoIter = std::slice::Iter<'a, Digit>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Digits {
    type Item = Digit;
    type IntoIter = std::vec::IntoIter<Digit>;

    fn into_iter(self) -> Self::IntoIter {
        self.digits.into_iter()
    }
}
