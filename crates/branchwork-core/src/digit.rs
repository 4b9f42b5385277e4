//! Decimal digit representation.

use std::fmt::{self, Display};

/// A decimal digit in the range 0-9.
///
/// Each variant corresponds to exactly one digit value, so code holding a
/// `Digit` never has to re-check the range.
///
/// # Examples
///
/// ```
/// use branchwork_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
/// assert_eq!(digit.to_char(), '5');
/// assert_eq!(digit.word(), "five");
///
/// assert_eq!(Digit::from_char('7'), Some(Digit::D7));
/// assert_eq!(Digit::from_char('x'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 0.
    D0 = 0,
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

const WORDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

impl Digit {
    /// Array containing all digits from 0 to 9, in ascending order.
    pub const ALL: [Self; 10] = [
        Self::D0,
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a value in the range 0-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is greater than 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use branchwork_core::Digit;
    ///
    /// assert_eq!(Digit::from_value(0), Digit::D0);
    /// assert_eq!(Digit::from_value(9), Digit::D9);
    /// ```
    ///
    /// ```should_panic
    /// use branchwork_core::Digit;
    ///
    /// // This will panic
    /// let _ = Digit::from_value(10);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match Self::ALL.get(usize::from(value)) {
            Some(digit) => *digit,
            None => panic!("Invalid digit value: {value}"),
        }
    }

    /// Creates a digit from an ASCII digit character.
    ///
    /// Returns `None` for any character outside `'0'..='9'`.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let value = u8::try_from(c.to_digit(10)?).ok()?;
        Some(Self::from_value(value))
    }

    /// Returns the numeric value of this digit (0-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns the ASCII character for this digit.
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.value()) as char
    }

    /// Returns the lowercase English word for this digit.
    ///
    /// # Examples
    ///
    /// ```
    /// use branchwork_core::Digit;
    ///
    /// assert_eq!(Digit::D0.word(), "zero");
    /// assert_eq!(Digit::D9.word(), "nine");
    /// ```
    #[must_use]
    pub const fn word(self) -> &'static str {
        WORDS[self as usize]
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> char {
        digit.to_char()
    }
}
