//! Numeral and word conversion.

use std::ops::RangeInclusive;

use branchwork_core::Digit;

/// Values accepted by [`to_roman_numeral`].
pub const ROMAN_RANGE: RangeInclusive<u8> = 1..=39;

const ROMAN_TENS: [&str; 4] = ["", "X", "XX", "XXX"];
const ROMAN_UNITS: [&str; 10] = ["", "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX"];

/// Error returned by [`to_roman_numeral`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum NumeralError {
    /// The value is outside [`ROMAN_RANGE`].
    #[display("{value} is outside the supported range 1..=39")]
    OutOfRange {
        /// The rejected value.
        value: u8,
    },
}

/// Converts a number in the range 1-39 to Roman numerals.
///
/// # Errors
///
/// Returns [`NumeralError::OutOfRange`] if `num` is outside [`ROMAN_RANGE`].
///
/// # Examples
///
/// ```
/// use branchwork::{NumeralError, to_roman_numeral};
///
/// assert_eq!(to_roman_numeral(1)?, "I");
/// assert_eq!(to_roman_numeral(10)?, "X");
/// assert_eq!(to_roman_numeral(26)?, "XXVI");
/// assert_eq!(to_roman_numeral(40), Err(NumeralError::OutOfRange { value: 40 }));
/// # Ok::<(), NumeralError>(())
/// ```
pub fn to_roman_numeral(num: u8) -> Result<String, NumeralError> {
    if !ROMAN_RANGE.contains(&num) {
        return Err(NumeralError::OutOfRange { value: num });
    }
    let tens = ROMAN_TENS[usize::from(num / 10)];
    let units = ROMAN_UNITS[usize::from(num % 10)];
    Ok(format!("{tens}{units}"))
}

/// Spells out a number string one character at a time.
///
/// Digits become their English words, `.` and `,` become `point`, and `-`
/// becomes `minus`. Words are separated by single spaces. Any other character
/// becomes an empty word, which still takes its place between separators.
///
/// # Examples
///
/// ```
/// use branchwork::number_to_words;
///
/// assert_eq!(number_to_words("1"), "one");
/// assert_eq!(number_to_words("-10"), "minus one zero");
/// assert_eq!(number_to_words("10,5"), "one zero point five");
/// assert_eq!(number_to_words("1950.2"), "one nine five zero point two");
/// ```
#[must_use]
pub fn number_to_words(number_str: &str) -> String {
    number_str
        .chars()
        .map(char_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn char_word(c: char) -> &'static str {
    match c {
        '.' | ',' => "point",
        '-' => "minus",
        _ => Digit::from_char(c).map_or("", Digit::word),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roman_examples() {
        let cases = [
            (1, "I"),
            (2, "II"),
            (4, "IV"),
            (5, "V"),
            (9, "IX"),
            (10, "X"),
            (14, "XIV"),
            (20, "XX"),
            (26, "XXVI"),
            (30, "XXX"),
            (39, "XXXIX"),
        ];
        for (num, expected) in cases {
            assert_eq!(to_roman_numeral(num).unwrap(), expected, "{num}");
        }
    }

    #[test]
    fn test_roman_out_of_range() {
        assert_eq!(
            to_roman_numeral(0),
            Err(NumeralError::OutOfRange { value: 0 })
        );
        let err = to_roman_numeral(255).unwrap_err();
        assert_eq!(err.to_string(), "255 is outside the supported range 1..=39");
    }

    #[test]
    fn test_words_examples() {
        assert_eq!(number_to_words("10"), "one zero");
        assert_eq!(number_to_words("10.5"), "one zero point five");
        assert_eq!(
            number_to_words("-0123456789"),
            "minus zero one two three four five six seven eight nine"
        );
    }

    #[test]
    fn test_words_edge_cases() {
        assert_eq!(number_to_words(""), "");
        assert_eq!(number_to_words("1a2"), "one  two");
        assert_eq!(number_to_words("x"), "");
    }
}
