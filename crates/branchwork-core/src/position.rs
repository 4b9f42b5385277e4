//! Chessboard square coordinates.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A square on an 8×8 chessboard.
///
/// Both coordinates are 1-based: `x` is the file (1 = `a`, 8 = `h`) and `y`
/// is the rank (1-8).
///
/// # Examples
///
/// ```
/// use branchwork_core::Position;
///
/// let pos = Position::new(1, 1);
/// assert_eq!(pos.to_string(), "a1");
///
/// let pos: Position = "h8".parse()?;
/// assert_eq!((pos.x(), pos.y()), (8, 8));
///
/// assert!(Position::try_new(0, 4).is_err());
/// # Ok::<(), branchwork_core::PositionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

/// Error returned when a [`Position`] cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PositionError {
    /// A coordinate was outside the range 1-8.
    #[display("square ({x}, {y}) is off the board")]
    OutOfRange {
        /// The requested file.
        x: u8,
        /// The requested rank.
        y: u8,
    },
    /// The string was not a file letter `a`-`h` followed by a rank digit `1`-`8`.
    #[display("invalid square notation: {notation:?}")]
    InvalidNotation {
        /// The rejected input.
        notation: String,
    },
}

impl Position {
    /// Smallest valid coordinate.
    pub const MIN: u8 = 1;
    /// Largest valid coordinate.
    pub const MAX: u8 = 8;

    /// Creates a position from coordinates known to be on the board.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside the range 1-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x >= Self::MIN && x <= Self::MAX);
        assert!(y >= Self::MIN && y <= Self::MAX);
        Self { x, y }
    }

    /// Creates a position, checking that both coordinates are on the board.
    ///
    /// # Errors
    ///
    /// Returns [`PositionError::OutOfRange`] if either coordinate is outside 1-8.
    pub fn try_new(x: u8, y: u8) -> Result<Self, PositionError> {
        let range = Self::MIN..=Self::MAX;
        if range.contains(&x) && range.contains(&y) {
            Ok(Self { x, y })
        } else {
            Err(PositionError::OutOfRange { x, y })
        }
    }

    /// Returns the file (1-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the rank (1-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PositionError::InvalidNotation {
            notation: s.to_owned(),
        };
        let &[file, rank] = s.as_bytes() else {
            return Err(invalid());
        };
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        Ok(Self::new(file - b'a' + 1, rank - b'0'))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.x - 1);
        write!(f, "{file}{}", self.y)
    }
}
