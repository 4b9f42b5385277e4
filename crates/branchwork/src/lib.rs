//! Small, self-contained algorithmic exercises.
//!
//! Every function in this crate is a pure, deterministic transform with no
//! shared state. They are grouped by the kind of input they work on:
//!
//! - [`numeric`]: sign check, maximum of three, digit containment
//! - [`triangle`]: triangle validity and isosceles classification
//! - [`chess`]: queen-to-king capture reachability
//! - [`numeral`]: Roman numerals and digit-by-digit spelling
//! - [`text`]: palindromes, character search, odd/even interleave shuffle
//! - [`array`]: balance index, in-place quicksort, next greater digit permutation
//! - [`matrix`]: clockwise spiral fill and in-place rotation
//!
//! Everything is re-exported at the crate root.
//!
//! "Not found" results are reported as [`None`]. Functions that mutate their
//! argument in place also return it, so calls can be chained.
//!
//! # Examples
//!
//! ```
//! use branchwork::{Position, can_queen_capture_king, next_bigger, spiral_matrix, to_roman_numeral};
//!
//! assert_eq!(to_roman_numeral(26)?, "XXVI");
//! assert_eq!(next_bigger(12345), 12354);
//! assert!(can_queen_capture_king(Position::new(1, 1), Position::new(5, 5)));
//! assert_eq!(
//!     spiral_matrix(3).into_rows(),
//!     vec![vec![1, 2, 3], vec![8, 9, 4], vec![7, 6, 5]]
//! );
//! # Ok::<(), branchwork::NumeralError>(())
//! ```

pub use branchwork_core::{
    Digit, Digits, DigitsError, MatrixError, Position, PositionError, SquareMatrix,
};

pub use self::{
    array::*, chess::*, matrix::*, numeral::*, numeric::*, text::*, triangle::*,
};

pub mod array;
pub mod chess;
pub mod matrix;
pub mod numeral;
pub mod numeric;
pub mod text;
pub mod triangle;
