//! Core value types for branchwork exercises.
//!
//! The exercises themselves live in the `branchwork` crate. This crate holds the
//! small, strongly-typed values they operate on, so that range and shape checks
//! happen once at construction instead of inside every algorithm.
//!
//! # Overview
//!
//! - [`digit`]: [`Digit`], a single decimal digit 0-9 with its character and word forms
//! - [`digits`]: [`Digits`], the ordered decimal digit sequence of a non-negative integer
//! - [`position`]: [`Position`], a chessboard square with 1-based `(x, y)` coordinates
//! - [`matrix`]: [`SquareMatrix`], a fixed-size `n × n` row-major grid
//!
//! # Examples
//!
//! ```
//! use branchwork_core::{Digit, Digits, Position, SquareMatrix};
//!
//! let digits = Digits::from_number(1950);
//! assert!(digits.contains(Digit::D9));
//!
//! let square: Position = "e4".parse()?;
//! assert_eq!((square.x(), square.y()), (5, 4));
//!
//! let matrix = SquareMatrix::from_rows(vec![vec![1, 2], vec![3, 4]])?;
//! assert_eq!(matrix[(1, 0)], 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod digit;
pub mod digits;
pub mod matrix;
pub mod position;

pub use self::{
    digit::Digit,
    digits::{Digits, DigitsError},
    matrix::{MatrixError, SquareMatrix},
    position::{Position, PositionError},
};
