//! Fixed-size square grids.
//!
//! [`SquareMatrix`] stores an `n × n` grid in a single row-major buffer. The
//! size is chosen at construction and never changes, so every `(row, column)`
//! pair below `size` maps to exactly one cell.
//!
//! # Examples
//!
//! ```
//! use branchwork_core::SquareMatrix;
//!
//! let mut matrix = SquareMatrix::from_fn(3, |row, col| row * 3 + col);
//! assert_eq!(matrix[(1, 2)], 5);
//!
//! matrix.swap((0, 0), (2, 2));
//! assert_eq!(matrix.into_rows(), vec![vec![8, 1, 2], vec![3, 4, 5], vec![6, 7, 0]]);
//! ```

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
};

/// A square grid of `size × size` cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SquareMatrix<T> {
    size: usize,
    cells: Vec<T>,
}

/// Error returned when nested rows do not describe a square grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MatrixError {
    /// A row's length differs from the number of rows.
    #[display("row {row} has {len} cells, expected {expected}")]
    NotSquare {
        /// Index of the first offending row.
        row: usize,
        /// Length of that row.
        len: usize,
        /// Number of rows, which every row length must match.
        expected: usize,
    },
}

impl<T> SquareMatrix<T> {
    /// Creates a matrix whose cells are computed from their `(row, column)`.
    #[must_use]
    pub fn from_fn<F>(size: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(f(row, col));
            }
        }
        Self { size, cells }
    }

    /// Creates a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NotSquare`] if any row's length differs from the
    /// number of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use branchwork_core::{MatrixError, SquareMatrix};
    ///
    /// assert!(SquareMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).is_ok());
    /// assert_eq!(
    ///     SquareMatrix::from_rows(vec![vec![1, 2], vec![3]]),
    ///     Err(MatrixError::NotSquare { row: 1, len: 1, expected: 2 })
    /// );
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(MatrixError::NotSquare {
                row,
                len: cells.len(),
                expected: size,
            });
        }
        let cells = rows.into_iter().flatten().collect();
        Ok(Self { size, cells })
    }

    /// Returns the number of rows (equal to the number of columns).
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix has no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns a reference to the cell at `(row, col)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        (row < self.size && col < self.size).then(|| &self.cells[row * self.size + col])
    }

    /// Swaps two cells.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of bounds.
    pub fn swap(&mut self, a: (usize, usize), b: (usize, usize)) {
        let a = self.offset(a);
        let b = self.offset(b);
        self.cells.swap(a, b);
    }

    /// Returns an iterator over the rows as slices.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        self.cells.chunks_exact(self.size.max(1))
    }

    /// Returns row `row` as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        assert!(row < self.size, "row {row} out of bounds for size {}", self.size);
        let start = row * self.size;
        &mut self.cells[start..start + self.size]
    }

    /// Consumes the matrix and returns its nested rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Vec<T>> {
        let mut rows = Vec::with_capacity(self.size);
        let mut cells = self.cells.into_iter();
        for _ in 0..self.size {
            rows.push(cells.by_ref().take(self.size).collect());
        }
        rows
    }

    #[track_caller]
    fn offset(&self, (row, col): (usize, usize)) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) out of bounds for size {}",
            self.size
        );
        row * self.size + col
    }
}

impl<T: Clone> SquareMatrix<T> {
    /// Creates a matrix with every cell set to `value`.
    #[must_use]
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size * size],
        }
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: (usize, usize)) -> &T {
        &self.cells[self.offset(index)]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    #[track_caller]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut T {
        let offset = self.offset(index);
        &mut self.cells[offset]
    }
}

impl<T: Display> Display for SquareMatrix<T> {
    /// Formats one row per line, with cells right-aligned to a common width.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.cells.iter().map(ToString::to_string).collect();
        let width = rendered.iter().map(String::len).max().unwrap_or(0);
        for (i, row) in rendered.chunks_exact(self.size.max(1)).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell:>width$}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_roundtrip_and_shape() {
        let rows = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
        let matrix = SquareMatrix::from_rows(rows.clone()).unwrap();
        assert_eq!(matrix.size(), 3);
        assert_eq!(matrix[(2, 0)], 7);
        assert_eq!(matrix.get(3, 0), None);
        assert_eq!(matrix.rows().len(), 3);
        assert_eq!(matrix.into_rows(), rows);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = SquareMatrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::NotSquare {
                row: 0,
                len: 2,
                expected: 3
            }
        );
        assert_eq!(err.to_string(), "row 0 has 2 cells, expected 3");
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = SquareMatrix::<u32>::from_rows(Vec::new()).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.rows().count(), 0);
        assert_eq!(matrix.to_string(), "");
        assert!(matrix.into_rows().is_empty());
    }

    #[test]
    fn test_row_mut() {
        let mut matrix = SquareMatrix::filled(2, 0);
        matrix.row_mut(1).copy_from_slice(&[3, 4]);
        assert_eq!(matrix.into_rows(), vec![vec![0, 0], vec![3, 4]]);
    }

    #[test]
    fn test_display_aligns_cells() {
        let matrix = SquareMatrix::from_rows(vec![vec![1, 10], vec![100, 2]]).unwrap();
        assert_eq!(matrix.to_string(), "  1  10\n100   2");
    }

    #[test]
    #[should_panic(expected = "cell (0, 2) out of bounds for size 2")]
    fn test_index_out_of_bounds_panics() {
        let matrix = SquareMatrix::filled(2, 0_u8);
        let _ = matrix[(0, 2)];
    }
}
