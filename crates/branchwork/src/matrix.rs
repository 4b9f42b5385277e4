//! Matrix generation and rotation.

use branchwork_core::SquareMatrix;

/// Builds a `size × size` matrix filled with `1..=size²` in a clockwise spiral.
///
/// Filling starts at the top-left corner and walks the outer ring clockwise
/// (top row, right column, bottom row, left column), then continues with the
/// next ring inward.
///
/// # Examples
///
/// ```
/// use branchwork::spiral_matrix;
///
/// assert_eq!(
///     spiral_matrix(4).into_rows(),
///     vec![
///         vec![1, 2, 3, 4],
///         vec![12, 13, 14, 5],
///         vec![11, 16, 15, 6],
///         vec![10, 9, 8, 7],
///     ]
/// );
/// ```
#[must_use]
pub fn spiral_matrix(size: usize) -> SquareMatrix<usize> {
    let mut matrix = SquareMatrix::filled(size, 0);
    let mut value = 1;
    let mut next = || {
        let current = value;
        value += 1;
        current
    };

    // half-open bounds of the ring still to be filled
    let (mut top, mut bottom) = (0, size);
    let (mut left, mut right) = (0, size);
    while top < bottom && left < right {
        for col in left..right {
            matrix[(top, col)] = next();
        }
        top += 1;

        for row in top..bottom {
            matrix[(row, right - 1)] = next();
        }
        right -= 1;

        if top < bottom {
            for col in (left..right).rev() {
                matrix[(bottom - 1, col)] = next();
            }
            bottom -= 1;
        }

        if left < right {
            for row in (top..bottom).rev() {
                matrix[(row, left)] = next();
            }
            left += 1;
        }
    }
    matrix
}

/// Rotates `matrix` 90° clockwise in place and returns it.
///
/// The rotation is a transpose followed by reversing every row, so it needs
/// no storage beyond the matrix itself.
///
/// # Examples
///
/// ```
/// use branchwork::{SquareMatrix, rotate_clockwise};
///
/// let mut matrix = SquareMatrix::from_rows(vec![
///     vec![1, 2, 3],
///     vec![4, 5, 6],
///     vec![7, 8, 9],
/// ])?;
/// rotate_clockwise(&mut matrix);
/// assert_eq!(
///     matrix.into_rows(),
///     vec![vec![7, 4, 1], vec![8, 5, 2], vec![9, 6, 3]]
/// );
/// # Ok::<(), branchwork::MatrixError>(())
/// ```
pub fn rotate_clockwise<T>(matrix: &mut SquareMatrix<T>) -> &mut SquareMatrix<T> {
    transpose(matrix);
    for row in 0..matrix.size() {
        matrix.row_mut(row).reverse();
    }
    matrix
}

/// Rotates `matrix` 90° counterclockwise in place and returns it.
///
/// This undoes [`rotate_clockwise`].
pub fn rotate_counterclockwise<T>(matrix: &mut SquareMatrix<T>) -> &mut SquareMatrix<T> {
    transpose(matrix);
    let size = matrix.size();
    for row in 0..size / 2 {
        for col in 0..size {
            matrix.swap((row, col), (size - 1 - row, col));
        }
    }
    matrix
}

fn transpose<T>(matrix: &mut SquareMatrix<T>) {
    let size = matrix.size();
    for row in 0..size {
        for col in row + 1..size {
            matrix.swap((row, col), (col, row));
        }
    }
}
