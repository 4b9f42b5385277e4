//! Chessboard reachability.

use branchwork_core::Position;

/// Returns `true` if a queen on `queen` attacks the square `king` in one move.
///
/// A queen attacks along its rank, its file, and both diagonals. Pieces that
/// might block the line are not modelled. A king on the queen's own square
/// counts as attacked.
///
/// # Examples
///
/// ```
/// use branchwork::{Position, can_queen_capture_king};
///
/// assert!(can_queen_capture_king(Position::new(1, 1), Position::new(5, 5)));
/// assert!(can_queen_capture_king(Position::new(2, 1), Position::new(2, 8)));
/// assert!(!can_queen_capture_king(Position::new(1, 1), Position::new(2, 8)));
/// ```
#[must_use]
pub fn can_queen_capture_king(queen: Position, king: Position) -> bool {
    if queen.x() == king.x() || queen.y() == king.y() {
        return true;
    }
    queen.x().abs_diff(king.x()) == queen.y().abs_diff(king.y())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_positions() -> impl Iterator<Item = Position> {
        (1..=8).flat_map(|x| (1..=8).map(move |y| Position::new(x, y)))
    }

    #[test]
    fn test_lines() {
        let queen: Position = "d4".parse().unwrap();
        for target in ["d1", "d8", "a4", "h4", "a1", "g7", "a7", "g1", "h8"] {
            let king = target.parse().unwrap();
            assert!(can_queen_capture_king(queen, king), "{queen} -> {king}");
        }
        for target in ["c6", "e6", "b3", "h5", "a2"] {
            let king = target.parse().unwrap();
            assert!(!can_queen_capture_king(queen, king), "{queen} -> {king}");
        }
    }

    #[test]
    fn test_symmetric_and_matches_walk() {
        // walk the four diagonals one step at a time up to the board edge
        let walks = |queen: Position, king: Position| {
            let (qx, qy) = (i16::from(queen.x()), i16::from(queen.y()));
            let (kx, ky) = (i16::from(king.x()), i16::from(king.y()));
            qx == kx
                || qy == ky
                || (1..=8).any(|i| {
                    [(-i, -i), (i, -i), (i, i), (-i, i)]
                        .into_iter()
                        .any(|(dx, dy)| qx + dx == kx && qy + dy == ky)
                })
        };
        for queen in all_positions() {
            for king in all_positions() {
                let result = can_queen_capture_king(queen, king);
                assert_eq!(result, walks(queen, king), "{queen} -> {king}");
                assert_eq!(result, can_queen_capture_king(king, queen));
            }
        }
    }
}
