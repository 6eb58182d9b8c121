//! Board coordinates.
//!
//! A `Square` is an `(x, y)` pair addressed as `board[y][x]`. Coordinates are
//! signed and unchecked so callers can describe off-board targets; every
//! engine operation rejects them with `RuleViolation::OutOfBounds`.

use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: i8 = 8;

/// Number of cells on the board.
pub const NUM_SQUARES: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// A coordinate pair, possibly off the board.
///
/// ```
/// use veiled_skirmish::core::Square;
///
/// let sq = Square::new(1, 2);
/// assert!(sq.is_on_board());
/// assert_eq!(sq.index(), Some(17));
///
/// assert!(!Square::new(8, 0).is_on_board());
/// assert_eq!(Square::new(-1, 0).index(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub x: i8,
    pub y: i8,
}

impl Square {
    /// Create a square from column `x` and row `y`.
    #[must_use]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Create a square from a row-major cell index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= NUM_SQUARES {
            return None;
        }
        let side = BOARD_SIZE as usize;
        Some(Self::new((index % side) as i8, (index / side) as i8))
    }

    /// True if both coordinates lie in `0..8`.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    /// Row-major cell index, `None` when off the board.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.y as usize * BOARD_SIZE as usize + self.x as usize)
        } else {
            None
        }
    }

    /// Manhattan distance between two squares.
    #[must_use]
    pub fn distance(self, other: Square) -> u32 {
        (i32::from(self.x) - i32::from(other.x)).unsigned_abs()
            + (i32::from(self.y) - i32::from(other.y)).unsigned_abs()
    }

    /// True if `other` is exactly one orthogonal step away.
    #[must_use]
    pub fn is_adjacent(self, other: Square) -> bool {
        self.distance(other) == 1
    }

    /// The four orthogonal neighbours that lie on the board.
    pub fn neighbours(self) -> impl Iterator<Item = Square> {
        const STEPS: [(i8, i8); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
        STEPS
            .into_iter()
            .map(move |(dx, dy)| Square::new(self.x.saturating_add(dx), self.y.saturating_add(dy)))
            .filter(|sq| sq.is_on_board())
    }

    /// Iterate over every on-board square in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES).filter_map(Square::from_index)
    }
}

impl From<(i8, i8)> for Square {
    fn from((x, y): (i8, i8)) -> Self {
        Square::new(x, y)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Square::new(0, 0).is_on_board());
        assert!(Square::new(7, 7).is_on_board());
        assert!(!Square::new(8, 7).is_on_board());
        assert!(!Square::new(7, -1).is_on_board());
    }

    #[test]
    fn test_index_round_trip() {
        for (i, sq) in Square::all().enumerate() {
            assert_eq!(sq.index(), Some(i));
            assert_eq!(Square::from_index(i), Some(sq));
        }
        assert_eq!(Square::all().count(), NUM_SQUARES);
        assert_eq!(Square::from_index(NUM_SQUARES), None);
    }

    #[test]
    fn test_adjacency_is_orthogonal_single_step() {
        let center = Square::new(3, 3);
        assert!(center.is_adjacent(Square::new(3, 4)));
        assert!(center.is_adjacent(Square::new(2, 3)));
        assert!(!center.is_adjacent(Square::new(4, 4)));
        assert!(!center.is_adjacent(Square::new(3, 5)));
        assert!(!center.is_adjacent(center));
    }

    #[test]
    fn test_neighbours() {
        assert_eq!(Square::new(3, 3).neighbours().count(), 4);
        assert_eq!(Square::new(0, 0).neighbours().count(), 2);
        assert_eq!(Square::new(7, 3).neighbours().count(), 3);
        assert!(Square::new(0, 0).neighbours().all(|sq| sq.is_adjacent(Square::new(0, 0))));
    }

    #[test]
    fn test_display() {
        assert_eq!(Square::new(1, 2).to_string(), "(1, 2)");
    }
}
