//! Piece placement on the grid.
//!
//! The `Board` owns every piece. A piece exists only while it sits in a
//! cell; taking it out of its cell and dropping it destroys it.

use serde::{Deserialize, Serialize};

use crate::core::piece::{Piece, PieceId};
use crate::core::player::Player;
use crate::core::square::{Square, NUM_SQUARES};

/// Row-major 8x8 grid of optional pieces.
///
/// ## Usage
///
/// ```
/// use veiled_skirmish::board::{Board, Square};
/// use veiled_skirmish::core::{Identity, Piece, PieceId, Player};
///
/// let mut board = Board::new();
/// let sq = Square::new(2, 3);
///
/// board.place(sq, Piece::new(PieceId(0), Player::One, Identity::Red));
/// assert_eq!(board.get(sq).map(|p| p.owner), Some(Player::One));
/// assert_eq!(board.count(Player::One), 1);
///
/// board.take(sq);
/// assert!(board.is_empty(sq));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Option<Piece>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: vec![None; NUM_SQUARES],
        }
    }

    /// Piece at `square`, `None` if empty or off the board.
    #[must_use]
    pub fn get(&self, square: Square) -> Option<&Piece> {
        square.index().and_then(|i| self.cells[i].as_ref())
    }

    /// Mutable piece at `square`.
    pub fn get_mut(&mut self, square: Square) -> Option<&mut Piece> {
        let i = square.index()?;
        self.cells[i].as_mut()
    }

    /// True if `square` is on the board and holds no piece.
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        square.is_on_board() && self.get(square).is_none()
    }

    /// Put `piece` on `square`, returning whatever was there.
    ///
    /// Off-board squares are ignored and hand the piece back.
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        match square.index() {
            Some(i) => self.cells[i].replace(piece),
            None => Some(piece),
        }
    }

    /// Remove and return the piece on `square`.
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        let i = square.index()?;
        self.cells[i].take()
    }

    /// Move the piece on `from` to `to`, returning the piece it displaced.
    ///
    /// Does nothing if `from` is empty.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.take(from)?;
        self.place(to, piece)
    }

    /// Locate a piece by id.
    #[must_use]
    pub fn find(&self, id: PieceId) -> Option<(Square, &Piece)> {
        self.pieces().find(|(_, piece)| piece.id == id)
    }

    /// Iterate over occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            let piece = cell.as_ref()?;
            Square::from_index(i).map(|sq| (sq, piece))
        })
    }

    /// Iterate over one player's pieces.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.is_owned_by(player))
    }

    /// Number of pieces `player` has on the board.
    #[must_use]
    pub fn count(&self, player: Player) -> usize {
        self.pieces_of(player).count()
    }
}
