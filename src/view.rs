//! What a presentation layer may show.
//!
//! Ownership of every piece is public. An identity is shown only when the
//! piece has been revealed by combat or is the piece currently peeked at.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::identity::Identity;
use crate::core::player::Player;
use crate::core::square::{Square, BOARD_SIZE};
use crate::core::state::GameState;

/// Displayable contents of one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellView {
    Empty,
    Piece {
        player: Player,
        /// `None` while the identity is hidden.
        identity: Option<Identity>,
    },
}

impl CellView {
    /// Two-character tag: `..` for empty, else owner number and identity letter or `?`.
    #[must_use]
    pub fn tag(self) -> String {
        match self {
            CellView::Empty => "..".to_string(),
            CellView::Piece { player, identity } => {
                let letter = identity.map_or('?', Identity::letter);
                format!("{}{}", player.number(), letter)
            }
        }
    }
}

impl GameState {
    /// Identity on `square` if it may be shown.
    #[must_use]
    pub fn visible_identity(&self, square: Square) -> Option<Identity> {
        let piece = self.board.get(square)?;
        let peeked = self.peeked_piece().is_some_and(|(_, p)| p.id == piece.id);
        (piece.revealed || peeked).then_some(piece.identity)
    }

    /// Displayable contents of `square`.
    #[must_use]
    pub fn cell_view(&self, square: Square) -> CellView {
        match self.board.get(square) {
            None => CellView::Empty,
            Some(piece) => CellView::Piece {
                player: piece.owner,
                identity: self.visible_identity(square),
            },
        }
    }

    /// The whole board as rows `y = 0..8`, each holding columns `x = 0..8`.
    #[must_use]
    pub fn board_view(&self) -> Vec<Vec<CellView>> {
        (0..BOARD_SIZE)
            .map(|y| {
                (0..BOARD_SIZE)
                    .map(|x| self.cell_view(Square::new(x, y)))
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.board_view() {
            let line: Vec<String> = row.into_iter().map(CellView::tag).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        write!(
            f,
            "{}'s turn - Action Points: {}",
            self.current_player, self.action_points
        )
    }
}
