//! Rejection reasons for engine operations.
//!
//! Every rejected operation leaves the match untouched and reports one of
//! these. None of them is fatal; the caller decides how to surface it.

use thiserror::Error;

use super::player::Player;
use super::square::Square;

/// Why an action was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleViolation {
    /// A coordinate lies outside the 8x8 board.
    #[error("square {square} is off the board")]
    OutOfBounds { square: Square },

    /// Not enough action points left this turn.
    #[error("action needs {required} action points but only {available} remain")]
    InsufficientActionPoints { required: u8, available: u8 },

    /// The source square is empty.
    #[error("no piece at {square}")]
    NoPieceAt { square: Square },

    /// The piece belongs to the player who is not on turn.
    #[error("piece at {square} does not belong to {player}")]
    NotOwnPiece { square: Square, player: Player },

    /// Moves are single orthogonal steps.
    #[error("{from} and {to} are not orthogonally adjacent")]
    NotAdjacent { from: Square, to: Square },

    /// The destination holds one of the mover's own pieces.
    #[error("{square} is occupied by a friendly piece")]
    DestinationOccupiedByOwnPiece { square: Square },

    /// Respawning must be the only action of a turn.
    #[error("respawn requires an untouched turn ({required} action points), {available} remain")]
    TurnAlreadyStarted { required: u8, available: u8 },

    /// Something stands on the home square.
    #[error("home square {square} is occupied")]
    HomeSquareOccupied { square: Square },

    /// The side already fields the maximum number of pieces.
    #[error("{player} already has {count} pieces on the board")]
    PieceLimitReached { player: Player, count: usize },
}

/// Result type alias for engine operations.
pub type RuleResult<T> = Result<T, RuleViolation>;
