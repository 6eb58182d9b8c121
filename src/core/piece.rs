//! Pieces and piece identifiers.
//!
//! Every piece placed on the board gets a fresh `PieceId` from the match.
//! Ids are never reused, so a stale id (e.g. the peeked piece after it was
//! destroyed) simply fails to resolve instead of pointing at a new piece.

use serde::{Deserialize, Serialize};

use super::identity::Identity;
use super::player::Player;

/// Unique identifier for a piece within one match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// A unit on the board.
///
/// `revealed` is the permanent disclosure set by combat and cleared only by
/// redeploy. Peeking never touches it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub owner: Player,
    pub identity: Identity,
    pub revealed: bool,
}

impl Piece {
    /// Create a new, hidden piece.
    #[must_use]
    pub const fn new(id: PieceId, owner: Player, identity: Identity) -> Self {
        Self {
            id,
            owner,
            identity,
            revealed: false,
        }
    }

    /// Permanently disclose this piece's identity.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Hide this piece's identity again.
    pub fn hide(&mut self) {
        self.revealed = false;
    }

    /// Check ownership.
    #[must_use]
    pub fn is_owned_by(&self, player: Player) -> bool {
        self.owner == player
    }
}
