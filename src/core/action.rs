//! Action representation and outcomes.
//!
//! The three player actions as values, so a driver can enumerate, store or
//! forward them and hand them to `GameState::apply`. Peeking is not an
//! action: it costs nothing and never changes the turn.

use serde::{Deserialize, Serialize};

use super::identity::Identity;
use super::player::Player;
use super::square::Square;

/// A complete player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Step or attack one square orthogonally.
    Move { from: Square, to: Square },
    /// Change the identity of an own piece, hiding it again.
    Redeploy { at: Square, identity: Identity },
    /// Place a new piece on the home square, ending the turn.
    Respawn { identity: Identity },
}

/// How a move or attack was resolved on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// Destination was empty; the piece stepped into it.
    Moved,
    /// Attacker won; the defender was destroyed and the attacker advanced.
    Captured { defender: Identity },
    /// Defender won; the attacker was destroyed.
    Repelled { defender: Identity },
    /// Same identity; both pieces stayed put.
    Stalemate,
}

impl Resolution {
    /// True if the moving piece now stands on the destination square.
    #[must_use]
    pub fn attacker_advanced(self) -> bool {
        matches!(self, Resolution::Moved | Resolution::Captured { .. })
    }

    /// True if the move was an attack on an occupied square.
    #[must_use]
    pub fn was_attack(self) -> bool {
        !matches!(self, Resolution::Moved)
    }
}

/// Result of a successful move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Player who made the move.
    pub mover: Player,
    /// What happened on the board.
    pub resolution: Resolution,
    /// The move spent the last action point and passed the turn.
    pub turn_ended: bool,
    /// Set when the mover reached the opponent's home square.
    pub winner: Option<Player>,
}

impl MoveReport {
    /// True if this move won the match.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.winner.is_some()
    }
}

/// Result of `GameState::apply`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    Moved(MoveReport),
    Redeployed,
    Respawned { at: Square },
}

impl ActionOutcome {
    /// True if the action won the match.
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, ActionOutcome::Moved(report) if report.is_win())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attacker_advanced() {
        assert!(Resolution::Moved.attacker_advanced());
        assert!(Resolution::Captured { defender: Identity::Green }.attacker_advanced());
        assert!(!Resolution::Repelled { defender: Identity::Red }.attacker_advanced());
        assert!(!Resolution::Stalemate.attacker_advanced());
    }

    #[test]
    fn test_was_attack() {
        assert!(!Resolution::Moved.was_attack());
        assert!(Resolution::Stalemate.was_attack());
    }

    #[test]
    fn test_outcome_is_win() {
        let report = MoveReport {
            mover: Player::One,
            resolution: Resolution::Moved,
            turn_ended: false,
            winner: Some(Player::One),
        };
        assert!(ActionOutcome::Moved(report).is_win());
        assert!(!ActionOutcome::Redeployed.is_win());
        assert!(!ActionOutcome::Respawned { at: Square::new(0, 0) }.is_win());
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::Move {
            from: Square::new(1, 1),
            to: Square::new(1, 2),
        };
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
