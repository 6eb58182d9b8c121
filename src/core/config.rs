//! Rule parameters for a match.
//!
//! `GameConfig::default()` is the standard game: three action points per
//! turn, moves cost one, redeploys cost two, at most three pieces per side.
//! The board size and starting layout are fixed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on `action_points_per_turn`.
pub const MAX_ACTION_POINTS: u8 = 15;

/// Number of pieces each side starts with.
pub const STARTING_PIECES: usize = 3;

/// Tunable rule parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Budget granted at the start of every turn. Respawning requires the
    /// full budget and spends all of it.
    pub action_points_per_turn: u8,

    /// Cost of a move or attack.
    pub move_cost: u8,

    /// Cost of changing a piece's identity.
    pub redeploy_cost: u8,

    /// Cap on live pieces per side; respawn is refused at the cap.
    pub max_pieces_per_player: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            action_points_per_turn: 3,
            move_cost: 1,
            redeploy_cost: 2,
            max_pieces_per_player: STARTING_PIECES,
        }
    }
}

impl GameConfig {
    /// Smallest number of points any in-turn action needs.
    #[must_use]
    pub fn cheapest_action(&self) -> u8 {
        self.move_cost.min(self.redeploy_cost)
    }

    /// Check that the parameters describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let budget = self.action_points_per_turn;
        if budget == 0 || budget > MAX_ACTION_POINTS {
            return Err(ConfigError::ActionPoints(budget));
        }
        if self.move_cost == 0 || self.move_cost > budget {
            return Err(ConfigError::Cost {
                action: "move",
                cost: self.move_cost,
                budget,
            });
        }
        if self.redeploy_cost == 0 || self.redeploy_cost > budget {
            return Err(ConfigError::Cost {
                action: "redeploy",
                cost: self.redeploy_cost,
                budget,
            });
        }
        if self.max_pieces_per_player < STARTING_PIECES {
            return Err(ConfigError::PieceLimit(self.max_pieces_per_player));
        }
        Ok(())
    }
}

/// Rejected configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("action points per turn must be in 1..=15, got {0}")]
    ActionPoints(u8),

    #[error("{action} cost {cost} must be in 1..={budget}")]
    Cost {
        action: &'static str,
        cost: u8,
        budget: u8,
    },

    #[error("piece limit {0} is below the 3 starting pieces")]
    PieceLimit(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard_rules() {
        let config = GameConfig::default();
        assert_eq!(config.action_points_per_turn, 3);
        assert_eq!(config.move_cost, 1);
        assert_eq!(config.redeploy_cost, 2);
        assert_eq!(config.max_pieces_per_player, 3);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_zero_budget() {
        let config = GameConfig {
            action_points_per_turn: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ActionPoints(0)));
    }

    #[test]
    fn test_rejects_cost_above_budget() {
        let config = GameConfig {
            action_points_per_turn: 2,
            redeploy_cost: 3,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Cost { action: "redeploy", .. })
        ));
    }

    #[test]
    fn test_rejects_small_piece_limit() {
        let config = GameConfig {
            max_pieces_per_player: 2,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::PieceLimit(2)));
        assert_eq!(
            config.validate().unwrap_err().to_string(),
            "piece limit 2 is below the 3 starting pieces"
        );
    }

    #[test]
    fn test_cheapest_action() {
        assert_eq!(GameConfig::default().cheapest_action(), 1);
        let config = GameConfig {
            action_points_per_turn: 6,
            move_cost: 3,
            redeploy_cost: 2,
            ..GameConfig::default()
        };
        assert_eq!(config.cheapest_action(), 2);
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig {
            action_points_per_turn: 5,
            ..GameConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
