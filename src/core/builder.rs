//! Builder for creating a match.
//!
//! Without explicit placements the builder deals the usual random layout.
//! With placements it builds exactly that position, which is how scenario
//! setups and tests pin down identities.

use thiserror::Error;

use super::config::{ConfigError, GameConfig};
use super::identity::Identity;
use super::player::Player;
use super::rng::{GameRng, RandomSource};
use super::square::Square;
use super::state::GameState;

/// Builder for `GameState`.
///
/// ```
/// use veiled_skirmish::core::{Identity, MatchBuilder, Player, Square};
///
/// let state = MatchBuilder::new()
///     .place(Square::new(3, 3), Player::One, Identity::Red)
///     .place(Square::new(3, 4), Player::Two, Identity::Green)
///     .build(0)
///     .unwrap();
///
/// assert_eq!(state.count_player_pieces(Player::One), 1);
/// assert_eq!(state.count_player_pieces(Player::Two), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MatchBuilder {
    config: GameConfig,
    first_player: Option<Player>,
    placements: Vec<(Square, Player, Identity)>,
}

impl MatchBuilder {
    /// Standard rules, player one first, random layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rule parameters, validated on build.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Player who takes the first turn. Defaults to player one.
    pub fn first_player(mut self, player: Player) -> Self {
        self.first_player = Some(player);
        self
    }

    /// Put a hidden piece on `square`. Any placement replaces random dealing.
    pub fn place(mut self, square: Square, player: Player, identity: Identity) -> Self {
        self.placements.push((square, player, identity));
        self
    }

    /// Build with a seeded layout.
    pub fn build(self, seed: u64) -> Result<GameState, SetupError> {
        self.build_with_rng(&mut GameRng::new(seed))
    }

    /// Build drawing any random layout from `rng`.
    pub fn build_with_rng<R: RandomSource + ?Sized>(
        self,
        rng: &mut R,
    ) -> Result<GameState, SetupError> {
        let first = self.first_player.unwrap_or(Player::One);

        if self.placements.is_empty() {
            let mut state = GameState::with_config(self.config, rng)?;
            state.current_player = first;
            return Ok(state);
        }

        self.config.validate()?;
        let limit = self.config.max_pieces_per_player;
        let mut state = GameState::empty(self.config, first);

        for (square, player, identity) in self.placements {
            if !square.is_on_board() {
                return Err(SetupError::OffBoard { square });
            }
            if state.board.get(square).is_some() {
                return Err(SetupError::SquareTaken { square });
            }
            if state.board.count(player) >= limit {
                return Err(SetupError::TooManyPieces { player, limit });
            }
            state.spawn(square, player, identity);
        }

        Ok(state)
    }
}

/// Rejected match setup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("placement {square} is off the board")]
    OffBoard { square: Square },

    #[error("square {square} already holds a piece")]
    SquareTaken { square: Square },

    #[error("{player} cannot field more than {limit} pieces")]
    TooManyPieces { player: Player, limit: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_build_deals_standard_layout() {
        let state = MatchBuilder::new().build(42).unwrap();
        assert_eq!(state, GameState::new(42));
    }

    #[test]
    fn test_first_player() {
        let state = MatchBuilder::new().first_player(Player::Two).build(1).unwrap();
        assert_eq!(state.current_player(), Player::Two);
        assert_eq!(state.count_player_pieces(Player::One), 3);
    }

    #[test]
    fn test_placements_replace_dealing() {
        let state = MatchBuilder::new()
            .place(Square::new(5, 5), Player::Two, Identity::Blue)
            .build(3)
            .unwrap();

        assert_eq!(state.board().pieces().count(), 1);
        let piece = state.piece_at(Square::new(5, 5)).unwrap();
        assert_eq!(piece.owner, Player::Two);
        assert_eq!(piece.identity, Identity::Blue);
        assert!(!piece.revealed);
    }

    #[test]
    fn test_rejects_bad_placements() {
        let off = MatchBuilder::new()
            .place(Square::new(8, 8), Player::One, Identity::Red)
            .build(0);
        assert_eq!(off, Err(SetupError::OffBoard { square: Square::new(8, 8) }));

        let taken = MatchBuilder::new()
            .place(Square::new(2, 2), Player::One, Identity::Red)
            .place(Square::new(2, 2), Player::Two, Identity::Red)
            .build(0);
        assert_eq!(taken, Err(SetupError::SquareTaken { square: Square::new(2, 2) }));

        let crowded = (0..4)
            .fold(MatchBuilder::new(), |b, x| {
                b.place(Square::new(x, 4), Player::One, Identity::Green)
            })
            .build(0);
        assert_eq!(
            crowded,
            Err(SetupError::TooManyPieces {
                player: Player::One,
                limit: 3
            })
        );
    }

    #[test]
    fn test_rejects_bad_config() {
        let config = GameConfig {
            action_points_per_turn: 0,
            ..GameConfig::default()
        };
        let result = MatchBuilder::new().config(config).build(0);
        assert_eq!(result, Err(SetupError::Config(ConfigError::ActionPoints(0))));
    }
}
