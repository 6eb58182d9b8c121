//! Match state.
//!
//! ## GameState
//!
//! The authoritative state of one match:
//! - The board and every piece on it
//! - Whose turn it is and how many action points remain
//! - The transient peek, stored as a `PieceId` rather than a reference
//!
//! Rule operations (moves, peeks, redeploys, respawns) live in
//! `rules::engine`; this module covers construction, accessors and the
//! bookkeeping shared by those operations.

use serde::Serialize;
use tracing::debug;

use super::config::{ConfigError, GameConfig};
use super::identity::Identity;
use super::piece::{Piece, PieceId};
use super::player::Player;
use super::rng::{shuffle, GameRng, RandomSource};
use super::square::Square;
use crate::board::Board;

/// Full state of one match.
///
/// Each match is an independent value; any number can coexist.
///
/// ```
/// use veiled_skirmish::core::{GameState, Player};
///
/// let state = GameState::new(42);
/// assert_eq!(state.current_player(), Player::One);
/// assert_eq!(state.action_points(), 3);
/// assert_eq!(state.count_player_pieces(Player::One), 3);
/// assert_eq!(state.count_player_pieces(Player::Two), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) action_points: u8,
    pub(crate) peeked: Option<PieceId>,
    next_piece_id: u32,
}

impl GameState {
    /// Create a standard match with a seeded layout.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(&mut GameRng::new(seed))
    }

    /// Create a standard match drawing the layout from `rng`.
    pub fn with_rng<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let mut state = Self::empty(GameConfig::default(), Player::One);
        state.deal(rng);
        state
    }

    /// Create a match with custom rule parameters.
    pub fn with_config<R: RandomSource + ?Sized>(
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut state = Self::empty(config, Player::One);
        state.deal(rng);
        Ok(state)
    }

    /// Empty board, full budget for `first`.
    pub(crate) fn empty(config: GameConfig, first: Player) -> Self {
        let action_points = config.action_points_per_turn;
        Self {
            config,
            board: Board::new(),
            current_player: first,
            action_points,
            peeked: None,
            next_piece_id: 0,
        }
    }

    /// Random starting layout.
    ///
    /// Identities are shuffled, then the starting squares are shuffled and
    /// zipped with them. Player two reshuffles the already shuffled identities.
    fn deal<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let mut identities = Identity::ALL;

        for player in Player::ALL {
            shuffle(&mut *rng, &mut identities);
            let mut squares = player.starting_squares();
            shuffle(&mut *rng, &mut squares);

            for (square, identity) in squares.into_iter().zip(identities) {
                self.spawn(square, player, identity);
            }
        }

        debug!(board = %self.layout_summary(), "dealt starting layout");
    }

    /// Place a fresh hidden piece, returning its id.
    pub(crate) fn spawn(&mut self, square: Square, owner: Player, identity: Identity) -> PieceId {
        let id = PieceId(self.next_piece_id);
        self.next_piece_id += 1;
        self.board.place(square, Piece::new(id, owner, identity));
        id
    }

    /// Spend action points, passing the turn when they run out.
    ///
    /// Points below the cheapest action cost count as run out; no action
    /// could use them and there is no explicit pass.
    ///
    /// Returns true if the turn ended.
    pub(crate) fn spend(&mut self, cost: u8) -> bool {
        self.action_points = self.action_points.saturating_sub(cost);
        if self.action_points < self.config.cheapest_action() {
            self.end_turn();
            true
        } else {
            false
        }
    }

    /// Hand the turn to the opponent with a full budget.
    ///
    /// Any peek ends with the turn: it may only ever show the player on turn
    /// one of their own pieces.
    pub(crate) fn end_turn(&mut self) {
        self.current_player = self.current_player.opponent();
        self.action_points = self.config.action_points_per_turn;
        self.peeked = None;
        debug!(player = %self.current_player, "turn passed");
    }

    /// Remove a piece that lost combat.
    pub(crate) fn destroy(&mut self, square: Square) -> Option<Piece> {
        let piece = self.board.take(square)?;
        if self.peeked == Some(piece.id) {
            self.peeked = None;
        }
        Some(piece)
    }

    fn layout_summary(&self) -> String {
        self.board
            .pieces()
            .map(|(sq, p)| format!("{}{}@{}", p.owner.number(), p.identity.letter(), sq))
            .collect::<Vec<_>>()
            .join(" ")
    }

    // === Accessors ===

    /// Rule parameters of this match.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The grid.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Piece at `square`.
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.board.get(square)
    }

    /// Player on turn.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Action points left this turn.
    #[must_use]
    pub fn action_points(&self) -> u8 {
        self.action_points
    }

    /// Id of the piece being peeked at, if any.
    #[must_use]
    pub fn peeked_piece_id(&self) -> Option<PieceId> {
        self.peeked
    }

    /// The piece being peeked at and where it stands.
    #[must_use]
    pub fn peeked_piece(&self) -> Option<(Square, &Piece)> {
        let id = self.peeked?;
        self.board
            .find(id)
            .filter(|(_, piece)| piece.is_owned_by(self.current_player))
    }

    /// Number of pieces `player` has on the board.
    #[must_use]
    pub fn count_player_pieces(&self, player: Player) -> usize {
        self.board.count(player)
    }
}
