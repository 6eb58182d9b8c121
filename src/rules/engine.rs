//! Rule operations on `GameState`.
//!
//! Every mutating operation validates first and touches nothing when it
//! refuses. Accepted operations spend action points and pass the turn the
//! moment the remaining budget cannot pay for any action, before returning
//! to the caller.
//!
//! The engine does not stop accepting moves after a win; halting the match
//! is up to whoever drives it.

use smallvec::SmallVec;
use tracing::{debug, info, trace};

use super::combat::{resolve_attack, CombatOutcome};
use crate::core::action::{Action, ActionOutcome, MoveReport, Resolution};
use crate::core::error::{RuleResult, RuleViolation};
use crate::core::identity::Identity;
use crate::core::piece::{Piece, PieceId};
use crate::core::square::Square;
use crate::core::state::GameState;

impl GameState {
    // === Validation helpers ===

    fn require_on_board(square: Square) -> RuleResult<()> {
        if square.is_on_board() {
            Ok(())
        } else {
            Err(RuleViolation::OutOfBounds { square })
        }
    }

    fn require_points(&self, required: u8) -> RuleResult<()> {
        if self.action_points >= required {
            Ok(())
        } else {
            Err(RuleViolation::InsufficientActionPoints {
                required,
                available: self.action_points,
            })
        }
    }

    /// The current player's piece on `square`.
    fn own_piece_at(&self, square: Square) -> RuleResult<&Piece> {
        Self::require_on_board(square)?;
        let piece = self
            .board
            .get(square)
            .ok_or(RuleViolation::NoPieceAt { square })?;
        if !piece.is_owned_by(self.current_player) {
            return Err(RuleViolation::NotOwnPiece {
                square,
                player: self.current_player,
            });
        }
        Ok(piece)
    }

    fn rejected<T>(&self, action: &str, violation: RuleViolation) -> RuleResult<T> {
        trace!(player = %self.current_player, action, %violation, "action rejected");
        Err(violation)
    }

    // === Moves ===

    /// Validate a move, returning the mover and any piece on the destination.
    fn validate_move(&self, from: Square, to: Square) -> RuleResult<(Piece, Option<Piece>)> {
        self.require_points(self.config.move_cost)?;
        Self::require_on_board(from)?;
        Self::require_on_board(to)?;
        if !from.is_adjacent(to) {
            return Err(RuleViolation::NotAdjacent { from, to });
        }
        let mover = *self.own_piece_at(from)?;
        let target = self.board.get(to).copied();
        if target.is_some_and(|t| t.is_owned_by(self.current_player)) {
            return Err(RuleViolation::DestinationOccupiedByOwnPiece { square: to });
        }
        Ok((mover, target))
    }

    /// Check a single-step move or attack without performing it.
    pub fn check_move(&self, from: Square, to: Square) -> RuleResult<()> {
        self.validate_move(from, to).map(|_| ())
    }

    /// True if the piece on `from` may step or attack onto `to`.
    #[must_use]
    pub fn is_valid_move(&self, from: Square, to: Square) -> bool {
        self.check_move(from, to).is_ok()
    }

    /// Every square the piece on `from` may currently move to.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> SmallVec<[Square; 4]> {
        if !from.is_on_board() {
            return SmallVec::new();
        }
        from.neighbours()
            .filter(|&to| self.is_valid_move(from, to))
            .collect()
    }

    /// Move or attack from `from` to `to`.
    ///
    /// Attacks reveal both pieces for good and resolve by cyclic dominance.
    /// The mover wins by ending on the opponent's home square; a draw or a
    /// lost attack never wins since the attacker does not arrive there.
    pub fn move_piece(&mut self, from: Square, to: Square) -> RuleResult<MoveReport> {
        let (piece, target) = match self.validate_move(from, to) {
            Ok(pieces) => pieces,
            Err(violation) => return self.rejected("move", violation),
        };

        let mover = self.current_player;
        let resolution = match target {
            Some(defender) => self.attack(from, to, piece.identity, defender.identity),
            None => {
                self.board.relocate(from, to);
                Resolution::Moved
            }
        };

        let turn_ended = self.spend(self.config.move_cost);
        let winner = (resolution.attacker_advanced() && to == mover.goal_square()).then_some(mover);

        debug!(
            player = %mover,
            %from,
            %to,
            ?resolution,
            points = self.action_points,
            turn_ended,
            "move"
        );
        if let Some(winner) = winner {
            info!(player = %winner, square = %to, "goal square reached");
        }

        Ok(MoveReport {
            mover,
            resolution,
            turn_ended,
            winner,
        })
    }

    /// Resolve combat between the pieces on `from` and `to`.
    fn attack(&mut self, from: Square, to: Square, attacker: Identity, defender: Identity) -> Resolution {
        for square in [from, to] {
            if let Some(piece) = self.board.get_mut(square) {
                piece.reveal();
            }
        }

        let outcome = resolve_attack(attacker, defender);
        debug!(%attacker, %defender, ?outcome, "combat");

        match outcome {
            CombatOutcome::AttackerWins => {
                self.destroy(to);
                self.board.relocate(from, to);
                Resolution::Captured { defender }
            }
            CombatOutcome::DefenderWins => {
                self.destroy(from);
                Resolution::Repelled { defender }
            }
            CombatOutcome::Draw => Resolution::Stalemate,
        }
    }

    // === Peek ===

    /// Privately show the current player one of their own pieces.
    ///
    /// Costs nothing and never sets the permanent reveal flag.
    pub fn peek(&mut self, square: Square) -> RuleResult<PieceId> {
        let id = match self.own_piece_at(square) {
            Ok(piece) => piece.id,
            Err(violation) => return self.rejected("peek", violation),
        };
        self.peeked = Some(id);
        trace!(player = %self.current_player, %square, "peek");
        Ok(id)
    }

    /// Stop peeking. Does nothing if no peek is active.
    pub fn end_peek(&mut self) {
        self.peeked = None;
    }

    // === Redeploy ===

    /// Check whether the piece on `square` may change identity.
    pub fn check_redeploy(&self, square: Square) -> RuleResult<()> {
        self.require_points(self.config.redeploy_cost)?;
        self.own_piece_at(square)?;
        Ok(())
    }

    #[must_use]
    pub fn can_redeploy(&self, square: Square) -> bool {
        self.check_redeploy(square).is_ok()
    }

    /// Give the piece on `square` a new identity and hide it again.
    pub fn redeploy(&mut self, square: Square, identity: Identity) -> RuleResult<()> {
        if let Err(violation) = self.check_redeploy(square) {
            return self.rejected("redeploy", violation);
        }

        if let Some(piece) = self.board.get_mut(square) {
            piece.identity = identity;
            piece.hide();
        }
        let player = self.current_player;
        let turn_ended = self.spend(self.config.redeploy_cost);

        debug!(
            %player,
            %square,
            %identity,
            points = self.action_points,
            turn_ended,
            "redeploy"
        );
        Ok(())
    }

    // === Respawn ===

    /// Check whether the current player may respawn this turn.
    pub fn check_respawn(&self) -> RuleResult<()> {
        let budget = self.config.action_points_per_turn;
        if self.action_points != budget {
            return Err(RuleViolation::TurnAlreadyStarted {
                required: budget,
                available: self.action_points,
            });
        }

        let player = self.current_player;
        let home = player.home_square();
        if self.board.get(home).is_some() {
            return Err(RuleViolation::HomeSquareOccupied { square: home });
        }

        let count = self.board.count(player);
        if count >= self.config.max_pieces_per_player {
            return Err(RuleViolation::PieceLimitReached { player, count });
        }
        Ok(())
    }

    #[must_use]
    pub fn can_respawn(&self) -> bool {
        self.check_respawn().is_ok()
    }

    /// Bring a new hidden piece onto the home square. Uses the whole turn.
    pub fn respawn(&mut self, identity: Identity) -> RuleResult<Square> {
        if let Err(violation) = self.check_respawn() {
            return self.rejected("respawn", violation);
        }

        let player = self.current_player;
        let home = player.home_square();
        let id = self.spawn(home, player, identity);
        debug!(%player, square = %home, %identity, piece = %id, "respawn");

        self.action_points = 0;
        self.end_turn();
        Ok(home)
    }

    // === Actions ===

    /// Perform an action value.
    pub fn apply(&mut self, action: &Action) -> RuleResult<ActionOutcome> {
        match *action {
            Action::Move { from, to } => self.move_piece(from, to).map(ActionOutcome::Moved),
            Action::Redeploy { at, identity } => {
                self.redeploy(at, identity).map(|()| ActionOutcome::Redeployed)
            }
            Action::Respawn { identity } => {
                self.respawn(identity).map(|at| ActionOutcome::Respawned { at })
            }
        }
    }

    /// Check an action value without performing it.
    pub fn check(&self, action: &Action) -> RuleResult<()> {
        match *action {
            Action::Move { from, to } => self.check_move(from, to),
            Action::Redeploy { at, .. } => self.check_redeploy(at),
            Action::Respawn { .. } => self.check_respawn(),
        }
    }

    /// Every action the current player may take right now.
    ///
    /// Moves come first in board order, then redeploys, then respawns.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        let player = self.current_player;
        let own: Vec<Square> = self.board.pieces_of(player).map(|(sq, _)| sq).collect();
        let mut actions = Vec::new();

        for &from in &own {
            actions.extend(
                self.legal_destinations(from)
                    .into_iter()
                    .map(|to| Action::Move { from, to }),
            );
        }

        for &at in &own {
            if self.can_redeploy(at) {
                actions.extend(
                    Identity::ALL
                        .into_iter()
                        .map(|identity| Action::Redeploy { at, identity }),
                );
            }
        }

        if self.can_respawn() {
            actions.extend(
                Identity::ALL
                    .into_iter()
                    .map(|identity| Action::Respawn { identity }),
            );
        }

        actions
    }
}
