//! # veiled-skirmish
//!
//! Rules engine for a hidden-information capture game on an 8x8 grid.
//!
//! Two players each field up to three pieces. Every piece carries a hidden
//! identity (red, green or blue) with cyclic dominance: red beats green,
//! green beats blue, blue beats red. Identities surface through combat or a
//! private peek. The first player to occupy the opposing home corner wins.
//!
//! ## Turn Structure
//!
//! - Each turn grants 3 action points.
//! - A move or attack costs 1, a redeploy (new identity, hidden again) costs 2.
//! - Respawning on the home square needs the untouched budget and ends the turn.
//! - Reaching 0 points passes the turn immediately. With a custom
//!   `GameConfig`, so does dropping below the cheapest action cost.
//!
//! ## Architecture
//!
//! - **Explicit matches**: `GameState` is an ordinary value. Create as many
//!   as needed; nothing is global.
//!
//! - **Injectable randomness**: setup shuffles through any `RandomSource`,
//!   so layouts are reproducible from a seed or fully scripted in tests.
//!
//! - **No partial updates**: a refused operation returns a `RuleViolation`
//!   and leaves the match exactly as it was.
//!
//! ## Modules
//!
//! - `core`: players, identities, squares, pieces, state, actions, RNG, configuration
//! - `board`: the 8x8 grid
//! - `rules`: combat resolution and every rule operation on `GameState`
//! - `view`: what a presentation layer may display
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ```
//! use veiled_skirmish::{GameState, Square};
//!
//! let mut game = GameState::new(42);
//! let report = game.move_piece(Square::new(1, 1), Square::new(1, 2)).unwrap();
//! assert!(!report.is_win());
//! assert_eq!(game.action_points(), 2);
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod view;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Player, Identity, Square, Piece, PieceId,
    GameRng, GameRngState, RandomSource,
    GameConfig, ConfigError,
    Action, ActionOutcome, MoveReport, Resolution,
    RuleViolation, RuleResult,
    GameState, MatchBuilder, SetupError,
};

pub use crate::board::Board;

pub use crate::rules::{resolve_attack, CombatOutcome};

pub use crate::view::CellView;
