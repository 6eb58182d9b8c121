//! Core engine types: players, identities, squares, pieces, state, actions,
//! RNG, configuration.
//!
//! Rule operations on `GameState` are implemented in `crate::rules`.

pub mod player;
pub mod identity;
pub mod square;
pub mod piece;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;
pub mod state;
pub mod builder;

pub use player::Player;
pub use identity::{Identity, UnknownIdentity};
pub use square::{Square, BOARD_SIZE, NUM_SQUARES};
pub use piece::{Piece, PieceId};
pub use rng::{shuffle, GameRng, GameRngState, RandomSource};
pub use config::{ConfigError, GameConfig};
pub use action::{Action, ActionOutcome, MoveReport, Resolution};
pub use error::{RuleResult, RuleViolation};
pub use state::GameState;
pub use builder::{MatchBuilder, SetupError};
