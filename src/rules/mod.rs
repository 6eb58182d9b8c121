//! Game rules.
//!
//! - `combat`: cyclic dominance between identities
//! - `engine`: legality checks and every state-changing operation on
//!   `GameState` (move, peek, redeploy, respawn, action enumeration)

pub mod combat;
pub mod engine;

pub use combat::{resolve_attack, CombatOutcome};
