//! The 8x8 grid.
//!
//! ## Key Types
//!
//! - `Board`: cell ownership, piece lookup by `PieceId`, per-player counts
//! - `Square`: coordinate pair (from `core::square`)

pub mod grid;

pub use grid::Board;

// Re-export coordinate types from core for convenience
pub use crate::core::square::{Square, BOARD_SIZE, NUM_SQUARES};
