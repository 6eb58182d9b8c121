//! Python bindings for the veiled-skirmish rules engine.
//!
//! Lets an out-of-process presentation layer drive a match. Return values
//! follow the boolean conventions a UI expects: `False` for a refused action,
//! `True` for an accepted one and `"win"` for a winning move.
//!
//! # Quick Start
//!
//! ```python
//! import veiled_skirmish as vs
//!
//! game = vs.Match(seed=42)
//! assert game.current_player == 1
//!
//! if game.is_valid_move(1, 1, 1, 2):
//!     result = game.move(1, 1, 1, 2)   # True, or "win"
//!
//! game.peek(1, 2)
//! print(game.visible_identity(1, 2))   # e.g. "green"
//! game.end_peek()
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_match;

pub use py_core::*;
pub use py_match::*;

/// veiled_skirmish: hidden-identity capture game engine.
#[pymodule]
fn veiled_skirmish(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMatch>()?;
    m.add("IDENTITIES", identity_names())?;
    Ok(())
}
