//! Value conversions for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Identity, Player, Square};

/// Square from Python integers. Values that do not fit an `i8` map to an
/// off-board square so the engine rejects them like any other bad coordinate.
pub fn square(x: i64, y: i64) -> Square {
    let coord = |v: i64| i8::try_from(v).unwrap_or(-1);
    Square::new(coord(x), coord(y))
}

/// Parse an identity name, raising `ValueError` on anything unknown.
pub fn identity(name: &str) -> PyResult<Identity> {
    name.parse::<Identity>()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Parse a 1-based player number.
pub fn player(number: u8) -> PyResult<Player> {
    Player::from_number(number)
        .ok_or_else(|| PyValueError::new_err(format!("player must be 1 or 2, got {number}")))
}

/// Identity names in dominance order.
pub fn identity_names() -> Vec<&'static str> {
    Identity::ALL.iter().map(|id| id.name()).collect()
}
