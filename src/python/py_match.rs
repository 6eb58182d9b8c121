//! Match bindings for Python.

use pyo3::prelude::*;

use crate::core::{GameState, MatchBuilder};
use crate::view::CellView;

use super::py_core::{identity, player, square};

/// Visible cell contents: `(player, identity or None)`.
type PyCell = Option<(u8, Option<&'static str>)>;

/// Python wrapper for one match.
#[pyclass(name = "Match")]
#[derive(Clone)]
pub struct PyMatch {
    state: GameState,
}

#[pymethods]
impl PyMatch {
    /// Create a new match with a random layout.
    ///
    /// # Arguments
    /// - seed: RNG seed for the starting layout; `None` draws from the OS
    #[new]
    #[pyo3(signature = (seed = None))]
    fn new(seed: Option<u64>) -> PyResult<Self> {
        let builder = MatchBuilder::new();
        let built = match seed {
            Some(seed) => builder.build(seed),
            None => builder.build_with_rng(&mut rand::thread_rng()),
        };
        built
            .map(|state| Self { state })
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    fn is_valid_move(&self, from_x: i64, from_y: i64, to_x: i64, to_y: i64) -> bool {
        self.state
            .is_valid_move(square(from_x, from_y), square(to_x, to_y))
    }

    /// Move or attack. Returns `False`, `True` or `"win"`.
    #[pyo3(name = "move")]
    fn move_piece(&mut self, py: Python<'_>, from_x: i64, from_y: i64, to_x: i64, to_y: i64) -> PyObject {
        match self
            .state
            .move_piece(square(from_x, from_y), square(to_x, to_y))
        {
            Ok(report) if report.is_win() => "win".into_py(py),
            Ok(_) => true.into_py(py),
            Err(_) => false.into_py(py),
        }
    }

    fn peek(&mut self, x: i64, y: i64) -> bool {
        self.state.peek(square(x, y)).is_ok()
    }

    fn end_peek(&mut self) {
        self.state.end_peek();
    }

    fn can_redeploy(&self, x: i64, y: i64) -> bool {
        self.state.can_redeploy(square(x, y))
    }

    fn redeploy(&mut self, x: i64, y: i64, new_identity: &str) -> PyResult<bool> {
        let identity = identity(new_identity)?;
        Ok(self.state.redeploy(square(x, y), identity).is_ok())
    }

    fn can_respawn(&self) -> bool {
        self.state.can_respawn()
    }

    fn respawn(&mut self, new_identity: &str) -> PyResult<bool> {
        let identity = identity(new_identity)?;
        Ok(self.state.respawn(identity).is_ok())
    }

    fn count_player_pieces(&self, number: u8) -> PyResult<usize> {
        Ok(self.state.count_player_pieces(player(number)?))
    }

    /// Squares the piece on `(x, y)` may move to.
    fn legal_destinations(&self, x: i64, y: i64) -> Vec<(i8, i8)> {
        self.state
            .legal_destinations(square(x, y))
            .into_iter()
            .map(|sq| (sq.x, sq.y))
            .collect()
    }

    /// Identity on `(x, y)` if it may be shown, else `None`.
    fn visible_identity(&self, x: i64, y: i64) -> Option<&'static str> {
        self.state.visible_identity(square(x, y)).map(|id| id.name())
    }

    /// Rows `y = 0..8` of visible cells.
    fn board(&self) -> Vec<Vec<PyCell>> {
        self.state
            .board_view()
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| match cell {
                        CellView::Empty => None,
                        CellView::Piece { player, identity } => {
                            Some((player.number(), identity.map(|id| id.name())))
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Full piece record on `(x, y)`: `(player, identity, revealed)`.
    fn piece_at(&self, x: i64, y: i64) -> Option<(u8, &'static str, bool)> {
        self.state
            .piece_at(square(x, y))
            .map(|p| (p.owner.number(), p.identity.name(), p.revealed))
    }

    #[getter]
    fn current_player(&self) -> u8 {
        self.state.current_player().number()
    }

    #[getter]
    fn action_points(&self) -> u8 {
        self.state.action_points()
    }

    /// Square of the peeked piece, if any.
    #[getter]
    fn peeked(&self) -> Option<(i8, i8)> {
        self.state.peeked_piece().map(|(sq, _)| (sq.x, sq.y))
    }

    /// Independent copy of this match.
    fn copy(&self) -> Self {
        self.clone()
    }

    fn __str__(&self) -> String {
        self.state.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "Match(player={}, action_points={})",
            self.state.current_player().number(),
            self.state.action_points()
        )
    }
}
