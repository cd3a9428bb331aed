//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Direction, GameConfig};
use crate::game::{Game, GameSnapshot};

fn to_py_err(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(format!("{}", err))
}

fn parse_direction(name: &str) -> PyResult<Direction> {
    Direction::from_name(name).ok_or_else(|| to_py_err(format!("unknown direction {:?}", name)))
}

/// Python wrapper for Game.
#[pyclass(name = "TileFusionGame")]
pub struct PyGame(Game);

#[pymethods]
impl PyGame {
    /// Start a fresh game.
    ///
    /// # Arguments
    /// - seed: RNG seed; current time if omitted
    #[new]
    #[pyo3(signature = (seed = None))]
    fn new(seed: Option<u64>) -> Self {
        let config = GameConfig { seed, initial_score: 0 };
        Self(Game::from_config(&config))
    }

    /// Load a game from the 4-line text format.
    #[staticmethod]
    #[pyo3(signature = (text, score = 0, seed = None))]
    fn load(text: &str, score: u64, seed: Option<u64>) -> PyResult<Self> {
        let config = GameConfig { seed, initial_score: score };
        Game::load(text, &config).map(Self).map_err(to_py_err)
    }

    /// Run a full turn ("left", "right", "up" or "down").
    ///
    /// Returns True if any tile moved.
    fn turn(&mut self, direction: &str) -> PyResult<bool> {
        let direction = parse_direction(direction)?;
        let turn = self.0.turn(direction).map_err(to_py_err)?;
        Ok(turn.outcome.moved)
    }

    /// Directions that would change the board.
    fn legal_moves(&self) -> Vec<&'static str> {
        self.0.legal_moves().into_iter().map(Direction::name).collect()
    }

    /// Check (and record) whether the game is lost.
    fn is_lost(&mut self) -> bool {
        self.0.is_lost()
    }

    /// Start over from the original seed.
    fn restart(&mut self) {
        self.0.restart();
    }

    /// Board values as 4 lists of 4 ints, 0 for empty.
    #[getter]
    fn board(&self) -> Vec<Vec<u32>> {
        self.0.board().values().iter().map(|row| row.to_vec()).collect()
    }

    #[getter]
    fn score(&self) -> u64 {
        self.0.score()
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.0.seed()
    }

    /// Encode the full state (including RNG position) as bytes.
    fn snapshot(&self) -> PyResult<Vec<u8>> {
        self.0.snapshot().to_bytes().map_err(to_py_err)
    }

    /// Rebuild a game from `snapshot()` bytes.
    #[staticmethod]
    fn restore(bytes: &[u8]) -> PyResult<Self> {
        let snapshot = GameSnapshot::from_bytes(bytes).map_err(to_py_err)?;
        Game::restore(&snapshot).map(Self).map_err(to_py_err)
    }

    /// Board in the persisted text format.
    fn __str__(&self) -> String {
        self.0.board().to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "TileFusionGame(score={}, seed={}, status={:?})",
            self.0.score(),
            self.0.seed(),
            self.0.status()
        )
    }
}
