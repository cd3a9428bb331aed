//! Python bindings for the tile-fusion engine.
//!
//! # Quick Start
//!
//! ```python
//! import tile_fusion as tf
//!
//! game = tf.TileFusionGame(seed=42)
//! while game.legal_moves():
//!     game.turn(game.legal_moves()[0])
//!     if game.is_lost():
//!         break
//! print(game.score)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// tile_fusion: rule engine for the 4x4 tile-merging puzzle.
#[pymodule]
fn tile_fusion(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    Ok(())
}
