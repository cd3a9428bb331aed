//! Core engine types: board, directions, RNG, configuration, errors.
//!
//! Everything here is plain data. The rules that transform it live in `rules`.

pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod rng;

pub use board::{Board, Position, Tile, BOARD_SIZE, EMPTY};
pub use config::GameConfig;
pub use direction::Direction;
pub use error::{EngineError, LoadError, Result};
pub use rng::{GameRng, GameRngState};
