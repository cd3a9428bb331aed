//! Game rules: how moves, spawns and the terminal check transform a board.
//!
//! - `movement`: directional sweep, collision walk, fuse-once semantics
//! - `spawn`: rejection-sampled tile placement
//! - `terminal`: flag reset and loss detection
//!
//! These are free functions over `Board` and `GameRng`. `Game` sequences them.

pub mod movement;
pub mod spawn;
pub mod terminal;

pub use movement::{shift, would_move, Merge, MoveOutcome};
pub use spawn::{place_random_tile, random_empty_cell, seed_board, spawn_value};
pub use terminal::{check_terminal, has_fusible_neighbours, GameStatus, TerminalCheck};
