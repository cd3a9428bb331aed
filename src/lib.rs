//! # tile-fusion
//!
//! Rule engine for a tile-merging puzzle on a fixed 4×4 board.
//!
//! ## Design Principles
//!
//! 1. **Pure State Machine**: The engine is driven by one move at a time.
//!    Rendering, key handling and file I/O belong to callers.
//!
//! 2. **Deterministic**: All randomness comes from a seeded generator owned
//!    by each `Game`. Same seed + same moves = same game.
//!
//! 3. **Fuse Once**: A tile produced by a fusion cannot fuse again during
//!    the same move. The tile nearest the target edge fuses first.
//!
//! ## Turn Cycle
//!
//! ```
//! use tile_fusion::{Direction, Game, GameStatus};
//!
//! let mut game = Game::new(2024);
//! for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
//!     game.apply_move(dir).unwrap();   // movement phase
//!     game.spawn_next_tile().unwrap(); // spawn phase, skipped on no-op moves
//!     if game.is_lost() {              // clears fused flags, detects loss
//!         break;
//!     }
//! }
//! assert_eq!(game.status(), GameStatus::Playing);
//! ```
//!
//! ## Modules
//!
//! - `core`: Board, tiles, directions, RNG, configuration, errors
//! - `rules`: Movement sweep, spawning, terminal-state detection
//! - `game`: The `Game` state machine and snapshots
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod game;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Position, Tile, BOARD_SIZE, EMPTY,
    Direction,
    GameRng, GameRngState,
    GameConfig,
    EngineError, LoadError, Result,
};

pub use crate::rules::{GameStatus, Merge, MoveOutcome, TerminalCheck};

pub use crate::game::{BoardView, Game, GameSnapshot, TurnOutcome};
