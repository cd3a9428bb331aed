//! The game: sequencing of movement, spawn and terminal check.
//!
//! - `Game`: owns the board, score and generator; one instance per game
//! - `GameSnapshot`: full serializable state, including the generator position
//!
//! Single-threaded by design. `Game` is `Send`; a caller sharing one across
//! threads must lock around each whole `turn`.

mod state;
mod snapshot;

pub use state::{BoardView, Game, TurnOutcome};
pub use snapshot::GameSnapshot;
