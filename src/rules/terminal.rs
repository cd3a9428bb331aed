//! Terminal-state detection.
//!
//! A game is lost when the board is full and no two orthogonal neighbours
//! can fuse: no move can change the board any more. The check also
//! clears every fused flag, which makes it the per-turn flag reset and it
//! must run once before the next move is accepted.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Direction, Position};

/// Game status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    #[default]
    Playing,
    /// Terminal. No further moves are accepted.
    Lost,
}

impl GameStatus {
    #[must_use]
    pub fn is_lost(self) -> bool {
        self == GameStatus::Lost
    }
}

/// Result of a terminal-state check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TerminalCheck {
    /// No empty cell left.
    pub board_is_full: bool,
    /// No move can change the board.
    pub lost: bool,
}

/// Some cell can fuse with its right or lower neighbour.
///
/// Each pair is checked once. Uses the same rule as movement, so an equal
/// pair too large to double does not count.
#[must_use]
pub fn has_fusible_neighbours(board: &Board) -> bool {
    Position::all().any(|p| {
        let tile = board.get(p);
        [Direction::Right, Direction::Down]
            .into_iter()
            .filter_map(|d| p.offset(d))
            .any(|n| tile.fuses_with(board.get(n)))
    })
}

/// Clear fused flags, then decide whether the board is lost.
pub fn check_terminal(board: &mut Board) -> TerminalCheck {
    board.clear_fused();

    let board_is_full = board.is_full();
    let lost = board_is_full && !has_fusible_neighbours(board);

    TerminalCheck { board_is_full, lost }
}
