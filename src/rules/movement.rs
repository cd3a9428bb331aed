//! Directional sweep with collision resolution.
//!
//! Tiles are visited starting from the edge the move points at, so the tile
//! closest to that edge settles (and fuses) first. Each visited tile walks
//! over empty cells until it reaches the edge or another tile:
//!
//! - edge, different value, or a tile that already fused this move: the
//!   walker rests in the last empty cell it crossed
//! - same value and not yet fused: the two fuse into the obstruction's cell
//!
//! A fused tile is flagged so it cannot fuse again until the flags are
//! cleared by the terminal-state check.

use log::trace;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Direction, Position, Tile, EMPTY};

/// One fusion produced by a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Merge {
    /// Cell holding the fused tile.
    pub at: Position,
    /// Value of the fused tile.
    pub value: u32,
}

/// Result of sweeping the board once.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// At least one tile slid or fused.
    pub moved: bool,

    /// Score gained: the sum of all fused values.
    pub gained: u64,

    /// Fusions in the order they happened.
    /// At most two per line, so 8 fit inline.
    pub merges: SmallVec<[Merge; 8]>,
}

/// Where a walking tile stops.
enum Landing {
    /// Rest at this cell (possibly the origin).
    Rest(Position),
    /// Fuse into the tile at this cell.
    Fuse(Position),
}

/// Walk from `origin` in `direction` over empty cells.
///
/// At most three steps on a 4-wide board.
fn walk(board: &Board, origin: Position, direction: Direction) -> Landing {
    let mover = board.get(origin);
    let mut rest = origin;

    while let Some(next) = rest.offset(direction) {
        let obstacle = board.get(next);
        if obstacle.is_empty() {
            rest = next;
            continue;
        }
        if mover.fuses_with(obstacle) {
            return Landing::Fuse(next);
        }
        break;
    }

    Landing::Rest(rest)
}

/// Apply one move to `board` in place.
///
/// Deterministic: no randomness, single pass, no rollback.
pub fn shift(board: &mut Board, direction: Direction) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();

    for row in direction.row_order() {
        for col in direction.col_order() {
            let origin = Position { row, col };
            let tile = board.get(origin);
            if tile.is_empty() {
                continue;
            }

            match walk(board, origin, direction) {
                Landing::Rest(dest) if dest == origin => {}
                Landing::Rest(dest) => {
                    board.set(dest, Tile::new(tile.value));
                    board.set_value(origin, EMPTY);
                    outcome.moved = true;
                }
                Landing::Fuse(dest) => {
                    let value = tile.value * 2;
                    board.set(dest, Tile { value, fused: true });
                    board.set_value(origin, EMPTY);
                    outcome.moved = true;
                    outcome.gained += u64::from(value);
                    outcome.merges.push(Merge { at: dest, value });
                    trace!("fused {} into {} at {}", tile.value, value, dest);
                }
            }
        }
    }

    outcome
}

/// Would `direction` change the board?
///
/// Runs the sweep on a scratch copy; `board` is untouched.
#[must_use]
pub fn would_move(board: &Board, direction: Direction) -> bool {
    let mut scratch = board.clone();
    scratch.clear_fused();
    shift(&mut scratch, direction).moved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_row(row: [u32; 4]) -> Board {
        Board::from_values([row, [0; 4], [0; 4], [0; 4]])
    }

    fn first_row(board: &Board) -> [u32; 4] {
        board.values()[0]
    }

    #[test]
    fn test_adjacent_pair_fuses() {
        let mut board = single_row([2, 2, 0, 0]);
        let outcome = shift(&mut board, Direction::Left);

        assert_eq!(first_row(&board), [4, 0, 0, 0]);
        assert!(outcome.moved);
        assert_eq!(outcome.gained, 4);
        assert_eq!(outcome.merges.as_slice(), &[Merge { at: Position::new(0, 0), value: 4 }]);
    }

    #[test]
    fn test_gap_does_not_prevent_fusion() {
        let mut board = single_row([2, 0, 2, 0]);
        let outcome = shift(&mut board, Direction::Left);

        assert_eq!(first_row(&board), [4, 0, 0, 0]);
        assert_eq!(outcome.gained, 4);
    }

    #[test]
    fn test_distinct_values_block() {
        let mut board = single_row([2, 4, 2, 0]);
        let outcome = shift(&mut board, Direction::Left);

        assert_eq!(first_row(&board), [2, 4, 2, 0]);
        assert!(!outcome.moved);
        assert_eq!(outcome.gained, 0);
        assert!(outcome.merges.is_empty());
    }

    #[test]
    fn test_four_equal_fuse_pairwise() {
        let mut board = single_row([2, 2, 2, 2]);
        let outcome = shift(&mut board, Direction::Left);

        assert_eq!(first_row(&board), [4, 4, 0, 0]);
        assert_eq!(outcome.gained, 8);
        assert_eq!(outcome.merges.len(), 2);
    }

    #[test]
    fn test_fused_tile_blocks_further_fusion() {
        let mut board = single_row([4, 2, 2, 0]);
        let outcome = shift(&mut board, Direction::Left);

        assert_eq!(first_row(&board), [4, 4, 0, 0]);
        assert_eq!(outcome.gained, 4);
        assert!(board.get(Position::new(0, 1)).fused);
        assert!(!board.get(Position::new(0, 0)).fused);
    }

    #[test]
    fn test_edge_tile_fuses_first() {
        let mut board = single_row([0, 2, 2, 2]);
        shift(&mut board, Direction::Right);
        assert_eq!(first_row(&board), [0, 0, 2, 4]);

        let mut board = single_row([2, 2, 2, 0]);
        shift(&mut board, Direction::Left);
        assert_eq!(first_row(&board), [4, 2, 0, 0]);
    }

    #[test]
    fn test_slide_without_fusion() {
        let mut board = single_row([0, 0, 0, 8]);
        let outcome = shift(&mut board, Direction::Left);

        assert_eq!(first_row(&board), [8, 0, 0, 0]);
        assert!(outcome.moved);
        assert_eq!(outcome.gained, 0);
        assert!(!board.get(Position::new(0, 0)).fused);
    }

    #[test]
    fn test_vertical_moves() {
        let mut board = Board::from_values([[2, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0]]);
        let outcome = shift(&mut board, Direction::Down);

        assert_eq!(board.values(), [[0; 4], [0; 4], [4, 0, 0, 0], [4, 0, 0, 0]]);
        assert_eq!(outcome.gained, 4);

        board.clear_fused();
        let outcome = shift(&mut board, Direction::Up);
        assert_eq!(board.values(), [[8, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert_eq!(outcome.gained, 8);
    }

    #[test]
    fn test_no_move_against_edge() {
        let mut board = single_row([2, 4, 8, 16]);
        assert!(!shift(&mut board, Direction::Left).moved);
        assert!(!shift(&mut board, Direction::Right).moved);
        assert!(!shift(&mut board, Direction::Up).moved);
        assert!(shift(&mut board, Direction::Down).moved);
    }

    #[test]
    fn test_largest_value_does_not_overflow() {
        let top = 1u32 << 31;
        let mut board = single_row([top, top, 0, 0]);
        let outcome = shift(&mut board, Direction::Left);

        assert_eq!(first_row(&board), [top, top, 0, 0]);
        assert!(!outcome.moved);
    }

    #[test]
    fn test_would_move_leaves_board_alone() {
        let board = single_row([2, 2, 0, 0]);
        assert!(would_move(&board, Direction::Left));
        assert!(would_move(&board, Direction::Down));
        assert!(!would_move(&Board::new(), Direction::Left));
        assert_eq!(first_row(&board), [2, 2, 0, 0]);
    }
}
