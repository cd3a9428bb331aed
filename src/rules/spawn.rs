//! Random tile placement.
//!
//! Cells are chosen by rejection sampling: draw a row and a column uniformly,
//! redraw while the cell is occupied. The value comes from a 10-sided die,
//! 4 on a roll of 0 and 2 otherwise.

use log::debug;

use crate::core::config::{COMMON_SPAWN, INITIAL_TILES, RARE_SPAWN, SPAWN_DIE_SIDES};
use crate::core::{Board, EngineError, GameRng, Position, Result};

/// Draw a spawn value from the die.
pub fn spawn_value(rng: &mut GameRng) -> u32 {
    if rng.roll_die(SPAWN_DIE_SIDES) == 0 {
        RARE_SPAWN
    } else {
        COMMON_SPAWN
    }
}

/// Pick a uniformly random empty cell.
///
/// Fails on a full board instead of sampling forever.
pub fn random_empty_cell(board: &Board, rng: &mut GameRng) -> Result<Position> {
    if board.is_full() {
        return Err(EngineError::BoardFull);
    }

    loop {
        let row = rng.cell_index();
        let col = rng.cell_index();
        let pos = Position { row, col };
        if board.get(pos).is_empty() {
            return Ok(pos);
        }
    }
}

/// Place one new tile on a random empty cell.
pub fn place_random_tile(board: &mut Board, rng: &mut GameRng) -> Result<Position> {
    let pos = random_empty_cell(board, rng)?;
    let value = spawn_value(rng);
    board.set_value(pos, value);
    debug!("spawned {} at {}", value, pos);
    Ok(pos)
}

/// Fresh board with `INITIAL_TILES` tiles on distinct cells.
pub fn seed_board(rng: &mut GameRng) -> Board {
    let mut board = Board::new();
    for _ in 0..INITIAL_TILES {
        let placed = place_random_tile(&mut board, rng);
        debug_assert!(placed.is_ok(), "fresh board ran out of room");
    }
    board
}
