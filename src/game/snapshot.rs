//! Full game snapshots.
//!
//! Unlike the persisted text format (board values only), a snapshot also
//! carries the score, status and generator position, so a restored game
//! spawns exactly the tiles the original would have.
//!
//! ```
//! use tile_fusion::{Direction, Game, GameSnapshot};
//!
//! let mut game = Game::new(3);
//! let bytes = game.snapshot().to_bytes().unwrap();
//!
//! let mut restored = Game::restore(&GameSnapshot::from_bytes(&bytes).unwrap()).unwrap();
//! game.turn(Direction::Down).unwrap();
//! restored.turn(Direction::Down).unwrap();
//! assert_eq!(game.board(), restored.board());
//! ```

use serde::{Deserialize, Serialize};

use super::state::Game;
use crate::core::{Board, GameRng, GameRngState, Result, BOARD_SIZE};
use crate::rules::GameStatus;

/// Serializable game state between turns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Tile values, 0 for empty.
    pub cells: [[u32; BOARD_SIZE]; BOARD_SIZE],
    pub score: u64,
    pub status: GameStatus,
    /// Whether the last move changed the board (governs the next spawn).
    pub tiles_moved: bool,
    pub rng: GameRngState,
}

impl GameSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Game {
    /// Capture the current state.
    ///
    /// Fused flags are not captured; take snapshots between turns.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cells: self.board.values(),
            score: self.score,
            status: self.status,
            tiles_moved: self.tiles_moved,
            rng: self.rng.state(),
        }
    }

    /// Rebuild a game from a snapshot.
    ///
    /// Fails if any cell breaks the power-of-two invariant.
    pub fn restore(snapshot: &GameSnapshot) -> Result<Self> {
        let board = Board::from_values(snapshot.cells);
        board.validate()?;

        let mut game = Game::with_board(board, snapshot.score, GameRng::from_state(&snapshot.rng));
        game.status = snapshot.status;
        game.tiles_moved = snapshot.tiles_moved;
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, EngineError, LoadError};

    fn play(game: &mut Game, moves: &[Direction]) {
        for &dir in moves {
            if game.turn(dir).is_err() {
                break;
            }
        }
    }

    const MOVES: [Direction; 8] = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    #[test]
    fn test_snapshot_captures_state() {
        let mut game = Game::new(21);
        play(&mut game, &MOVES);

        let snapshot = game.snapshot();
        assert_eq!(snapshot.cells, game.board().values());
        assert_eq!(snapshot.score, game.score());
        assert_eq!(snapshot.rng.seed, 21);
    }

    #[test]
    fn test_restored_game_replays_identically() {
        let mut game = Game::new(8);
        play(&mut game, &MOVES[..3]);

        let mut restored = Game::restore(&game.snapshot()).unwrap();
        play(&mut game, &MOVES);
        play(&mut restored, &MOVES);

        assert_eq!(game.board(), restored.board());
        assert_eq!(game.score(), restored.score());
        assert_eq!(game.status(), restored.status());
    }

    #[test]
    fn test_bincode_round_trip() {
        let mut game = Game::new(99);
        play(&mut game, &MOVES);

        let snapshot = game.snapshot();
        let bytes = snapshot.to_bytes().unwrap();
        assert_eq!(GameSnapshot::from_bytes(&bytes).unwrap(), snapshot);
    }

    #[test]
    fn test_json_round_trip() {
        let snapshot = Game::new(4).snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_truncated_bytes_fail() {
        let bytes = Game::new(4).snapshot().to_bytes().unwrap();
        let err = GameSnapshot::from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, EngineError::Snapshot(_)));
    }

    #[test]
    fn test_restore_rejects_bad_values() {
        let mut snapshot = Game::new(4).snapshot();
        snapshot.cells[1][2] = 12;

        let err = Game::restore(&snapshot).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Load(LoadError::NotPowerOfTwo { row: 1, col: 2, value: 12 })
        ));
    }
}
