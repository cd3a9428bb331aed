//! The game state machine.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{Board, Direction, EngineError, GameConfig, GameRng, Position, Result, BOARD_SIZE};
use crate::rules::{check_terminal, place_random_tile, seed_board, shift, would_move, GameStatus, MoveOutcome};

/// What a display collaborator needs to draw the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    /// Tile values, 0 for empty.
    pub cells: [[u32; BOARD_SIZE]; BOARD_SIZE],
    pub score: u64,
    pub seed: u64,
}

/// Result of one full move + spawn + terminal-check cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// What the move did.
    pub outcome: MoveOutcome,
    /// Where a new tile appeared, if any.
    pub spawned: Option<Position>,
    /// Status after the terminal check.
    pub status: GameStatus,
}

/// A single game: board, score, seed, and the owned generator.
///
/// ## Turn sequence
///
/// Callers drive the game one turn at a time:
/// 1. `apply_move` (movement phase)
/// 2. `spawn_next_tile` (spawn phase, no-op if nothing moved)
/// 3. `is_lost` (clears fused flags, detects the terminal state)
///
/// `turn` runs all three. Once `is_lost` returns true the game is terminal
/// and further moves fail with `EngineError::GameOver`.
///
/// ```
/// use tile_fusion::{Direction, Game};
///
/// let mut game = Game::new(42);
/// let turn = game.turn(Direction::Left).unwrap();
/// assert!(turn.status == tile_fusion::GameStatus::Playing);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) score: u64,
    pub(crate) rng: GameRng,
    pub(crate) board_is_full: bool,
    pub(crate) tiles_moved: bool,
    pub(crate) status: GameStatus,
}

impl Game {
    /// Start a fresh game with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_config(&GameConfig::new().with_seed(seed))
    }

    /// Start a fresh game: two random tiles on an otherwise empty board.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        let mut rng = GameRng::new(config.resolve_seed());
        let board = seed_board(&mut rng);
        info!("new game with seed {}", rng.seed());
        Self::with_board(board, config.initial_score, rng)
    }

    /// Load a game from the persisted text format.
    ///
    /// Score and seed come from `config`. On malformed text no game is built.
    pub fn load(text: &str, config: &GameConfig) -> Result<Self> {
        let board: Board = text.parse()?;
        let rng = GameRng::new(config.resolve_seed());
        info!("loaded game with seed {} and score {}", rng.seed(), config.initial_score);
        Ok(Self::with_board(board, config.initial_score, rng))
    }

    /// Wrap an existing board. Values are trusted as given.
    #[must_use]
    pub fn with_board(board: Board, score: u64, rng: GameRng) -> Self {
        let board_is_full = board.is_full();
        Self {
            board,
            score,
            rng,
            board_is_full,
            tiles_moved: false,
            status: GameStatus::Playing,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The most recent move relocated or fused at least one tile.
    #[must_use]
    pub fn tiles_moved(&self) -> bool {
        self.tiles_moved
    }

    /// Fullness as of the last terminal check or spawn.
    #[must_use]
    pub fn board_is_full(&self) -> bool {
        self.board_is_full
    }

    /// Board values, score and seed for rendering.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView {
            cells: self.board.values(),
            score: self.score,
            seed: self.seed(),
        }
    }

    // === Turn Phases ===

    /// Movement phase.
    ///
    /// Applies the sweep, adds fused values to the score (saturating at
    /// `u64::MAX`) and records whether anything moved. Rejected without
    /// mutation once the game is lost.
    pub fn apply_move(&mut self, direction: Direction) -> Result<MoveOutcome> {
        if self.status.is_lost() {
            return Err(EngineError::GameOver);
        }

        self.tiles_moved = false;
        let outcome = shift(&mut self.board, direction);
        self.tiles_moved = outcome.moved;
        self.score = self.score.saturating_add(outcome.gained);

        debug!(
            "move {}: moved={} merges={} gained={} score={}",
            direction,
            outcome.moved,
            outcome.merges.len(),
            outcome.gained,
            self.score
        );
        Ok(outcome)
    }

    /// Movement phase from a raw `(dx, dy)` vector.
    pub fn apply_vector(&mut self, dx: i32, dy: i32) -> Result<MoveOutcome> {
        let direction = Direction::from_vector(dx, dy)?;
        self.apply_move(direction)
    }

    /// Spawn phase.
    ///
    /// Places one tile unless the last move changed nothing or the board is
    /// full. Returns where the tile landed.
    pub fn spawn_next_tile(&mut self) -> Result<Option<Position>> {
        self.board_is_full = self.board.is_full();
        if self.board_is_full || !self.tiles_moved {
            return Ok(None);
        }

        let pos = place_random_tile(&mut self.board, &mut self.rng)?;
        self.board_is_full = self.board.is_full();
        Ok(Some(pos))
    }

    /// Terminal check.
    ///
    /// Clears all fused flags and recomputes fullness, so it must run once
    /// per turn before the next move. Moves the game to `Lost` when the board
    /// is full and no orthogonal neighbours match.
    pub fn is_lost(&mut self) -> bool {
        let check = check_terminal(&mut self.board);
        self.board_is_full = check.board_is_full;

        if check.lost && !self.status.is_lost() {
            info!("game lost with score {}", self.score);
            self.status = GameStatus::Lost;
        }
        check.lost
    }

    /// Run a full turn: move, spawn, terminal check.
    pub fn turn(&mut self, direction: Direction) -> Result<TurnOutcome> {
        let outcome = self.apply_move(direction)?;
        let spawned = self.spawn_next_tile()?;
        self.is_lost();

        Ok(TurnOutcome {
            outcome,
            spawned,
            status: self.status,
        })
    }

    // === Queries ===

    /// Would `direction` change the board? Does not touch score or RNG.
    #[must_use]
    pub fn can_move(&self, direction: Direction) -> bool {
        would_move(&self.board, direction)
    }

    /// Directions that would change the board.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Direction> {
        Direction::ALL.into_iter().filter(|&d| self.can_move(d)).collect()
    }

    // === Restart ===

    /// Replace the board with a fresh two-tile opening.
    ///
    /// The generator restarts from the original seed, so the opening and any
    /// replayed move sequence match the original game exactly.
    pub fn restart(&mut self) {
        self.rng.reset();
        self.board = seed_board(&mut self.rng);
        self.score = 0;
        self.board_is_full = false;
        self.tiles_moved = false;
        self.status = GameStatus::Playing;
        info!("restarted game with seed {}", self.rng.seed());
    }
}
