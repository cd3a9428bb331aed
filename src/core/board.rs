//! The 4×4 board: tiles, positions, and the persisted text format.
//!
//! ## Tile
//!
//! A value (0 for empty, otherwise a power of two) plus a transient
//! fused-this-move flag. The flag only has meaning while a move is being
//! applied and is cleared by every terminal-state check.
//!
//! ## Text format
//!
//! Exactly 4 lines of 4 whitespace-separated non-negative integers, no
//! header and no metadata. `Board` parses it via `FromStr` and produces it
//! via `Display`:
//!
//! ```
//! use tile_fusion::core::Board;
//!
//! let text = "2 0 0 0\n0 4 0 0\n0 0 8 0\n0 0 0 16\n";
//! let board: Board = text.parse().unwrap();
//! assert_eq!(board.values()[3][3], 16);
//! assert_eq!(board.to_string(), text);
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::direction::Direction;
use super::error::LoadError;

/// Board width and height.
pub const BOARD_SIZE: usize = 4;

/// Value of an empty cell.
pub const EMPTY: u32 = 0;

/// A single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Tile value, `EMPTY` for an empty cell.
    pub value: u32,
    /// Produced by a fusion during the current move.
    pub fused: bool,
}

impl Tile {
    /// Create an unfused tile.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self { value, fused: false }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.value == EMPTY
    }

    /// Can `self` fuse into `other`?
    ///
    /// Same non-empty value, `other` not fused this move, and the doubled
    /// value fits in a `u32`. Movement and loss detection share this rule.
    #[must_use]
    pub fn fuses_with(self, other: Tile) -> bool {
        !self.is_empty() && !other.fused && self.value == other.value && self.value.checked_mul(2).is_some()
    }
}

/// Board coordinate, always inside `[0,3]×[0,3]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a position.
    ///
    /// Panics if either coordinate is off the board.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "position ({row}, {col}) is off the board");
        Self { row, col }
    }

    /// Neighbouring position one step in `direction`, or `None` at the edge.
    #[must_use]
    pub fn offset(self, direction: Direction) -> Option<Position> {
        let (dx, dy) = direction.vector();
        let row = self.row.checked_add_signed(dy as isize)?;
        let col = self.col.checked_add_signed(dx as isize)?;
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Position { row, col })
    }

    /// Iterate over all 16 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Fixed 4×4 grid of tiles indexed by `(row, col)`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Tile; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an all-empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from raw values. All fused flags are cleared.
    ///
    /// Values are taken as-is; use `Board::from_str` for validated input.
    #[must_use]
    pub fn from_values(values: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self {
            cells: values.map(|row| row.map(Tile::new)),
        }
    }

    /// Get a tile.
    #[must_use]
    pub fn get(&self, pos: Position) -> Tile {
        self.cells[pos.row][pos.col]
    }

    /// Replace a tile.
    pub fn set(&mut self, pos: Position, tile: Tile) {
        self.cells[pos.row][pos.col] = tile;
    }

    /// Set an unfused value.
    pub fn set_value(&mut self, pos: Position, value: u32) {
        self.set(pos, Tile::new(value));
    }

    /// All tile values, 0 for empty.
    #[must_use]
    pub fn values(&self) -> [[u32; BOARD_SIZE]; BOARD_SIZE] {
        self.cells.map(|row| row.map(|t| t.value))
    }

    /// No cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|t| !t.is_empty())
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|t| t.is_empty()).count()
    }

    /// Largest tile value, 0 on an empty board.
    #[must_use]
    pub fn max_value(&self) -> u32 {
        self.cells.iter().flatten().map(|t| t.value).max().unwrap_or(EMPTY)
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.cells.iter().flatten().map(|t| u64::from(t.value)).sum()
    }

    /// Clear every fused flag.
    pub fn clear_fused(&mut self) {
        for tile in self.cells.iter_mut().flatten() {
            tile.fused = false;
        }
    }

    /// Check that every value is 0 or a power of two.
    pub fn validate(&self) -> Result<(), LoadError> {
        match Position::all().find(|&p| {
            let value = self.get(p).value;
            value != EMPTY && !value.is_power_of_two()
        }) {
            Some(p) => Err(LoadError::NotPowerOfTwo {
                row: p.row,
                col: p.col,
                value: self.get(p).value,
            }),
            None => Ok(()),
        }
    }

    /// Positions of fused tiles.
    pub fn fused_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(|&p| self.get(p).fused)
    }
}

impl FromStr for Board {
    type Err = LoadError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        if rows.len() != BOARD_SIZE {
            return Err(LoadError::RowCount { found: rows.len() });
        }

        let mut values = [[EMPTY; BOARD_SIZE]; BOARD_SIZE];
        for (row, line) in rows.iter().enumerate() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != BOARD_SIZE {
                return Err(LoadError::ColumnCount { row, found: tokens.len() });
            }

            for (col, token) in tokens.iter().enumerate() {
                let value: u32 = token.parse().map_err(|_| LoadError::InvalidToken {
                    row,
                    col,
                    token: (*token).to_string(),
                })?;
                values[row][col] = value;
            }
        }

        let board = Self::from_values(values);
        board.validate()?;
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|t| t.value.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
