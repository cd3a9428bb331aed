//! Error types for loading boards and driving the engine.
//!
//! Loss is a normal terminal status, not an error. Errors here are either
//! malformed external input (`LoadError`) or caller mistakes (`EngineError`).

use thiserror::Error;

/// Malformed persisted board text.
///
/// Returned before any `Game` is constructed, so a failed load never leaves
/// a partially initialized game behind.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The text does not contain exactly 4 rows.
    #[error("expected 4 rows, found {found}")]
    RowCount { found: usize },

    /// A row does not contain exactly 4 values.
    #[error("row {row}: expected 4 values, found {found}")]
    ColumnCount { row: usize, found: usize },

    /// A token is not a non-negative integer.
    #[error("row {row}, column {col}: invalid tile value {token:?}")]
    InvalidToken { row: usize, col: usize, token: String },

    /// A non-zero value that is not a power of two.
    #[error("row {row}, column {col}: {value} is not a power of two")]
    NotPowerOfTwo { row: usize, col: usize, value: u32 },
}

/// Engine-level errors.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Move vector is not one of the four unit directions.
    #[error("invalid move vector ({dx}, {dy})")]
    InvalidDirection { dx: i32, dy: i32 },

    /// A move was submitted after the game was lost.
    #[error("game is over")]
    GameOver,

    /// A tile placement was requested on a board with no empty cell.
    #[error("board is full")]
    BoardFull,

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("snapshot encoding failed: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_messages() {
        let err = LoadError::ColumnCount { row: 2, found: 3 };
        assert_eq!(err.to_string(), "row 2: expected 4 values, found 3");

        let err = LoadError::InvalidToken { row: 0, col: 1, token: "x".to_string() };
        assert_eq!(err.to_string(), "row 0, column 1: invalid tile value \"x\"");
    }

    #[test]
    fn test_load_error_converts() {
        let err: EngineError = LoadError::RowCount { found: 5 }.into();
        assert!(matches!(err, EngineError::Load(LoadError::RowCount { found: 5 })));
        assert_eq!(err.to_string(), "expected 4 rows, found 5");
    }
}
