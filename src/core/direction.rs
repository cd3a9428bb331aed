//! Move directions.
//!
//! A move is one of four unit vectors `(dx, dy)`, with `x` growing to the
//! right and `y` growing downwards:
//! - Left = `(-1, 0)`
//! - Right = `(1, 0)`
//! - Up = `(0, -1)`
//! - Down = `(0, 1)`
//!
//! The engine never interprets raw keys; input collaborators map keys to a
//! `Direction` (or a raw vector, validated by `Direction::from_vector`).

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

const ASCENDING: [usize; 4] = [0, 1, 2, 3];
const DESCENDING: [usize; 4] = [3, 2, 1, 0];

/// One of the four legal move directions.
///
/// ## Example
///
/// ```
/// use tile_fusion::core::Direction;
///
/// assert_eq!(Direction::Left.vector(), (-1, 0));
/// assert_eq!(Direction::from_vector(0, 1).unwrap(), Direction::Down);
/// assert!(Direction::from_vector(1, 1).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    /// Get the `(dx, dy)` unit vector.
    #[must_use]
    pub const fn vector(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Validate a raw move vector.
    ///
    /// Anything other than the four unit vectors is a caller error.
    pub fn from_vector(dx: i32, dy: i32) -> Result<Self> {
        match (dx, dy) {
            (-1, 0) => Ok(Direction::Left),
            (1, 0) => Ok(Direction::Right),
            (0, -1) => Ok(Direction::Up),
            (0, 1) => Ok(Direction::Down),
            _ => Err(EngineError::InvalidDirection { dx, dy }),
        }
    }

    /// Row visiting order for a sweep.
    ///
    /// Top-down when moving up, bottom-up otherwise.
    #[must_use]
    pub const fn row_order(self) -> [usize; 4] {
        match self {
            Direction::Up => ASCENDING,
            _ => DESCENDING,
        }
    }

    /// Column visiting order for a sweep.
    ///
    /// Left-to-right when moving left, right-to-left otherwise.
    #[must_use]
    pub const fn col_order(self) -> [usize; 4] {
        match self {
            Direction::Left => ASCENDING,
            _ => DESCENDING,
        }
    }

    /// Lowercase name, as used by input collaborators and bindings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Parse a lowercase direction name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.name() == name)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_roundtrip() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.vector();
            assert_eq!(Direction::from_vector(dx, dy).unwrap(), dir);
        }
    }

    #[test]
    fn test_invalid_vectors() {
        for (dx, dy) in [(0, 0), (1, 1), (-1, -1), (2, 0), (0, -2)] {
            let err = Direction::from_vector(dx, dy).unwrap_err();
            assert!(matches!(err, EngineError::InvalidDirection { .. }));
        }
    }

    #[test]
    fn test_sweep_orders_start_at_target_edge() {
        assert_eq!(Direction::Up.row_order(), [0, 1, 2, 3]);
        assert_eq!(Direction::Down.row_order(), [3, 2, 1, 0]);
        assert_eq!(Direction::Left.col_order(), [0, 1, 2, 3]);
        assert_eq!(Direction::Right.col_order(), [3, 2, 1, 0]);
    }

    #[test]
    fn test_names() {
        assert_eq!(Direction::Right.to_string(), "right");
        assert_eq!(Direction::from_name("up"), Some(Direction::Up));
        assert_eq!(Direction::from_name("north"), None);
    }
}
