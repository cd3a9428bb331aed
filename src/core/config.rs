//! Game configuration.
//!
//! Callers configure a game at startup with a `GameConfig`:
//! - `seed`: generator seed; `None` derives one from the current time
//! - `initial_score`: starting score, mainly for loaded games
//!
//! ```
//! use tile_fusion::core::GameConfig;
//!
//! let config = GameConfig::new().with_seed(42).with_score(128);
//! assert_eq!(config.resolve_seed(), 42);
//! assert_eq!(config.initial_score, 128);
//! ```

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use super::board::BOARD_SIZE;

/// Sides on the spawn die. A roll of 0 spawns a 4, any other roll a 2.
pub const SPAWN_DIE_SIDES: u32 = 10;

/// Value spawned on most rolls.
pub const COMMON_SPAWN: u32 = 2;

/// Value spawned on a roll of 0.
pub const RARE_SPAWN: u32 = 4;

/// Tiles placed on a fresh board.
pub const INITIAL_TILES: usize = 2;

const _: () = assert!(INITIAL_TILES < BOARD_SIZE * BOARD_SIZE);

/// Startup configuration for a `Game`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Generator seed. `None` uses the current Unix time in seconds.
    ///
    /// Integer seeds only; a fractional seed must be converted by the caller.
    pub seed: Option<u64>,

    /// Score the game starts with.
    pub initial_score: u64,
}

impl GameConfig {
    /// Create a configuration with a time-based seed and zero score.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the starting score.
    #[must_use]
    pub fn with_score(mut self, score: u64) -> Self {
        self.initial_score = score;
        self
    }

    /// The configured seed, or the current time if none was set.
    #[must_use]
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(time_seed)
    }
}

/// Current Unix time in seconds.
#[must_use]
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.seed, None);
        assert_eq!(config.initial_score, 0);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new().with_seed(7).with_score(1000);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.initial_score, 1000);
        assert_eq!(config.resolve_seed(), 7);
    }

    #[test]
    fn test_time_seed_fallback() {
        let config = GameConfig::new();
        assert!(config.resolve_seed() > 0);
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new().with_seed(5).with_score(64);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
