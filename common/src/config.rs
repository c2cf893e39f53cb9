use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TICK_INTERVAL_MS, GameError, Grid,
    MAX_GRID_HEIGHT, MAX_GRID_WIDTH, Result,
};

/// Settings for a game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Width of the grid in cells
    pub width: u16,
    /// Height of the grid in cells
    pub height: u16,
    /// Time between two ticks
    pub tick_interval_ms: u64,
    /// Seed for food and spawn placement; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.width, self.height)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// The grid must fit a two-cell snake plus one food cell, and stay
    /// within `MAX_GRID_WIDTH` x `MAX_GRID_HEIGHT`.
    pub fn validate(&self) -> Result<()> {
        if self.width < 2 {
            return Err(GameError::InvalidConfig("width must be at least 2"));
        }
        if self.height < 1 {
            return Err(GameError::InvalidConfig("height must be at least 1"));
        }
        if self.width > MAX_GRID_WIDTH {
            return Err(GameError::InvalidConfig("width exceeds the maximum"));
        }
        if self.height > MAX_GRID_HEIGHT {
            return Err(GameError::InvalidConfig("height exceeds the maximum"));
        }
        if self.grid().cell_count() < 3 {
            return Err(GameError::InvalidConfig("grid must have at least 3 cells"));
        }
        if self.tick_interval_ms == 0 {
            return Err(GameError::InvalidConfig("tick interval must be non-zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.width, 20);
        assert_eq!(config.height, 20);
        assert_eq!(config.tick_interval(), Duration::from_millis(250));
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_degenerate_grids() {
        assert!(GameConfig::new(1, 10).validate().is_err());
        assert!(GameConfig::new(10, 0).validate().is_err());
        assert!(GameConfig::new(2, 1).validate().is_err());
        assert!(GameConfig::new(3, 1).validate().is_ok());
    }

    #[test]
    fn test_rejects_oversized_grids() {
        assert!(GameConfig::new(MAX_GRID_WIDTH, MAX_GRID_HEIGHT).validate().is_ok());
        assert_eq!(
            GameConfig::new(MAX_GRID_WIDTH + 1, 10).validate(),
            Err(GameError::InvalidConfig("width exceeds the maximum"))
        );
        assert_eq!(
            GameConfig::new(10, MAX_GRID_HEIGHT + 1).validate(),
            Err(GameError::InvalidConfig("height exceeds the maximum"))
        );
        assert!(GameConfig::new(32760, 3).validate().is_err());
        assert!(GameConfig::new(u16::MAX, u16::MAX).validate().is_err());
    }

    #[test]
    fn test_rejects_zero_tick_interval() {
        let config = GameConfig {
            tick_interval_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(GameError::InvalidConfig("tick interval must be non-zero"))
        );
    }
}
