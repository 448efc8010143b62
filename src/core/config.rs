//! Game configuration.
//!
//! A `GameConfig` fixes everything a game needs at startup:
//! - Grid dimension (square)
//! - Winning token, which bounds the token scale
//! - Spawn probabilities and number of initial tiles
//! - RNG seed
//!
//! Builder methods mirror the fields; `validate` checks them all at once.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::token::{TokenScale, DEFAULT_MAX_TOKEN};

/// Largest supported grid dimension.
pub const MAX_BOARD_SIZE: usize = 16;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid dimension; the board is `size × size`.
    pub size: usize,

    /// Winning token. Also the top of the token scale.
    pub win_token: u32,

    /// Probability that a spawned tile is the second-lowest token (4)
    /// instead of the lowest (2).
    pub high_tile_probability: f64,

    /// Tiles placed on a fresh board.
    pub initial_tiles: usize,

    /// Seed for the spawn RNG.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: 4,
            win_token: DEFAULT_MAX_TOKEN,
            high_tile_probability: 0.1,
            initial_tiles: 2,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Create a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid dimension.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the winning token.
    #[must_use]
    pub fn with_win_token(mut self, token: u32) -> Self {
        self.win_token = token;
        self
    }

    /// Set the probability of spawning the second-lowest token.
    #[must_use]
    pub fn with_high_tile_probability(mut self, probability: f64) -> Self {
        self.high_tile_probability = probability;
        self
    }

    /// Set the number of tiles on a fresh board.
    #[must_use]
    pub fn with_initial_tiles(mut self, tiles: usize) -> Self {
        self.initial_tiles = tiles;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Token scale implied by `win_token`.
    pub fn scale(&self) -> Result<TokenScale, ConfigError> {
        Ok(TokenScale::new(self.win_token)?)
    }

    /// Check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 || self.size > MAX_BOARD_SIZE {
            return Err(ConfigError::InvalidSize {
                size: self.size,
                max: MAX_BOARD_SIZE,
            });
        }
        self.scale()?;
        if !(0.0..=1.0).contains(&self.high_tile_probability) {
            return Err(ConfigError::InvalidProbability(self.high_tile_probability));
        }
        let cells = self.size * self.size;
        if self.initial_tiles > cells {
            return Err(ConfigError::TooManyInitialTiles {
                tiles: self.initial_tiles,
                cells,
            });
        }
        Ok(())
    }
}
