//! Builder for fresh games.

use log::debug;

use super::session::Game;
use crate::board::Board;
use crate::core::{GameConfig, GameError, GameRng};

/// Builder for creating a [`Game`] on a fresh board.
///
/// ```
/// use twenty48::game::GameBuilder;
///
/// let game = GameBuilder::new().size(4).seed(7).build().unwrap();
/// assert_eq!(game.board().empty_cells().len(), 14);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn size(mut self, size: usize) -> Self {
        self.config.size = size;
        self
    }

    pub fn win_token(mut self, token: u32) -> Self {
        self.config.win_token = token;
        self
    }

    pub fn high_tile_probability(mut self, probability: f64) -> Self {
        self.config.high_tile_probability = probability;
        self
    }

    pub fn initial_tiles(mut self, tiles: usize) -> Self {
        self.config.initial_tiles = tiles;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Configuration the game will be built from.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Validate the configuration, create the board and spawn the initial tiles.
    ///
    /// If an initial tile is already the winning token the game starts won.
    pub fn build(self) -> Result<Game<GameRng>, GameError> {
        self.config.validate()?;
        let scale = self.config.scale()?;
        let mut board = Board::new(self.config.size, scale)?;
        let mut rng = GameRng::new(self.config.seed);

        for _ in 0..self.config.initial_tiles {
            board.spawn_weighted_tile(&mut rng, self.config.high_tile_probability, None, None)?;
        }
        debug!(
            "new {}x{} game, seed {}",
            self.config.size, self.config.size, self.config.seed
        );

        Ok(Game::with_board(board, rng).with_high_tile_probability(self.config.high_tile_probability)?)
    }
}
