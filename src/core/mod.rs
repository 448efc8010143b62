//! Core engine types: tokens, directions, RNG, configuration, errors.
//!
//! Everything here is shared by the board and the game loop and has no
//! dependency on either.

pub mod config;
pub mod direction;
pub mod error;
pub mod rng;
pub mod token;

pub use config::{GameConfig, MAX_BOARD_SIZE};
pub use direction::{Axis, Direction, Transition};
pub use error::{BoardError, BoardResult, ConfigError, GameError, TokenError};
pub use rng::{GameRng, GameRngState, TileRng};
pub use token::{TokenScale, DEFAULT_MAX_TOKEN};
