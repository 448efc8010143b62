//! # twenty48
//!
//! Engine for the sliding-tile merge puzzle 2048.
//!
//! ## Design
//!
//! 1. **One compaction routine**: every direction is reduced to "merge toward
//!    the start of a line" by choosing rows or columns and optionally
//!    reversing each line around the compaction.
//!
//! 2. **Injected randomness**: spawns draw from a [`TileRng`]; [`GameRng`]
//!    is a seeded ChaCha8 stream, so a seed fully determines a game.
//!
//! 3. **Errors over panics**: malformed boards, off-scale tokens and bad input
//!    are typed errors. Only invalid direction input is recoverable.
//!
//! ## Modules
//!
//! - `core`: tokens, directions, RNG, configuration, errors
//! - `board`: grid storage, line compaction, transforms, spawning
//! - `rules`: win/loss predicates
//! - `game`: turn sequencing and the game builder
//! - `shell`: line-based terminal loop
//!
//! ```
//! use twenty48::{Board, Direction, TokenScale};
//!
//! let mut board = Board::from_cells(2, vec![2, 2, 2, 2], TokenScale::default()).unwrap();
//! board.transform(Direction::Left).unwrap();
//! assert_eq!(board.cells(), &[4, 0, 4, 0]);
//! ```

pub mod board;
pub mod core;
pub mod game;
pub mod rules;
pub mod shell;

// Re-export commonly used types
pub use crate::core::{
    Axis, BoardError, ConfigError, Direction, GameConfig, GameError, GameRng, GameRngState,
    TileRng, TokenError, TokenScale, Transition,
};

pub use crate::board::{compact, Board, Compaction, Line, Shift, Spawn};

pub use crate::rules::GameResult;

pub use crate::game::{Game, GameBuilder, MoveOutcome};

pub use crate::shell::{SessionEnd, ShellError};
