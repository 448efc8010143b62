//! Error types for every layer of the engine.
//!
//! Each layer owns its error enum and converts the layer below via `#[from]`:
//! `TokenError` → `BoardError` → `GameError`.

use thiserror::Error;

/// Errors raised by token scale lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// A cell holds a value outside the token scale. Indicates corrupted state.
    #[error("invalid token: {0}")]
    Unknown(u32),

    /// The value is the scale maximum and has no successor.
    #[error("token {0} is the maximum of its scale")]
    Saturated(u32),

    /// A scale cannot be built with this maximum.
    #[error("invalid scale maximum {0}: must be a power of two >= 4")]
    InvalidMaximum(u32),
}

/// Errors raised by board construction and transformation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoardError {
    #[error("board size must be at least 1")]
    InvalidSize,

    #[error("cell count mismatch: expected {expected}, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("cell {index} holds {value}, which is not a token")]
    InvalidCell { index: usize, value: u32 },

    #[error("line index {index} out of range for size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("invalid move: {0}")]
    InvalidDirection(String),

    #[error("spawn slot {slot} out of range ({empty} empty cells)")]
    SlotOutOfRange { slot: usize, empty: usize },

    #[error("spawn probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Errors raised while validating a `GameConfig`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("board size must be between 1 and {max}, got {size}")]
    InvalidSize { size: usize, max: usize },

    #[error("invalid win token: {0}")]
    InvalidWinToken(#[from] TokenError),

    #[error("high tile probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("cannot place {tiles} initial tiles on a board of {cells} cells")]
    TooManyInitialTiles { tiles: usize, cells: usize },
}

/// Errors raised by the game loop.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    /// Input did not name a direction. The move is skipped.
    #[error("not a legal direction: {0:?}")]
    InvalidDirection(String),

    /// The game already reached a terminal state.
    #[error("game is over")]
    GameOver,

    #[error("board error: {0}")]
    Board(#[from] BoardError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl GameError {
    /// Whether the game can continue after this error.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::InvalidDirection(_))
    }
}

/// Result alias for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
