//! Terminal-state rules.
//!
//! The game loop asks these predicates whether a board is won or lost; they
//! never mutate the board.

pub mod engine;

pub use engine::{evaluate, is_lost, is_stalemate, is_won, GameResult};
