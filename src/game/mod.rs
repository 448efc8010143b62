//! Turn-based play on top of a [`Board`](crate::board::Board).
//!
//! A `Game` maps user input to directions, drives the board through one move
//! at a time, tracks move count and score, and stops at a terminal result.

mod builder;
mod session;

pub use builder::GameBuilder;
pub use session::{Game, MoveOutcome};
