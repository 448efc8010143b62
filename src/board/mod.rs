//! The grid and everything positional: line extraction, compaction,
//! directional transforms and tile spawning.

mod grid;
mod line;

pub use grid::{Board, Shift, Spawn, DEFAULT_HIGH_TILE_PROBABILITY};
pub use line::{compact, Compaction, Line};
