//! Move directions and their lookup tables.
//!
//! Every direction maps to an axis and an orientation. Compaction always merges
//! toward the start of a line, so a "reversed" direction is handled by
//! reversing each line before and after compaction.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::BoardError;

/// A direction to slide/merge tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Which lines of the grid a direction compacts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Rows,
    Columns,
}

/// Axis and orientation for one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub axis: Axis,
    pub reversed: bool,
}

impl Direction {
    /// All directions, in canonical order.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Axis and orientation for this direction.
    #[must_use]
    pub const fn transition(self) -> Transition {
        match self {
            Direction::Up => Transition { axis: Axis::Columns, reversed: false },
            Direction::Down => Transition { axis: Axis::Columns, reversed: true },
            Direction::Left => Transition { axis: Axis::Rows, reversed: false },
            Direction::Right => Transition { axis: Axis::Rows, reversed: true },
        }
    }

    /// Canonical lower-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Canonical name lookup (case-sensitive, no aliases).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Single-letter keyboard alias lookup (`w`, `s`, `a`, `d`).
    #[must_use]
    pub fn from_alias(alias: &str) -> Option<Self> {
        match alias {
            "w" => Some(Direction::Up),
            "s" => Some(Direction::Down),
            "a" => Some(Direction::Left),
            "d" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Resolve free-form user input to a direction.
    ///
    /// Input is trimmed and lower-cased, then matched against aliases and
    /// canonical names. Returns `None` for anything else.
    #[must_use]
    pub fn resolve(token: &str) -> Option<Self> {
        let token = token.trim().to_lowercase();
        Self::from_alias(&token).or_else(|| Self::from_name(&token))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| BoardError::InvalidDirection(s.to_string()))
    }
}
