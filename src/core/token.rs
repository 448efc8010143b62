//! Token scale: the bounded power-of-two progression tiles merge along.
//!
//! The scale is `[2, 4, 8, ..., max]`. Each token merges into the next one;
//! the maximum is the winning token and has no successor.

use serde::{Deserialize, Serialize};

use super::error::TokenError;

/// Default winning token.
pub const DEFAULT_MAX_TOKEN: u32 = 2048;

/// Ordered power-of-two progression of valid tile values.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TokenScale {
    max: u32,
}

impl TokenScale {
    /// Create a scale from 2 up to `max` inclusive.
    ///
    /// `max` must be a power of two of at least 4 so the scale has both a
    /// lowest and a second-lowest token.
    pub fn new(max: u32) -> Result<Self, TokenError> {
        if max < 4 || !max.is_power_of_two() {
            return Err(TokenError::InvalidMaximum(max));
        }
        Ok(Self { max })
    }

    /// Lowest token (always 2).
    #[must_use]
    pub const fn lowest(&self) -> u32 {
        2
    }

    /// Second-lowest token (always 4).
    #[must_use]
    pub const fn second_lowest(&self) -> u32 {
        4
    }

    /// Maximum (winning) token.
    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Number of tokens in the scale.
    #[must_use]
    pub fn len(&self) -> usize {
        self.max.trailing_zeros() as usize
    }

    /// A scale always holds at least two tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `value` is a token of this scale.
    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        value >= 2 && value <= self.max && value.is_power_of_two()
    }

    /// Position of `value` in the scale.
    pub fn position(&self, value: u32) -> Result<usize, TokenError> {
        if !self.contains(value) {
            return Err(TokenError::Unknown(value));
        }
        Ok(value.trailing_zeros() as usize - 1)
    }

    /// Next-tier token for `value`.
    pub fn successor(&self, value: u32) -> Result<u32, TokenError> {
        if !self.contains(value) {
            return Err(TokenError::Unknown(value));
        }
        if value == self.max {
            return Err(TokenError::Saturated(value));
        }
        Ok(value << 1)
    }

    /// Iterate tokens in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (1..=self.len()).map(|exp| 1u32 << exp)
    }
}

impl Default for TokenScale {
    fn default() -> Self {
        Self { max: DEFAULT_MAX_TOKEN }
    }
}

impl TryFrom<u32> for TokenScale {
    type Error = TokenError;

    fn try_from(max: u32) -> Result<Self, Self::Error> {
        Self::new(max)
    }
}

impl From<TokenScale> for u32 {
    fn from(scale: TokenScale) -> Self {
        scale.max
    }
}
