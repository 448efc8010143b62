//! One-dimensional compaction: gravity, merge, pad.
//!
//! Compaction always merges toward the start of the line. Callers that need
//! the opposite orientation reverse the line before and after.

use smallvec::SmallVec;

use crate::core::{TokenError, TokenScale};

/// A row or column extracted from the grid.
///
/// Boards up to 8 wide stay on the stack.
pub type Line = SmallVec<[u32; 8]>;

/// Result of compacting one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Compaction {
    /// Compacted values, padded with zeros to the requested width.
    pub line: Line,
    /// Sum of the tokens produced by merges.
    pub score: u64,
}

/// Compact `line` toward its start and pad it to `width`.
///
/// Zeros are dropped first, then the non-zero values are scanned once with a
/// read and a write cursor. Two adjacent equal values collapse into their
/// successor; the merged tile is never merged again in the same pass. Two
/// maximum tokens stay side by side.
///
/// Returns `TokenError::Unknown` if a merge candidate is not in `scale`.
pub fn compact(line: &[u32], width: usize, scale: &TokenScale) -> Result<Compaction, TokenError> {
    let mut cells: Line = line.iter().copied().filter(|&v| v != 0).collect();
    let mut score = 0u64;

    let mut read = 0;
    let mut write = 0;
    while read < cells.len() {
        let value = cells[read];
        if read + 1 < cells.len() && cells[read + 1] == value {
            match scale.successor(value) {
                Ok(next) => {
                    cells[write] = next;
                    score += u64::from(next);
                    write += 1;
                    read += 2;
                    continue;
                }
                Err(TokenError::Saturated(_)) => {}
                Err(e) => return Err(e),
            }
        }
        cells[write] = value;
        write += 1;
        read += 1;
    }

    cells.truncate(write);
    if cells.len() < width {
        cells.resize(width, 0);
    }

    Ok(Compaction { line: cells, score })
}
