//! Square grid of tokens and its directional transformations.

use std::fmt;

use log::{debug, trace};

use super::line::{compact, Compaction, Line};
use crate::core::{
    Axis, BoardError, BoardResult, Direction, TileRng, TokenError, TokenScale,
};

/// Default probability that a spawned tile is the second-lowest token.
pub const DEFAULT_HIGH_TILE_PROBABILITY: f64 = 0.1;

/// Result of a board transformation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shift {
    /// Grid after the move, row-major.
    pub grid: Vec<u32>,
    /// Sum of the tokens produced by merges.
    pub score: u64,
    /// Whether any cell changed position or value.
    pub changed: bool,
}

/// A tile placed by a spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spawn {
    /// Absolute cell index (row-major).
    pub index: usize,
    /// Token placed.
    pub value: u32,
}

/// `size × size` grid of tokens, row-major, `0` for empty.
///
/// Cells are only mutated by [`Board::transform`] and the spawn methods, so
/// `cells.len() == size * size` always holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<u32>,
    scale: TokenScale,
}

impl Board {
    /// Create an empty board.
    pub fn new(size: usize, scale: TokenScale) -> BoardResult<Self> {
        if size == 0 {
            return Err(BoardError::InvalidSize);
        }
        Ok(Self {
            size,
            cells: vec![0; size * size],
            scale,
        })
    }

    /// Create a board from row-major cells.
    ///
    /// Rejects a cell count other than `size * size` and any non-zero value
    /// outside `scale`.
    pub fn from_cells(size: usize, cells: Vec<u32>, scale: TokenScale) -> BoardResult<Self> {
        if size == 0 {
            return Err(BoardError::InvalidSize);
        }
        let expected = size * size;
        if cells.len() != expected {
            return Err(BoardError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        if let Some((index, &value)) = cells
            .iter()
            .enumerate()
            .find(|(_, &v)| v != 0 && !scale.contains(v))
        {
            return Err(BoardError::InvalidCell { index, value });
        }
        Ok(Self { size, cells, scale })
    }

    /// Grid dimension.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major cells.
    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Token scale of this board.
    #[must_use]
    pub fn scale(&self) -> &TokenScale {
        &self.scale
    }

    /// Value at `(row, col)`.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<u32> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.cells[row * self.size + col])
    }

    /// Values of row `index`, left to right.
    pub fn get_row(&self, index: usize) -> BoardResult<Line> {
        self.check_index(index)?;
        let start = index * self.size;
        Ok(self.cells[start..start + self.size].iter().copied().collect())
    }

    /// Values of column `index`, top to bottom.
    pub fn get_column(&self, index: usize) -> BoardResult<Line> {
        self.check_index(index)?;
        Ok(self.cells.iter().skip(index).step_by(self.size).copied().collect())
    }

    fn check_index(&self, index: usize) -> BoardResult<()> {
        if index >= self.size {
            return Err(BoardError::IndexOutOfRange {
                index,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Next-tier token for `token`.
    pub fn token_successor(&self, token: u32) -> BoardResult<u32> {
        Ok(self.scale.successor(token)?)
    }

    /// Compact `line` toward its start, padded to the board size.
    pub fn compact_line(&self, line: &[u32]) -> BoardResult<Line> {
        Ok(self.compact_line_scored(line)?.line)
    }

    /// Like [`Board::compact_line`], also reporting the merge score.
    pub fn compact_line_scored(&self, line: &[u32]) -> BoardResult<Compaction> {
        Ok(compact(line, self.size, &self.scale)?)
    }

    /// Grid that moving in `direction` would produce, without applying it.
    pub fn shifted(&self, direction: Direction) -> BoardResult<Shift> {
        let transition = direction.transition();

        let mut lines = Vec::with_capacity(self.size);
        for index in 0..self.size {
            let line = match transition.axis {
                Axis::Rows => self.get_row(index)?,
                Axis::Columns => self.get_column(index)?,
            };
            lines.push(line);
        }

        let mut score = 0;
        for line in &mut lines {
            if transition.reversed {
                line.reverse();
            }
            let Compaction { line: mut compacted, score: gained } = self.compact_line_scored(&line[..])?;
            if transition.reversed {
                compacted.reverse();
            }
            *line = compacted;
            score += gained;
        }

        let mut grid = vec![0; self.size * self.size];
        for (index, line) in lines.iter().enumerate() {
            for (offset, &value) in line.iter().enumerate() {
                let cell = match transition.axis {
                    Axis::Rows => index * self.size + offset,
                    Axis::Columns => offset * self.size + index,
                };
                grid[cell] = value;
            }
        }

        let changed = grid != self.cells;
        Ok(Shift { grid, score, changed })
    }

    /// Slide and merge every line in `direction`.
    ///
    /// The board's cells become the returned grid. On error the board is left
    /// unchanged.
    pub fn transform(&mut self, direction: Direction) -> BoardResult<Shift> {
        let shift = self.shifted(direction)?;
        trace!(
            "transform {}: changed={} score={}",
            direction,
            shift.changed,
            shift.score
        );
        self.cells.clone_from(&shift.grid);
        Ok(shift)
    }

    /// Like [`Board::transform`] but takes a canonical direction name.
    pub fn transform_named(&mut self, direction: &str) -> BoardResult<Shift> {
        let direction: Direction = direction.parse()?;
        self.transform(direction)
    }

    /// Replace the grid with a previous snapshot of the same board.
    pub(crate) fn restore(&mut self, snapshot: Vec<u32>) {
        debug_assert_eq!(snapshot.len(), self.cells.len());
        self.cells = snapshot;
    }

    /// Indices of empty cells, ascending.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Whether any cell holds `token`.
    #[must_use]
    pub fn contains(&self, token: u32) -> bool {
        self.cells.contains(&token)
    }

    /// Highest value on the board (0 when empty).
    #[must_use]
    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Whether some direction would change the grid.
    ///
    /// True if a cell is empty or two orthogonal neighbours hold the same
    /// mergeable token.
    #[must_use]
    pub fn can_move(&self) -> bool {
        if !self.is_full() {
            return true;
        }
        let max = self.scale.max();
        for row in 0..self.size {
            for col in 0..self.size {
                let value = self.cells[row * self.size + col];
                if value == max {
                    continue;
                }
                if col + 1 < self.size && self.cells[row * self.size + col + 1] == value {
                    return true;
                }
                if row + 1 < self.size && self.cells[(row + 1) * self.size + col] == value {
                    return true;
                }
            }
        }
        false
    }

    /// Spawn a tile with the default 90/10 split between the two lowest tokens.
    ///
    /// `target_slot` indexes the list of empty cells (not the grid) and
    /// `value` fixes the token; either overrides the RNG. Returns `None`
    /// when the grid is full.
    pub fn spawn_random_tile<R: TileRng + ?Sized>(
        &mut self,
        rng: &mut R,
        target_slot: Option<usize>,
        value: Option<u32>,
    ) -> BoardResult<Option<Spawn>> {
        self.spawn_weighted_tile(rng, DEFAULT_HIGH_TILE_PROBABILITY, target_slot, value)
    }

    /// Spawn a tile, choosing the second-lowest token with `high_probability`.
    ///
    /// `high_probability` must lie in `[0, 1]`; NaN is rejected.
    pub fn spawn_weighted_tile<R: TileRng + ?Sized>(
        &mut self,
        rng: &mut R,
        high_probability: f64,
        target_slot: Option<usize>,
        value: Option<u32>,
    ) -> BoardResult<Option<Spawn>> {
        if !(0.0..=1.0).contains(&high_probability) {
            return Err(BoardError::InvalidProbability(high_probability));
        }
        if let Some(v) = value {
            if !self.scale.contains(v) {
                return Err(TokenError::Unknown(v).into());
            }
        }

        let empty = self.empty_cells();
        if empty.is_empty() {
            debug!("spawn skipped: board is full");
            return Ok(None);
        }

        let slot = match target_slot {
            Some(slot) if slot >= empty.len() => {
                return Err(BoardError::SlotOutOfRange {
                    slot,
                    empty: empty.len(),
                });
            }
            Some(slot) => slot,
            None => rng.pick_slot(empty.len()),
        };
        let value = value.unwrap_or_else(|| {
            if rng.chance(high_probability) {
                self.scale.second_lowest()
            } else {
                self.scale.lowest()
            }
        });

        let index = empty[slot];
        self.cells[index] = value;
        debug!("spawned {} at cell {}", value, index);
        Ok(Some(Spawn { index, value }))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.highest_tile().max(1).to_string().len();
        for row in self.cells.chunks(self.size) {
            let rendered: Vec<String> = row
                .iter()
                .map(|&v| {
                    if v == 0 {
                        format!("{:>width$}", ".", width = width)
                    } else {
                        format!("{:>width$}", v, width = width)
                    }
                })
                .collect();
            writeln!(f, "{}", rendered.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    fn board(size: usize, cells: &[u32]) -> Board {
        Board::from_cells(size, cells.to_vec(), TokenScale::default()).unwrap()
    }

    /// RNG that replays fixed answers.
    struct Scripted {
        slots: Vec<usize>,
        high: bool,
    }

    impl TileRng for Scripted {
        fn pick_slot(&mut self, len: usize) -> usize {
            let slot = self.slots.remove(0);
            assert!(slot < len);
            slot
        }

        fn chance(&mut self, _probability: f64) -> bool {
            self.high
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let b = Board::new(3, TokenScale::default()).unwrap();
        assert_eq!(b.cells(), &[0; 9]);
        assert_eq!(b.empty_cells().len(), 9);
        assert_eq!(Board::new(0, TokenScale::default()), Err(BoardError::InvalidSize));
    }

    #[test]
    fn test_from_cells_rejects_wrong_count() {
        let err = Board::from_cells(4, vec![0; 15], TokenScale::default()).unwrap_err();
        assert_eq!(err, BoardError::CellCountMismatch { expected: 16, actual: 15 });
    }

    #[test]
    fn test_from_cells_rejects_off_scale_values() {
        let err = Board::from_cells(2, vec![2, 3, 0, 0], TokenScale::default()).unwrap_err();
        assert_eq!(err, BoardError::InvalidCell { index: 1, value: 3 });
    }

    #[test]
    fn test_rows_and_columns() {
        let b = board(3, &[2, 4, 8, 16, 32, 64, 128, 256, 512]);
        assert_eq!(b.get_row(0).unwrap().to_vec(), vec![2, 4, 8]);
        assert_eq!(b.get_row(2).unwrap().to_vec(), vec![128, 256, 512]);
        assert_eq!(b.get_column(0).unwrap().to_vec(), vec![2, 16, 128]);
        assert_eq!(b.get_column(2).unwrap().to_vec(), vec![8, 64, 512]);
        assert_eq!(
            b.get_row(3),
            Err(BoardError::IndexOutOfRange { index: 3, size: 3 })
        );
        assert!(b.get_column(3).is_err());
        assert_eq!(b.cell(1, 2), Some(64));
        assert_eq!(b.cell(3, 0), None);
    }

    #[test]
    fn test_token_successor() {
        let b = board(2, &[0; 4]);
        assert_eq!(b.token_successor(1024), Ok(2048));
        assert_eq!(
            b.token_successor(5),
            Err(BoardError::Token(TokenError::Unknown(5)))
        );
    }

    #[test]
    fn test_transform_each_direction() {
        let cells = [
            2, 2, 0, 4, //
            0, 2, 0, 4, //
            0, 0, 8, 0, //
            2, 0, 8, 0,
        ];

        let mut left = board(4, &cells);
        left.transform(Direction::Left).unwrap();
        assert_eq!(
            left.cells(),
            &[4, 4, 0, 0, 2, 4, 0, 0, 8, 0, 0, 0, 2, 8, 0, 0]
        );

        let mut right = board(4, &cells);
        right.transform(Direction::Right).unwrap();
        assert_eq!(
            right.cells(),
            &[0, 0, 4, 4, 0, 0, 2, 4, 0, 0, 0, 8, 0, 0, 2, 8]
        );

        let mut up = board(4, &cells);
        up.transform(Direction::Up).unwrap();
        assert_eq!(
            up.cells(),
            &[4, 4, 16, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]
        );

        let mut down = board(4, &cells);
        down.transform(Direction::Down).unwrap();
        assert_eq!(
            down.cells(),
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4, 4, 16, 8]
        );
    }

    #[test]
    fn test_transform_reports_score_and_change() {
        let mut b = board(2, &[2, 2, 2, 2]);
        let shift = b.transform(Direction::Left).unwrap();
        assert_eq!(shift.grid, vec![4, 0, 4, 0]);
        assert_eq!(shift.score, 8);
        assert!(shift.changed);

        let shift = b.transform(Direction::Left).unwrap();
        assert!(!shift.changed);
        assert_eq!(shift.score, 0);
    }

    #[test]
    fn test_transform_named() {
        let mut b = board(2, &[0, 2, 0, 0]);
        b.transform_named("left").unwrap();
        assert_eq!(b.cells(), &[2, 0, 0, 0]);

        let err = b.transform_named("sideways").unwrap_err();
        assert_eq!(err, BoardError::InvalidDirection("sideways".to_string()));
        assert_eq!(b.cells(), &[2, 0, 0, 0]);
    }

    #[test]
    fn test_shifted_does_not_mutate() {
        let b = board(2, &[2, 0, 2, 0]);
        let shift = b.shifted(Direction::Up).unwrap();
        assert_eq!(shift.grid, vec![4, 0, 0, 0]);
        assert_eq!(b.cells(), &[2, 0, 2, 0]);
    }

    #[test]
    fn test_spawn_with_overrides() {
        let mut b = board(2, &[2, 0, 0, 4]);
        let mut rng = GameRng::new(1);

        let spawn = b.spawn_random_tile(&mut rng, Some(1), Some(4)).unwrap();
        assert_eq!(spawn, Some(Spawn { index: 2, value: 4 }));
        assert_eq!(b.cells(), &[2, 0, 4, 4]);
    }

    #[test]
    fn test_spawn_uses_rng() {
        let mut b = board(2, &[0, 0, 0, 0]);
        let mut rng = Scripted { slots: vec![3, 0], high: false };
        b.spawn_random_tile(&mut rng, None, None).unwrap();
        assert_eq!(b.cells(), &[0, 0, 0, 2]);

        rng.high = true;
        b.spawn_random_tile(&mut rng, None, None).unwrap();
        assert_eq!(b.cells(), &[4, 0, 0, 2]);
    }

    #[test]
    fn test_spawn_on_full_board_is_noop() {
        let mut b = board(2, &[2, 4, 8, 16]);
        let mut rng = GameRng::new(1);
        assert_eq!(b.spawn_random_tile(&mut rng, None, None), Ok(None));
        assert_eq!(b.cells(), &[2, 4, 8, 16]);
    }

    #[test]
    fn test_spawn_rejects_bad_overrides() {
        let mut b = board(2, &[2, 0, 0, 0]);
        let mut rng = GameRng::new(1);
        assert_eq!(
            b.spawn_random_tile(&mut rng, Some(3), None),
            Err(BoardError::SlotOutOfRange { slot: 3, empty: 3 })
        );
        assert_eq!(
            b.spawn_random_tile(&mut rng, None, Some(6)),
            Err(BoardError::Token(TokenError::Unknown(6)))
        );
        assert_eq!(b.cells(), &[2, 0, 0, 0]);
    }

    #[test]
    fn test_spawn_rejects_bad_probability() {
        let mut b = board(2, &[2, 0, 0, 0]);
        let mut rng = GameRng::new(1);
        assert_eq!(
            b.spawn_weighted_tile(&mut rng, 1.5, None, None),
            Err(BoardError::InvalidProbability(1.5))
        );
        assert_eq!(
            b.spawn_weighted_tile(&mut rng, -0.5, Some(0), Some(2)),
            Err(BoardError::InvalidProbability(-0.5))
        );
        assert!(matches!(
            b.spawn_weighted_tile(&mut rng, f64::NAN, None, None),
            Err(BoardError::InvalidProbability(p)) if p.is_nan()
        ));
        assert_eq!(b.cells(), &[2, 0, 0, 0]);
    }

    #[test]
    fn test_can_move() {
        assert!(board(2, &[2, 0, 4, 8]).can_move());
        assert!(board(2, &[2, 2, 4, 8]).can_move());
        assert!(board(2, &[2, 4, 2, 8]).can_move());
        assert!(!board(2, &[2, 4, 8, 16]).can_move());
    }

    #[test]
    fn test_max_tokens_block_moves() {
        let scale = TokenScale::new(8).unwrap();
        let b = Board::from_cells(2, vec![8, 8, 2, 4], scale).unwrap();
        assert!(!b.can_move());
    }

    #[test]
    fn test_display() {
        let b = board(2, &[2, 0, 128, 4]);
        assert_eq!(b.to_string(), "  2   .\n128   4\n");
    }
}
