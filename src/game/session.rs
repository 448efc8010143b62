//! Turn sequencing for a single game.

use log::{debug, info, warn};

use crate::board::{Board, Spawn, DEFAULT_HIGH_TILE_PROBABILITY};
use crate::core::{ConfigError, Direction, GameError, GameRng, TileRng};
use crate::rules::{self, GameResult};

/// What a move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing slid or merged. No move counted, no tile spawned.
    Unchanged,
    /// The board changed and a new tile was spawned.
    Moved {
        direction: Direction,
        /// Merge score gained by this move.
        score: u64,
        /// Tile placed after the move.
        spawn: Option<Spawn>,
    },
    /// The move ended the game.
    Finished(GameResult),
}

/// A game: one board, an RNG and the turn counters.
///
/// Generic over the spawn RNG so tests can script tile placement.
#[derive(Clone, Debug)]
pub struct Game<R: TileRng = GameRng> {
    board: Board,
    rng: R,
    high_tile_probability: f64,
    move_count: u32,
    score: u64,
    result: Option<GameResult>,
}

impl<R: TileRng> Game<R> {
    /// Wrap an existing board. No tiles are spawned.
    ///
    /// A board that already holds the winning token starts out won.
    pub fn with_board(board: Board, rng: R) -> Self {
        let result = rules::is_won(&board).then_some(GameResult::Won);
        Self {
            board,
            rng,
            high_tile_probability: DEFAULT_HIGH_TILE_PROBABILITY,
            move_count: 0,
            score: 0,
            result,
        }
    }

    /// Set the probability that a spawn places the second-lowest token.
    ///
    /// Rejects values outside `[0, 1]` and NaN.
    pub fn with_high_tile_probability(mut self, probability: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(ConfigError::InvalidProbability(probability));
        }
        self.high_tile_probability = probability;
        Ok(self)
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Spawn RNG.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Accepted moves so far.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Sum of all merge results so far.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Terminal result, once reached.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Board is full.
    #[must_use]
    pub fn is_lost(&self) -> bool {
        rules::is_lost(&self.board)
    }

    /// Board holds the winning token.
    #[must_use]
    pub fn is_won(&self) -> bool {
        rules::is_won(&self.board)
    }

    /// Map user input to a direction.
    ///
    /// Accepts `w`/`s`/`a`/`d` and the canonical names, case-insensitively.
    #[must_use]
    pub fn resolve_direction(token: &str) -> Option<Direction> {
        Direction::resolve(token)
    }

    /// Resolve `token` and play it.
    ///
    /// An unrecognised token is `GameError::InvalidDirection` and leaves the
    /// game untouched.
    pub fn apply_move(&mut self, token: &str) -> Result<MoveOutcome, GameError> {
        match Self::resolve_direction(token) {
            Some(direction) => self.apply_direction(direction),
            None => {
                warn!("rejected move input {:?}", token);
                Err(GameError::InvalidDirection(token.trim().to_string()))
            }
        }
    }

    /// Play one move.
    ///
    /// Order: transform, compare with the snapshot, evaluate loss then win on
    /// the merged grid, spawn. A terminal result skips the spawn. A spawned
    /// winning token wins; otherwise a full board with no possible merge
    /// after the spawn is a loss.
    pub fn apply_direction(&mut self, direction: Direction) -> Result<MoveOutcome, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameOver);
        }

        let snapshot = self.board.cells().to_vec();
        let shift = self.board.transform(direction)?;
        if !shift.changed {
            self.board.restore(snapshot);
            debug!("move {} changed nothing", direction);
            return Ok(MoveOutcome::Unchanged);
        }

        self.move_count += 1;
        self.score += shift.score;
        debug!(
            "move {} #{}: +{} (score {})",
            direction, self.move_count, shift.score, self.score
        );

        if let Some(result) = rules::evaluate(&self.board) {
            return Ok(self.finish(result));
        }

        let spawn = self.board.spawn_weighted_tile(
            &mut self.rng,
            self.high_tile_probability,
            None,
            None,
        )?;

        if rules::is_won(&self.board) {
            return Ok(self.finish(GameResult::Won));
        }
        if rules::is_stalemate(&self.board) {
            return Ok(self.finish(GameResult::Lost));
        }

        Ok(MoveOutcome::Moved {
            direction,
            score: shift.score,
            spawn,
        })
    }

    fn finish(&mut self, result: GameResult) -> MoveOutcome {
        info!(
            "game {} after {} moves with score {}",
            result, self.move_count, self.score
        );
        self.result = Some(result);
        MoveOutcome::Finished(result)
    }
}
