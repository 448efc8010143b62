//! Line-based terminal loop.
//!
//! Reads one direction token per line from any `BufRead` and writes the board
//! to any `Write` after each move. Exit codes are left to the caller.

use std::io::{self, BufRead, Write};

use log::error;
use thiserror::Error;

use crate::core::{GameError, TileRng};
use crate::game::{Game, MoveOutcome};
use crate::rules::GameResult;

/// Errors that end a session early.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Game(#[from] GameError),
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// The game reached a terminal result.
    Finished(GameResult),
    /// The player typed `q` or `quit`.
    Quit,
    /// Input ran out before the game ended.
    Exhausted,
}

const PROMPT: &str = "move [w/a/s/d, q to quit]> ";

/// Play `game` until it ends, the player quits or input runs out.
pub fn run<R, I, W>(game: &mut Game<R>, input: I, output: &mut W) -> Result<SessionEnd, ShellError>
where
    R: TileRng,
    I: BufRead,
    W: Write,
{
    render(game, output)?;
    if let Some(result) = game.result() {
        announce(result, output)?;
        return Ok(SessionEnd::Finished(result));
    }
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let token = line.trim();

        if token.is_empty() {
            write!(output, "{}", PROMPT)?;
            output.flush()?;
            continue;
        }
        if token.eq_ignore_ascii_case("q") || token.eq_ignore_ascii_case("quit") {
            writeln!(output, "bye")?;
            return Ok(SessionEnd::Quit);
        }

        match game.apply_move(token) {
            Ok(MoveOutcome::Unchanged) => writeln!(output, "nothing moved")?,
            Ok(MoveOutcome::Moved { .. }) => render(game, output)?,
            Ok(MoveOutcome::Finished(result)) => {
                render(game, output)?;
                announce(result, output)?;
                return Ok(SessionEnd::Finished(result));
            }
            Err(e) if e.is_recoverable() => writeln!(output, "{}", e)?,
            Err(e) => {
                error!("aborting session: {}", e);
                return Err(e.into());
            }
        }

        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(SessionEnd::Exhausted)
}

fn announce<W: Write>(result: GameResult, output: &mut W) -> io::Result<()> {
    match result {
        GameResult::Won => writeln!(output, "you won!"),
        GameResult::Lost => writeln!(output, "game over"),
    }
}

fn render<R: TileRng, W: Write>(game: &Game<R>, output: &mut W) -> io::Result<()> {
    write!(output, "{}", game.board())?;
    writeln!(output, "moves: {}  score: {}", game.move_count(), game.score())
}
