//! Terminal front end: reads moves from stdin, prints the board to stdout.
//!
//! Exit codes: `0` on a win or when the player quits, `1` on a loss,
//! `2` on a configuration or internal error.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use twenty48::core::GameConfig;
use twenty48::game::GameBuilder;
use twenty48::rules::GameResult;
use twenty48::shell::{self, SessionEnd};

/// Slide tiles, merge equal tokens, reach the winning tile.
#[derive(Parser, Debug)]
#[command(name = "twenty48")]
#[command(version, about, long_about = None)]
struct Args {
    /// Grid dimension (the board is size x size)
    #[arg(short, long, default_value_t = 4)]
    size: usize,

    /// Winning token; must be a power of two >= 4
    #[arg(short, long, default_value_t = 2048)]
    win_token: u32,

    /// RNG seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Probability that a spawned tile is a 4
    #[arg(long, default_value_t = 0.1)]
    four_chance: f64,

    /// Tiles on the starting board
    #[arg(long, default_value_t = 2)]
    initial_tiles: usize,
}

const EXIT_OK: u8 = 0;
const EXIT_WON: u8 = 0;
const EXIT_LOST: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let config = GameConfig::new()
        .with_size(args.size)
        .with_win_token(args.win_token)
        .with_seed(args.seed.unwrap_or_else(rand::random))
        .with_high_tile_probability(args.four_chance)
        .with_initial_tiles(args.initial_tiles);

    let mut game = match GameBuilder::from_config(config).build() {
        Ok(game) => game,
        Err(e) => {
            error!("cannot start game: {}", e);
            eprintln!("error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    match shell::run(&mut game, stdin.lock(), &mut stdout) {
        Ok(end) => ExitCode::from(exit_code(end)),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn exit_code(end: SessionEnd) -> u8 {
    match end {
        SessionEnd::Finished(GameResult::Won) => EXIT_WON,
        SessionEnd::Finished(GameResult::Lost) => EXIT_LOST,
        SessionEnd::Quit | SessionEnd::Exhausted => EXIT_OK,
    }
}
