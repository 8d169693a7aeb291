//! Terminal runner (default binary).
//!
//! Thin glue around the core: polls at most one key per iteration,
//! applies it, drives gravity from a monotonic clock, and redraws when
//! anything changed. Restart swaps in a freshly built session.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use bitfall::core::{Game, PieceSource};
use bitfall::input::{map_key, should_quit};
use bitfall::term::{GameView, TerminalSession};
use bitfall::types::{GameAction, GameConfig, MAX_BOARD_WIDTH};

/// Terminal falling-block game.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Board width in columns
    #[arg(long, default_value_t = 10)]
    width: u8,

    /// Board height in rows
    #[arg(long, default_value_t = 20)]
    height: u8,

    /// Starting level
    #[arg(short, long, default_value_t = 0)]
    level: u32,

    /// Piece-sequence seed (derived from the clock if omitted)
    #[arg(short, long)]
    seed: Option<u32>,
}

/// How long one input poll waits before the loop checks gravity.
const POLL_TIMEOUT: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let args = Args::parse();
    ensure!(
        (4..=MAX_BOARD_WIDTH).contains(&args.width),
        "board width must be between 4 and {MAX_BOARD_WIDTH}"
    );
    ensure!(args.height >= 4, "board height must be at least 4");

    let config = GameConfig {
        width: args.width,
        height: args.height,
        starting_level: args.level,
    };
    let seed = args.seed.unwrap_or_else(clock_seed);

    let mut term = TerminalSession::new();
    term.enter()?;
    let result = run(&mut term, config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalSession, config: GameConfig, seed: u32) -> Result<()> {
    let mut next_seed = seed;
    let mut game = Game::new(config, PieceSource::random(next_seed));
    let view = GameView::default();
    let clock = Instant::now();

    term.draw(&view.render(&game.snapshot()))?;

    loop {
        let mut dirty = false;

        if event::poll(POLL_TIMEOUT)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match map_key(key) {
                        Some(GameAction::Restart) => {
                            next_seed = next_seed.wrapping_add(1);
                            game = Game::new(config, PieceSource::random(next_seed));
                            dirty = true;
                        }
                        Some(action) => {
                            dirty |= game.apply(action);
                        }
                        None => {}
                    }
                }
            }
        }

        dirty |= game.tick(clock.elapsed().as_nanos() as u64);

        if dirty {
            term.draw(&view.render(&game.snapshot()))?;
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos().wrapping_add(d.as_secs() as u32))
        .unwrap_or(1)
}
