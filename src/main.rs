//! Terminal 2048 runner (default binary).
//!
//! Reads keys with crossterm, feeds the mapped moves to the board engine and
//! redraws after every key press. There is no tick: the engine only changes state
//! in response to input.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tui_2048::core::{Game, GameConfig, GameSnapshot};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::{
    GameAction, DEFAULT_HEIGHT, DEFAULT_PROB_FOUR, DEFAULT_STARTING_PIECES, DEFAULT_WIDTH,
};

#[derive(Parser, Debug)]
#[command(name = "tui-2048", about = "Slide and merge tiles until you reach 2048")]
struct Args {
    /// Board width in tiles.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,
    /// Board height in tiles.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,
    /// Probability that a spawned tile is a 4.
    #[arg(long, default_value_t = DEFAULT_PROB_FOUR)]
    prob_four: f64,
    /// Tiles placed before the first move.
    #[arg(long, default_value_t = DEFAULT_STARTING_PIECES)]
    starting_pieces: usize,
    /// Seed for a reproducible game (random when omitted).
    #[arg(long)]
    seed: Option<u64>,
    /// Tracing filter, e.g. "info", "debug".
    #[arg(long, default_value = "info")]
    log: String,
    /// Write logs to this file. Nothing is logged when omitted, since the game owns the terminal.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> GameConfig {
        GameConfig::with_size(self.width, self.height)
            .spawn_probability_of_4(self.prob_four)
            .starting_pieces(self.starting_pieces)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args)?;

    let config = args.config();
    // Validate before touching the terminal so errors print normally.
    let game = new_game(config, args.seed)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game, config, args.seed);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!(error = %err, "failed to restore terminal");
    }
    result
}

fn init_tracing(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::new(args.log.clone()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn new_game(config: GameConfig, seed: Option<u64>) -> Result<Game> {
    let game = match seed {
        Some(seed) => Game::seeded(config, seed),
        None => Game::new(config),
    };
    game.context("invalid game configuration")
}

fn run(
    term: &mut TerminalRenderer,
    mut game: Game,
    config: GameConfig,
    seed: Option<u64>,
) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Block until the next event; nothing changes without input.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(moves = game.moves(), highest_tile = game.highest_tile(), "quit");
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(GameAction::Restart) => {
                        info!("restart");
                        game = new_game(config, seed)?;
                    }
                    Some(action) => {
                        game.apply_action(action);
                    }
                    None => {}
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
