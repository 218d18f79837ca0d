//! Trivia game binary.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rust_trivia::cli::{loader, TerminalDisplay, TerminalInput};
use rust_trivia::core::{GameConfig, GameRng, PlayerRegistry, DEFAULT_MAX_SKIPS};
use rust_trivia::engine::TurnEngine;
use rust_trivia::error::TriviaError;
use rust_trivia::pool::QuestionPool;

/// Turn-based trivia for two or more players.
#[derive(Debug, Parser)]
#[command(name = "trivia", version, about)]
struct Args {
    /// Player names (at least two; prompted for interactively if missing).
    players: Vec<String>,

    /// Path to a JSON question file (built-in set if omitted).
    #[arg(short = 'f', long)]
    questions_file: Option<PathBuf>,

    /// RNG seed for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Skip budget per player.
    #[arg(long, default_value_t = DEFAULT_MAX_SKIPS)]
    max_skips: u32,
}

/// Prompt for player names until there are at least two.
fn collect_players(mut players: Vec<String>) -> Result<Vec<String>, TriviaError> {
    let stdin = io::stdin();
    while players.len() < 2 {
        print!("Enter name of player {}: ", players.len() + 1);
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(TriviaError::UserTermination);
        }
        let name = line.trim();
        if name.is_empty() {
            println!("Player name cannot be empty!");
            continue;
        }
        players.push(name.to_owned());
    }
    Ok(players)
}

fn run(args: Args) -> Result<(), TriviaError> {
    let questions = match &args.questions_file {
        Some(path) => loader::load_file(path)?,
        None => loader::builtin()?,
    };

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    println!("Seed: {} (pass --seed to replay)", rng.seed());

    let players = collect_players(args.players)?;
    let registry = PlayerRegistry::new(players)?;
    let pool = QuestionPool::new(questions, rng);
    let config = GameConfig::new().with_max_skips(args.max_skips);

    let engine = TurnEngine::new(
        config,
        pool,
        registry,
        TerminalInput::new(),
        TerminalDisplay::new(),
    );
    engine.run();
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
