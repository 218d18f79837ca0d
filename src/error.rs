//! Error taxonomy.
//!
//! Most variants are recoverable signals, not failures: the engine reacts
//! to them (end the game, re-prompt, deny a skip) without ever corrupting
//! pool or registry state. Only the loading variants abort startup.

use thiserror::Error;

/// All error conditions surfaced by the engine and its collaborators.
#[derive(Debug, Error)]
pub enum TriviaError {
    /// A draw found zero remaining questions. Signals a graceful game end
    /// with current standings, not a failure.
    #[error("question pool exhausted")]
    PoolExhausted,

    /// A category or answer choice outside the valid set. Recovered locally
    /// by re-prompting.
    #[error("invalid selection: {0}")]
    InvalidSelection(String),

    /// Skip requested with zero budget remaining. The same player faces the
    /// same question again.
    #[error("{0} has no skips remaining")]
    SkipDenied(String),

    /// Explicit quit or input-stream interruption. A normal exit path that
    /// still shows final results.
    #[error("game terminated by user")]
    UserTermination,

    /// Player names must be unique within a game.
    #[error("duplicate player name: {0}")]
    DuplicatePlayer(String),

    /// A game needs at least two players.
    #[error("need at least 2 players, got {0}")]
    NotEnoughPlayers(usize),

    /// Player names must be non-empty.
    #[error("player name cannot be empty")]
    EmptyPlayerName,

    /// A question record failed validation on load.
    #[error("invalid question record: {0}")]
    InvalidQuestion(String),

    /// Question file could not be read.
    #[error("failed to read question file")]
    Io(#[from] std::io::Error),

    /// Question file could not be parsed.
    #[error("failed to parse question file")]
    Json(#[from] serde_json::Error),
}
