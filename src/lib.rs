//! # rust-trivia
//!
//! A turn-based multi-player trivia engine. Players rotate answering
//! questions drawn without replacement from a category-grouped pool, scored
//! by difficulty, with a limited skip budget and hand-off of the question to
//! the next player on a wrong answer.
//!
//! ## Design Principles
//!
//! 1. **Core owns no I/O**: the engine talks to collaborator traits
//!    ([`InputSource`], [`GameDisplay`]); terminals and files stay at the
//!    edges.
//!
//! 2. **Deterministic by injection**: every draw and answer scramble runs
//!    off a seeded [`GameRng`] handed in at construction, so whole games
//!    replay bit-for-bit.
//!
//! 3. **Configuration over constants**: skip budgets and scoring come in
//!    via [`GameConfig`], never module-level mutable state.
//!
//! ## Modules
//!
//! - `core`: configuration, deterministic RNG, players and rotation
//! - `pool`: question records and the without-replacement draw pool
//! - `engine`: the turn/question state machine, standings, collaborator traits
//! - `cli`: terminal input/display and question-file loading
//! - `error`: the error taxonomy

pub mod cli;
pub mod core;
pub mod engine;
pub mod error;
pub mod pool;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, Player, PlayerRegistry};
pub use crate::engine::{Answer, GameDisplay, InputSource, Standings, TurnEngine};
pub use crate::error::TriviaError;
pub use crate::pool::{PresentedQuestion, Question, QuestionPool};
