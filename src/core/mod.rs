//! Core building blocks: configuration, deterministic RNG, players.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{GameConfig, DEFAULT_MAX_SKIPS, DEFAULT_POINTS_PER_DIFFICULTY};
pub use player::{Player, PlayerRegistry};
pub use rng::GameRng;
