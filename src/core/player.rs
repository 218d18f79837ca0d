//! Players and the rotation registry.
//!
//! ## Player
//!
//! Per-player game state: score, skip usage, and the text of the last
//! question shown to them (used to detect a question travelling full-circle).
//!
//! ## PlayerRegistry
//!
//! Ordered player list with a rotation cursor. Lookup by name and by index
//! is O(1). The registry owns name uniqueness for the game's lifetime.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::TriviaError;

/// A single player's state for one game run.
///
/// Created at game start, mutated only by the engine during that player's
/// own turn (or when a question is declined), never destroyed mid-game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    index: usize,
    score: u32,
    skips_used: u32,
    /// Text of the most recent question shown to this player.
    ///
    /// Compared by text, not by draw identity: two draws with coincidentally
    /// identical text look the same to the full-circle check.
    last_question_text: Option<String>,
}

impl Player {
    /// Create a player at the given rotation slot.
    #[must_use]
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
            score: 0,
            skips_used: 0,
            last_question_text: None,
        }
    }

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fixed rotation slot (0-based).
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Award points. Score only ever increases.
    pub fn award(&mut self, points: u32) {
        self.score += points;
    }

    /// Number of skips consumed so far.
    #[must_use]
    pub fn skips_used(&self) -> u32 {
        self.skips_used
    }

    /// Skips left given the configured budget.
    #[must_use]
    pub fn skips_remaining(&self, max_skips: u32) -> u32 {
        max_skips.saturating_sub(self.skips_used)
    }

    /// Consume one skip. Caller checks the budget first.
    pub fn use_skip(&mut self) {
        self.skips_used += 1;
    }

    /// Record that this question text was shown to the player.
    pub fn note_question(&mut self, text: &str) {
        self.last_question_text = Some(text.to_owned());
    }

    /// Was this exact question text the last one shown to the player?
    #[must_use]
    pub fn has_seen(&self, text: &str) -> bool {
        self.last_question_text.as_deref() == Some(text)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Ordered players plus a rotation cursor.
///
/// ## Example
///
/// ```
/// use rust_trivia::core::PlayerRegistry;
///
/// let mut registry = PlayerRegistry::new(["Alice", "Bob"]).unwrap();
/// assert_eq!(registry.next(None).name(), "Alice");
/// assert_eq!(registry.next(None).name(), "Bob");
/// assert_eq!(registry.next(None).name(), "Alice");
/// ```
#[derive(Clone, Debug)]
pub struct PlayerRegistry {
    players: Vec<Player>,
    by_name: FxHashMap<String, usize>,
    cursor: usize,
}

impl PlayerRegistry {
    /// Create a registry from an ordered list of names.
    ///
    /// Requires at least two distinct, non-empty names.
    pub fn new<I, S>(names: I) -> Result<Self, TriviaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut players = Vec::new();
        let mut by_name = FxHashMap::default();

        for name in names {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(TriviaError::EmptyPlayerName);
            }
            let index = players.len();
            if by_name.insert(name.clone(), index).is_some() {
                return Err(TriviaError::DuplicatePlayer(name));
            }
            players.push(Player::new(name, index));
        }

        if players.len() < 2 {
            return Err(TriviaError::NotEnoughPlayers(players.len()));
        }

        Ok(Self {
            players,
            by_name,
            cursor: 0,
        })
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Whether the registry is empty. Always false after construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Advance the rotation and return the resulting player.
    ///
    /// With `explicit_index`, returns that player and moves the cursor to
    /// `explicit_index + 1 mod N` (resuming rotation after a forced slot).
    /// Without it, returns the player at the cursor and advances by one.
    pub fn next(&mut self, explicit_index: Option<usize>) -> &Player {
        let index = match explicit_index {
            Some(index) => index % self.players.len(),
            None => self.cursor,
        };
        self.cursor = (index + 1) % self.players.len();
        &self.players[index]
    }

    /// The player the cursor currently points to, without advancing.
    #[must_use]
    pub fn peek_next(&self) -> &Player {
        &self.players[self.cursor]
    }

    /// Player at a rotation slot.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Mutable player at a rotation slot.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    /// Player by name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Player> {
        self.by_name.get(name).map(|&i| &self.players[i])
    }

    /// Iterate players in rotation order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }
}
