//! Final standings and winner determination.

use serde::{Deserialize, Serialize};

use crate::core::player::{Player, PlayerRegistry};

/// Final game standings.
///
/// Players are ordered by score descending; everyone tied at the maximum
/// score is a winner. Ties are explicitly supported, never broken.
///
/// ## Example
///
/// ```
/// use rust_trivia::core::PlayerRegistry;
/// use rust_trivia::engine::Standings;
///
/// let mut registry = PlayerRegistry::new(["Alice", "Bob"]).unwrap();
/// registry.get_mut(1).unwrap().award(20);
///
/// let standings = Standings::from_registry(&registry);
/// assert_eq!(standings.max_score, 20);
/// assert!(standings.is_winner("Bob"));
/// assert!(!standings.is_winner("Alice"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    /// Player snapshots, sorted by score descending.
    ///
    /// The sort is stable, so players with equal scores keep rotation order.
    pub players: Vec<Player>,

    /// Names of all players tied at the maximum score.
    pub winners: Vec<String>,

    /// The maximum score.
    pub max_score: u32,
}

impl Standings {
    /// Snapshot the registry into final standings.
    #[must_use]
    pub fn from_registry(registry: &PlayerRegistry) -> Self {
        let mut players: Vec<Player> = registry.iter().cloned().collect();
        players.sort_by(|a, b| b.score().cmp(&a.score()));

        let max_score = players.first().map_or(0, Player::score);
        let winners = players
            .iter()
            .filter(|p| p.score() == max_score)
            .map(|p| p.name().to_owned())
            .collect();

        Self {
            players,
            winners,
            max_score,
        }
    }

    /// Whether the named player is (one of) the winner(s).
    #[must_use]
    pub fn is_winner(&self, name: &str) -> bool {
        self.winners.iter().any(|w| w == name)
    }

    /// Whether the game ended in a tie at the top.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.winners.len() > 1
    }
}
