//! Player replies within a turn.
//!
//! The reply set is closed and small, so it is a plain enum dispatched
//! through a `match` in the engine rather than anything polymorphic.

use serde::{Deserialize, Serialize};

/// What a player did with the question in front of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    /// Picked the answer at this index (validated against the answer list
    /// by the input collaborator before it reaches the engine).
    Choice(usize),
    /// Declined the question, spending one skip if any remain.
    Skip,
    /// Quit the game immediately.
    End,
}

impl Answer {
    /// Whether this reply ends the game.
    #[must_use]
    pub fn is_end(self) -> bool {
        matches!(self, Answer::End)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_end() {
        assert!(Answer::End.is_end());
        assert!(!Answer::Skip.is_end());
        assert!(!Answer::Choice(0).is_end());
    }
}
