//! Collaborator seams: input and display.
//!
//! The engine never touches a terminal. It talks to an [`InputSource`] for
//! category and answer choices and a [`GameDisplay`] for rendering. Tests
//! drive games with scripted implementations of these traits.

use crate::core::player::{Player, PlayerRegistry};
use crate::engine::standings::Standings;
use crate::engine::turn::Answer;
use crate::error::TriviaError;
use crate::pool::question::PresentedQuestion;

/// Supplies player decisions to the engine.
///
/// Implementations own raw-input validation: a numeric answer must lie in
/// `[0, answers.len())` before it is returned, and malformed input is
/// re-prompted locally rather than surfaced. An interrupted input stream is
/// reported as [`TriviaError::UserTermination`], which the engine treats as
/// a normal exit that still shows final results.
pub trait InputSource {
    /// Let the player pick a category, or `None` for a random one.
    ///
    /// `available` is the live category set; a returned category should be
    /// one of these.
    fn choose_category(&mut self, available: &[String]) -> Result<Option<String>, TriviaError>;

    /// Obtain the player's reply to the presented question.
    fn get_answer(&mut self, question: &PresentedQuestion) -> Result<Answer, TriviaError>;
}

/// Renders game state. Purely one-way: nothing flows back into the engine.
pub trait GameDisplay {
    /// A player's turn screen: who is up, everyone's scores, the question.
    fn turn_screen(
        &mut self,
        player: &Player,
        players: &PlayerRegistry,
        turn_index: u32,
        question: &PresentedQuestion,
    );

    /// The player answered correctly and earned points.
    fn correct_answer(&mut self, player: &Player, points: u32);

    /// The player answered wrong; the question passes to `next_player`.
    fn handed_off(&mut self, player: &Player, next_player: &str);

    /// The question cycled through every player without a correct answer.
    fn no_one_answered(&mut self, question: &PresentedQuestion);

    /// A skip was spent.
    fn skip_used(&mut self, player: &Player, remaining: u32);

    /// A skip was requested with an empty budget.
    fn skip_denied(&mut self, player: &Player);

    /// Final standings, on every termination path.
    fn final_standings(&mut self, standings: &Standings);
}
