//! Question records and their per-draw presentation.
//!
//! A [`Question`] is the immutable source record as loaded from a file.
//! A [`PresentedQuestion`] is the scrambled single-answer-list view built
//! fresh on every draw, with the position of the right answer recorded.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::TriviaError;

/// Answer lists are almost always 4 entries; keep them inline.
pub type AnswerList = SmallVec<[String; 4]>;

/// An immutable question as loaded from the question source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question text.
    pub question: String,
    /// Category name, used for filtered draws.
    pub category: String,
    /// Difficulty level, >= 1. Scales the score for a correct answer.
    pub difficulty: u32,
    /// The one correct answer.
    pub right_answer: String,
    /// Distractors, in source order.
    pub wrong_answers: Vec<String>,
}

impl Question {
    /// Validate a record after deserialization.
    ///
    /// Rejects empty text, empty category, zero difficulty, an empty right
    /// answer, and an empty distractor list.
    pub fn validate(&self) -> Result<(), TriviaError> {
        if self.question.trim().is_empty() {
            return Err(TriviaError::InvalidQuestion("empty question text".into()));
        }
        if self.category.trim().is_empty() {
            return Err(TriviaError::InvalidQuestion(format!(
                "question {:?} has an empty category",
                self.question
            )));
        }
        if self.difficulty == 0 {
            return Err(TriviaError::InvalidQuestion(format!(
                "question {:?} has difficulty 0 (must be >= 1)",
                self.question
            )));
        }
        if self.right_answer.trim().is_empty() {
            return Err(TriviaError::InvalidQuestion(format!(
                "question {:?} has an empty right answer",
                self.question
            )));
        }
        if self.wrong_answers.is_empty() {
            return Err(TriviaError::InvalidQuestion(format!(
                "question {:?} has no wrong answers",
                self.question
            )));
        }
        Ok(())
    }
}

/// A question as shown to a player: all answers in one shuffled list.
///
/// Created fresh on every draw and never mutated. Within one hand-off round
/// the same instance is re-shown to each player in turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentedQuestion {
    /// Question text.
    pub question: String,
    /// Category the question was drawn from.
    pub category: String,
    /// Difficulty level of the underlying record.
    pub difficulty: u32,
    /// Right and wrong answers, shuffled together.
    pub answers: AnswerList,
    /// Position of the right answer within `answers`.
    pub correct_answer_index: usize,
}

impl PresentedQuestion {
    /// Is the given answer index the right answer?
    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_answer_index
    }

    /// The right answer's text.
    #[must_use]
    pub fn right_answer(&self) -> &str {
        &self.answers[self.correct_answer_index]
    }
}
