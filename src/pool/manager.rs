//! The question pool: destructive, without-replacement draws.
//!
//! Questions are grouped by category. A draw removes the chosen question
//! permanently (swap-with-last-and-pop; remaining order is meaningless),
//! scrambles its answers, and returns a fresh [`PresentedQuestion`]. A
//! category disappears from the live set the instant its last question is
//! drawn.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::rng::GameRng;
use crate::pool::question::{AnswerList, PresentedQuestion, Question};

/// Holds the remaining questions and the RNG driving draws and scrambles.
///
/// ## Example
///
/// ```
/// use rust_trivia::core::GameRng;
/// use rust_trivia::pool::{Question, QuestionPool};
///
/// let questions = vec![Question {
///     question: "What is 2+2?".into(),
///     category: "math".into(),
///     difficulty: 1,
///     right_answer: "4".into(),
///     wrong_answers: vec!["3".into(), "5".into()],
/// }];
///
/// let mut pool = QuestionPool::new(questions, GameRng::new(42));
/// let presented = pool.draw(None).unwrap();
/// assert_eq!(presented.answers[presented.correct_answer_index], "4");
/// assert!(pool.draw(None).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct QuestionPool {
    by_category: FxHashMap<String, Vec<Question>>,
    remaining: usize,
    rng: GameRng,
}

impl QuestionPool {
    /// Build a pool from validated question records.
    #[must_use]
    pub fn new(questions: Vec<Question>, rng: GameRng) -> Self {
        let remaining = questions.len();
        let mut by_category: FxHashMap<String, Vec<Question>> = FxHashMap::default();
        for question in questions {
            by_category
                .entry(question.category.clone())
                .or_default()
                .push(question);
        }

        Self {
            by_category,
            remaining,
            rng,
        }
    }

    /// Seed of the pool's RNG, for replaying a game.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Total questions left across all categories.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Questions left in one category. Zero for unknown categories.
    #[must_use]
    pub fn remaining_in(&self, category: &str) -> usize {
        self.by_category.get(category).map_or(0, Vec::len)
    }

    /// Whether the pool is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Category names with at least one remaining question, sorted.
    ///
    /// Sorted so that a seeded random category choice is reproducible and
    /// the display order is stable.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut names: Vec<String> = self.by_category.keys().cloned().collect();
        names.sort();
        names
    }

    /// Draw a question, optionally restricted to one category.
    ///
    /// Returns `None` when the pool is empty, or when the requested category
    /// is unknown or already exhausted; the caller decides whether that ends
    /// the game or triggers a re-prompt.
    pub fn draw(&mut self, category: Option<&str>) -> Option<PresentedQuestion> {
        if self.remaining == 0 {
            return None;
        }

        let chosen_category = match category {
            Some(name) => {
                if !self.by_category.contains_key(name) {
                    return None;
                }
                name.to_owned()
            }
            None => {
                let names = self.categories();
                self.rng.choose(&names)?.clone()
            }
        };

        let questions = self
            .by_category
            .get_mut(&chosen_category)
            .expect("chosen category is live");
        let index = self.rng.gen_range_usize(0..questions.len());
        let question = questions.swap_remove(index);

        self.remaining -= 1;
        if questions.is_empty() {
            self.by_category.remove(&chosen_category);
        }

        debug!(
            category = %chosen_category,
            remaining = self.remaining,
            "drew question"
        );

        Some(self.scramble(question))
    }

    /// Build the shuffled single-answer-list view of a drawn question.
    ///
    /// Wrong answers are shuffled, then the right answer is inserted at a
    /// uniform position in `[0, wrong_answers.len()]`.
    fn scramble(&mut self, question: Question) -> PresentedQuestion {
        let mut wrong_answers = question.wrong_answers;
        self.rng.shuffle(&mut wrong_answers);

        let correct_answer_index = self.rng.gen_range_usize(0..wrong_answers.len() + 1);

        let mut answers: AnswerList = wrong_answers.into_iter().collect();
        answers.insert(correct_answer_index, question.right_answer);

        PresentedQuestion {
            question: question.question,
            category: question.category,
            difficulty: question.difficulty,
            answers,
            correct_answer_index,
        }
    }
}
