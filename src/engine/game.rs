//! The turn engine: who answers what next.
//!
//! One game instance exclusively owns its pool and registry. The loop is
//! strictly turn-sequential and suspends only inside the input collaborator.
//! Every transition fully applies before the next draw or prompt, so no
//! termination path can leave a question lost or a score half-applied.

use tracing::{debug, info, warn};

use crate::core::config::GameConfig;
use crate::core::player::PlayerRegistry;
use crate::engine::io::{GameDisplay, InputSource};
use crate::engine::standings::Standings;
use crate::engine::turn::Answer;
use crate::pool::manager::QuestionPool;
use crate::pool::question::PresentedQuestion;

/// Result of asking the pool for the next question.
enum DrawOutcome {
    /// A fresh question was drawn.
    Drawn(PresentedQuestion),
    /// The pool could not supply a replacement; the question already in
    /// play stays in front of the player.
    KeepCurrent,
    /// Nothing left to draw and nothing in play: the game is over.
    Exhausted,
    /// The player quit during category selection.
    Quit,
}

/// The turn/question rotation state machine.
///
/// Drives one complete game: fetches players from the registry, questions
/// from the pool, decisions from the input collaborator, and renders through
/// the display collaborator. Always terminates with [`Standings`].
///
/// Per iteration:
/// 1. When both a new player and a new question are needed, a fresh turn
///    starts: the player slot is forced to `(turn - 1) mod N`.
/// 2. A hand-off (wrong answer) advances only the player, by cursor.
/// 3. An accepted skip requests only a new question for the same player.
/// 4. A denied skip or out-of-range choice re-prompts with nothing changed.
pub struct TurnEngine<I, D> {
    config: GameConfig,
    pool: QuestionPool,
    registry: PlayerRegistry,
    input: I,
    display: D,
}

impl<I: InputSource, D: GameDisplay> TurnEngine<I, D> {
    /// Create an engine owning all game state for one run.
    pub fn new(
        config: GameConfig,
        pool: QuestionPool,
        registry: PlayerRegistry,
        input: I,
        display: D,
    ) -> Self {
        Self {
            config,
            pool,
            registry,
            input,
            display,
        }
    }

    /// Play the game to completion and return final standings.
    ///
    /// Terminates when the pool is exhausted, a player quits, or the input
    /// stream is interrupted. All three paths show final standings.
    pub fn run(mut self) -> Standings {
        info!(
            players = self.registry.len(),
            questions = self.pool.remaining(),
            seed = self.pool.seed(),
            "game started"
        );

        let player_count = self.registry.len();
        let mut turn_index: u32 = 0;
        let mut current: usize = 0;
        let mut question: Option<PresentedQuestion> = None;
        let mut need_new_player = true;
        let mut need_new_question = true;

        loop {
            // A fresh turn forces the slot; a hand-off follows the cursor.
            let forced_slot = if need_new_player && need_new_question {
                turn_index += 1;
                Some((turn_index as usize - 1) % player_count)
            } else {
                None
            };

            if need_new_player {
                current = self.registry.next(forced_slot).index();
                need_new_player = false;
            }

            if need_new_question {
                match self.draw_question(question.is_some()) {
                    DrawOutcome::Drawn(drawn) => question = Some(drawn),
                    DrawOutcome::KeepCurrent => {
                        debug!("no replacement available, re-showing current question");
                    }
                    DrawOutcome::Exhausted => {
                        info!("question pool exhausted, ending game");
                        break;
                    }
                    DrawOutcome::Quit => {
                        info!("game terminated during category selection");
                        break;
                    }
                }
                need_new_question = false;
            }

            let presented = question
                .clone()
                .expect("a question is in play whenever a player is prompted");

            // Full-circle detection keys on this record.
            self.registry
                .get_mut(current)
                .expect("current player exists")
                .note_question(&presented.question);

            let player = self.registry.get(current).expect("current player exists");
            self.display
                .turn_screen(player, &self.registry, turn_index, &presented);

            let answer = match self.input.get_answer(&presented) {
                Ok(answer) => answer,
                Err(err) => {
                    warn!(error = %err, "input interrupted, ending game");
                    break;
                }
            };

            match answer {
                Answer::End => {
                    info!(player = %self.registry.get(current).expect("current player exists").name(), "player ended the game");
                    break;
                }

                Answer::Skip => {
                    let max_skips = self.config.max_skips;
                    let player = self.registry.get_mut(current).expect("current player exists");
                    if player.skips_remaining(max_skips) > 0 {
                        player.use_skip();
                        let remaining = player.skips_remaining(max_skips);
                        debug!(player = %player.name(), remaining, "skip spent");
                        let player = self.registry.get(current).expect("current player exists");
                        self.display.skip_used(player, remaining);
                        need_new_question = true;
                    } else {
                        debug!(player = %player.name(), "skip denied, re-prompting");
                        let player = self.registry.get(current).expect("current player exists");
                        self.display.skip_denied(player);
                        // Same player, same question, no state change.
                    }
                }

                Answer::Choice(index) if index >= presented.answers.len() => {
                    // The input collaborator should have caught this; recover
                    // locally either way.
                    warn!(index, "answer index out of range, re-prompting");
                }

                Answer::Choice(index) => {
                    if presented.is_correct(index) {
                        let points = self.config.score_for(presented.difficulty);
                        let player = self.registry.get_mut(current).expect("current player exists");
                        player.award(points);
                        debug!(player = %player.name(), points, score = player.score(), "correct answer");
                        let player = self.registry.get(current).expect("current player exists");
                        self.display.correct_answer(player, points);
                        question = None;
                        need_new_player = true;
                        need_new_question = true;
                    } else if self.registry.peek_next().has_seen(&presented.question) {
                        // The question has already cycled past every player.
                        debug!(question = %presented.question, "full circle, nobody answered");
                        self.display.no_one_answered(&presented);
                        question = None;
                        need_new_player = true;
                        need_new_question = true;
                    } else {
                        let next_player = self.registry.peek_next().name().to_owned();
                        debug!(
                            from = %self.registry.get(current).expect("current player exists").name(),
                            to = %next_player,
                            "wrong answer, handing question off"
                        );
                        let player = self.registry.get(current).expect("current player exists");
                        self.display.handed_off(player, &next_player);
                        need_new_player = true;
                    }
                }
            }
        }

        let standings = Standings::from_registry(&self.registry);
        self.display.final_standings(&standings);
        info!(
            max_score = standings.max_score,
            winners = ?standings.winners,
            "game over"
        );
        standings
    }

    /// Prompt for a category and draw.
    ///
    /// An unknown or exhausted category re-prompts while other questions
    /// remain. An empty pool ends the game, unless a question is already in
    /// play (post-skip), in which case that question stays.
    fn draw_question(&mut self, holding_current: bool) -> DrawOutcome {
        loop {
            if self.pool.is_empty() {
                return if holding_current {
                    DrawOutcome::KeepCurrent
                } else {
                    DrawOutcome::Exhausted
                };
            }

            let categories = self.pool.categories();
            let category = match self.input.choose_category(&categories) {
                Ok(category) => category,
                Err(err) => {
                    warn!(error = %err, "input interrupted during category selection");
                    return DrawOutcome::Quit;
                }
            };

            match self.pool.draw(category.as_deref()) {
                Some(drawn) => return DrawOutcome::Drawn(drawn),
                None => {
                    warn!(
                        category = category.as_deref().unwrap_or("<random>"),
                        "category not available, re-prompting"
                    );
                }
            }
        }
    }
}
