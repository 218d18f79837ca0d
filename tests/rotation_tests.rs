//! Game-flow scenarios: rotation, hand-off, skips, termination paths.
//!
//! Games are driven by a scripted input collaborator. Answer steps are
//! resolved against the presented question at prompt time, so scenarios
//! stay deterministic regardless of how answers were scrambled.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rust_trivia::core::{GameConfig, GameRng, Player, PlayerRegistry};
use rust_trivia::engine::{Answer, GameDisplay, InputSource, Standings, TurnEngine};
use rust_trivia::error::TriviaError;
use rust_trivia::pool::{PresentedQuestion, Question, QuestionPool};

/// One scripted player decision.
#[derive(Clone, Copy, Debug)]
enum Step {
    /// Answer with the correct index of whatever question is shown.
    Correct,
    /// Answer with a wrong index of whatever question is shown.
    Wrong,
    Skip,
    End,
}

/// Scripted input: pops one step per answer prompt, one entry per category
/// prompt. A drained answer script reads as an interrupted input stream.
struct ScriptedInput {
    steps: VecDeque<Step>,
    categories: VecDeque<Option<String>>,
}

impl ScriptedInput {
    fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            categories: VecDeque::new(),
        }
    }

    fn with_categories(
        mut self,
        categories: impl IntoIterator<Item = Option<String>>,
    ) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }
}

impl InputSource for ScriptedInput {
    fn choose_category(&mut self, _available: &[String]) -> Result<Option<String>, TriviaError> {
        Ok(self.categories.pop_front().unwrap_or(None))
    }

    fn get_answer(&mut self, question: &PresentedQuestion) -> Result<Answer, TriviaError> {
        match self.steps.pop_front() {
            Some(Step::Correct) => Ok(Answer::Choice(question.correct_answer_index)),
            Some(Step::Wrong) => Ok(Answer::Choice(
                (question.correct_answer_index + 1) % question.answers.len(),
            )),
            Some(Step::Skip) => Ok(Answer::Skip),
            Some(Step::End) => Ok(Answer::End),
            None => Err(TriviaError::UserTermination),
        }
    }
}

/// Shared event log filled by `RecordingDisplay`.
#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<String>>>);

impl Recorder {
    fn push(&self, event: String) {
        self.0.borrow_mut().push(event);
    }

    fn events(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    fn count_of(&self, prefix: &str) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|e| e.starts_with(prefix))
            .count()
    }
}

struct RecordingDisplay {
    recorder: Recorder,
}

impl GameDisplay for RecordingDisplay {
    fn turn_screen(
        &mut self,
        player: &Player,
        _players: &PlayerRegistry,
        turn_index: u32,
        question: &PresentedQuestion,
    ) {
        self.recorder.push(format!(
            "turn:{}:{}:{}",
            turn_index,
            player.name(),
            question.question
        ));
    }

    fn correct_answer(&mut self, player: &Player, points: u32) {
        self.recorder.push(format!("correct:{}:{points}", player.name()));
    }

    fn handed_off(&mut self, player: &Player, next_player: &str) {
        self.recorder.push(format!("handoff:{}:{next_player}", player.name()));
    }

    fn no_one_answered(&mut self, question: &PresentedQuestion) {
        self.recorder.push(format!("no_one:{}", question.question));
    }

    fn skip_used(&mut self, player: &Player, remaining: u32) {
        self.recorder.push(format!("skip:{}:{remaining}", player.name()));
    }

    fn skip_denied(&mut self, player: &Player) {
        self.recorder.push(format!("skip_denied:{}", player.name()));
    }

    fn final_standings(&mut self, standings: &Standings) {
        self.recorder.push(format!("standings:{}", standings.max_score));
    }
}

fn question(text: &str, category: &str, difficulty: u32) -> Question {
    Question {
        question: text.into(),
        category: category.into(),
        difficulty,
        right_answer: "right".into(),
        wrong_answers: vec!["a".into(), "b".into(), "c".into()],
    }
}

fn play(
    questions: Vec<Question>,
    players: &[&str],
    config: GameConfig,
    input: ScriptedInput,
) -> (Standings, Recorder) {
    let recorder = Recorder::default();
    let display = RecordingDisplay {
        recorder: recorder.clone(),
    };
    let registry = PlayerRegistry::new(players.iter().copied()).unwrap();
    let pool = QuestionPool::new(questions, GameRng::new(42));
    let standings = TurnEngine::new(config, pool, registry, input, display).run();
    (standings, recorder)
}

fn score_of(standings: &Standings, name: &str) -> u32 {
    standings
        .players
        .iter()
        .find(|p| p.name() == name)
        .unwrap()
        .score()
}

#[test]
fn test_correct_answer_scores_difficulty_times_ten() {
    let (standings, _) = play(
        vec![question("q1", "math", 3)],
        &["Alice", "Bob"],
        GameConfig::new(),
        ScriptedInput::new([Step::Correct]),
    );

    assert_eq!(score_of(&standings, "Alice"), 30);
    assert_eq!(score_of(&standings, "Bob"), 0);
    assert_eq!(standings.winners, vec!["Alice"]);
}

#[test]
fn test_rotation_alternates_players() {
    let questions = (0..4).map(|i| question(&format!("q{i}"), "math", 1)).collect();
    let (standings, recorder) = play(
        questions,
        &["Alice", "Bob"],
        GameConfig::new(),
        ScriptedInput::new([Step::Correct, Step::Correct, Step::Correct, Step::Correct]),
    );

    let turn_players: Vec<String> = recorder
        .events()
        .iter()
        .filter(|e| e.starts_with("turn:"))
        .map(|e| e.split(':').nth(2).unwrap().to_owned())
        .collect();
    assert_eq!(turn_players, vec!["Alice", "Bob", "Alice", "Bob"]);

    assert_eq!(score_of(&standings, "Alice"), 20);
    assert_eq!(score_of(&standings, "Bob"), 20);
    assert!(standings.is_tie());
}

#[test]
fn test_one_question_skip_scenario() {
    // One math question, two players. The first player skips, the same
    // question is re-shown (no replacement exists), they answer correctly,
    // and the next draw finds the pool exhausted.
    let (standings, recorder) = play(
        vec![question("q1", "math", 2)],
        &["Alice", "Bob"],
        GameConfig::new(),
        ScriptedInput::new([Step::Skip, Step::Correct])
            .with_categories([Some("math".to_owned())]),
    );

    let events = recorder.events();
    assert!(events.contains(&"skip:Alice:1".to_owned()));

    // Both prompts showed the same question to the same player.
    let turns: Vec<&String> = events.iter().filter(|e| e.starts_with("turn:")).collect();
    assert_eq!(turns, vec!["turn:1:Alice:q1", "turn:1:Alice:q1"]);

    assert_eq!(score_of(&standings, "Alice"), 20);
    assert_eq!(score_of(&standings, "Bob"), 0);
    let alice = standings.players.iter().find(|p| p.name() == "Alice").unwrap();
    assert_eq!(alice.skips_used(), 1);
}

#[test]
fn test_full_circle_hand_off() {
    // Two players, one question, both answer wrong. After the second wrong
    // answer the question has cycled to everyone: the no-one-left branch
    // must fire instead of an endless hand-off.
    let (standings, recorder) = play(
        vec![question("q1", "math", 1)],
        &["Alice", "Bob"],
        GameConfig::new(),
        ScriptedInput::new([Step::Wrong, Step::Wrong]),
    );

    assert_eq!(recorder.count_of("handoff:Alice:Bob"), 1);
    assert_eq!(recorder.count_of("no_one:q1"), 1);
    assert_eq!(recorder.count_of("turn:"), 2);

    assert_eq!(score_of(&standings, "Alice"), 0);
    assert_eq!(score_of(&standings, "Bob"), 0);
}

#[test]
fn test_hand_off_can_be_answered_by_next_player() {
    let (standings, recorder) = play(
        vec![question("q1", "math", 2)],
        &["Alice", "Bob"],
        GameConfig::new(),
        ScriptedInput::new([Step::Wrong, Step::Correct]),
    );

    assert_eq!(recorder.count_of("handoff:Alice:Bob"), 1);
    assert_eq!(score_of(&standings, "Alice"), 0);
    assert_eq!(score_of(&standings, "Bob"), 20);
    assert_eq!(standings.winners, vec!["Bob"]);
}

#[test]
fn test_denied_skip_keeps_player_and_question() {
    let (standings, recorder) = play(
        vec![question("q1", "math", 1)],
        &["Alice", "Bob"],
        GameConfig::new().with_max_skips(0),
        ScriptedInput::new([Step::Skip, Step::Correct]),
    );

    assert_eq!(recorder.count_of("skip_denied:Alice"), 1);
    // Re-prompt: same turn, same player, same question, twice.
    let turns: Vec<String> = recorder
        .events()
        .into_iter()
        .filter(|e| e.starts_with("turn:"))
        .collect();
    assert_eq!(turns, vec!["turn:1:Alice:q1", "turn:1:Alice:q1"]);

    let alice = standings.players.iter().find(|p| p.name() == "Alice").unwrap();
    assert_eq!(alice.skips_used(), 0);
    assert_eq!(alice.score(), 10);
}

#[test]
fn test_skip_budget_is_never_exceeded() {
    // Three questions; Alice skips twice (budget 2), is denied the third
    // skip, then answers. Each accepted skip draws a replacement.
    let (standings, recorder) = play(
        vec![
            question("q1", "math", 1),
            question("q2", "math", 1),
            question("q3", "math", 1),
        ],
        &["Alice", "Bob"],
        GameConfig::new(),
        ScriptedInput::new([Step::Skip, Step::Skip, Step::Skip, Step::Correct]),
    );

    assert_eq!(recorder.count_of("skip:Alice"), 2);
    assert_eq!(recorder.count_of("skip_denied:Alice"), 1);

    let alice = standings.players.iter().find(|p| p.name() == "Alice").unwrap();
    assert_eq!(alice.skips_used(), 2);
    assert_eq!(alice.score(), 10);
}

#[test]
fn test_end_terminates_immediately_with_standings() {
    let (standings, recorder) = play(
        vec![question("q1", "math", 1), question("q2", "math", 1)],
        &["Alice", "Bob"],
        GameConfig::new(),
        ScriptedInput::new([Step::End]),
    );

    assert_eq!(recorder.count_of("turn:"), 1);
    assert_eq!(recorder.count_of("standings:"), 1);
    assert_eq!(standings.max_score, 0);
    // Everyone at the (zero) max is a winner
    assert_eq!(standings.winners.len(), 2);
}

#[test]
fn test_interrupted_input_shows_partial_results() {
    // The script drains after one correct answer; the next prompt reads as
    // an interrupted stream, which must still end with standings.
    let (standings, recorder) = play(
        vec![question("q1", "math", 2), question("q2", "math", 1)],
        &["Alice", "Bob"],
        GameConfig::new(),
        ScriptedInput::new([Step::Correct]),
    );

    assert_eq!(recorder.count_of("standings:"), 1);
    assert_eq!(score_of(&standings, "Alice"), 20);
    assert_eq!(standings.winners, vec!["Alice"]);
}

#[test]
fn test_unknown_category_re_prompts_without_losing_questions() {
    let (standings, _) = play(
        vec![question("q1", "math", 1)],
        &["Alice", "Bob"],
        GameConfig::new(),
        ScriptedInput::new([Step::Correct])
            .with_categories([Some("sports".to_owned()), Some("math".to_owned())]),
    );

    // The bogus category was re-prompted, not treated as exhaustion.
    assert_eq!(score_of(&standings, "Alice"), 10);
}

#[test]
fn test_pool_exhaustion_ends_game_gracefully() {
    let (standings, recorder) = play(
        vec![question("q1", "math", 1), question("q2", "math", 1)],
        &["Alice", "Bob"],
        GameConfig::new(),
        // More willing answers than questions: exhaustion ends the game.
        ScriptedInput::new([Step::Correct, Step::Correct, Step::Correct, Step::Correct]),
    );

    assert_eq!(recorder.count_of("turn:"), 2);
    assert_eq!(score_of(&standings, "Alice"), 10);
    assert_eq!(score_of(&standings, "Bob"), 10);
}

#[test]
fn test_three_player_full_circle() {
    // The question must travel through all three players before the
    // no-one-left branch fires.
    let (_, recorder) = play(
        vec![question("q1", "math", 1)],
        &["Alice", "Bob", "Dalia"],
        GameConfig::new(),
        ScriptedInput::new([Step::Wrong, Step::Wrong, Step::Wrong]),
    );

    assert_eq!(recorder.count_of("handoff:"), 2);
    assert_eq!(recorder.count_of("no_one:q1"), 1);
    assert_eq!(recorder.count_of("turn:"), 3);
}
