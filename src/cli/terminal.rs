//! Terminal collaborators: stdin input and colored stdout display.
//!
//! All raw-input validation lives here. The engine only ever sees a
//! well-formed [`Answer`] or a category drawn from the live set; everything
//! else is re-prompted locally.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::core::player::{Player, PlayerRegistry};
use crate::engine::io::{GameDisplay, InputSource};
use crate::engine::standings::Standings;
use crate::engine::turn::Answer;
use crate::error::TriviaError;
use crate::pool::question::PresentedQuestion;

/// Terminal width used to right-align the other players' scores.
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Reads player decisions from stdin.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Prompt and read one trimmed line.
    ///
    /// A closed stream (Ctrl-D) becomes [`TriviaError::UserTermination`] so
    /// the engine can show partial results.
    fn prompt(&self, message: &str) -> Result<String, TriviaError> {
        print!("{message}");
        io::stdout().flush()?;

        let mut line = String::new();
        let bytes = io::stdin().lock().read_line(&mut line)?;
        if bytes == 0 {
            return Err(TriviaError::UserTermination);
        }
        Ok(line.trim().to_owned())
    }
}

impl InputSource for TerminalInput {
    fn choose_category(&mut self, available: &[String]) -> Result<Option<String>, TriviaError> {
        println!("\nCategories:");
        for (i, name) in available.iter().enumerate() {
            println!("  {}. {name}", i + 1);
        }

        loop {
            let line = self.prompt("Choose a category (number or name, Enter for random): ")?;
            if line.is_empty() {
                return Ok(None);
            }

            if let Ok(number) = line.parse::<usize>() {
                if (1..=available.len()).contains(&number) {
                    return Ok(Some(available[number - 1].clone()));
                }
            } else if let Some(name) = available.iter().find(|c| c.eq_ignore_ascii_case(&line)) {
                return Ok(Some(name.clone()));
            }

            println!("{}", format!("No such category: {line}").red());
        }
    }

    fn get_answer(&mut self, question: &PresentedQuestion) -> Result<Answer, TriviaError> {
        let count = question.answers.len();
        loop {
            let line =
                self.prompt(&format!("Your answer (1-{count}, 's' to skip, 'q' to quit): "))?;

            match line.to_ascii_lowercase().as_str() {
                "s" | "skip" => return Ok(Answer::Skip),
                "q" | "quit" | "end" => return Ok(Answer::End),
                other => {
                    if let Ok(number) = other.parse::<usize>() {
                        if (1..=count).contains(&number) {
                            return Ok(Answer::Choice(number - 1));
                        }
                    }
                    println!("{}", format!("Please enter 1-{count}, 's' or 'q'.").red());
                }
            }
        }
    }
}

/// Renders the game to stdout.
#[derive(Debug)]
pub struct TerminalDisplay {
    width: usize,
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self {
            width: DEFAULT_TERMINAL_WIDTH,
        }
    }
}

impl TerminalDisplay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific terminal width.
    #[must_use]
    pub fn with_width(width: usize) -> Self {
        Self { width }
    }
}

impl GameDisplay for TerminalDisplay {
    fn turn_screen(
        &mut self,
        player: &Player,
        players: &PlayerRegistry,
        turn_index: u32,
        question: &PresentedQuestion,
    ) {
        // Current player on the left, everyone else's scores on the right.
        let others: Vec<String> = players
            .iter()
            .filter(|p| p.index() != player.index())
            .map(|p| format!("{}:{}", p.name(), p.score()))
            .collect();
        let others_text = format!("[{}]", others.join(", "));

        let padding = self
            .width
            .saturating_sub(player.name().len() + others_text.len())
            .max(1);

        println!();
        println!(
            "{}{}{}",
            player.name().bold(),
            " ".repeat(padding),
            others_text.dimmed()
        );
        println!("Turn {turn_index}");
        println!("{}", "-".repeat(20));

        println!(
            "\n[{} | difficulty {}] {}",
            question.category.cyan(),
            question.difficulty,
            question.question.bold()
        );
        for (i, answer) in question.answers.iter().enumerate() {
            println!("  {}. {answer}", i + 1);
        }
    }

    fn correct_answer(&mut self, player: &Player, points: u32) {
        println!(
            "{}",
            format!("Correct, {}! +{points} points.", player.name()).green()
        );
    }

    fn handed_off(&mut self, player: &Player, next_player: &str) {
        println!(
            "{}",
            format!(
                "Wrong, {}. The question passes to {next_player}.",
                player.name()
            )
            .red()
        );
    }

    fn no_one_answered(&mut self, question: &PresentedQuestion) {
        println!(
            "{}",
            format!(
                "No one got it! The answer was: {}",
                question.right_answer()
            )
            .yellow()
        );
    }

    fn skip_used(&mut self, player: &Player, remaining: u32) {
        println!(
            "{}",
            format!("{} skipped. {remaining} skip(s) left.", player.name()).yellow()
        );
    }

    fn skip_denied(&mut self, player: &Player) {
        println!(
            "{}",
            format!("{} has no skips remaining!", player.name()).red()
        );
    }

    fn final_standings(&mut self, standings: &Standings) {
        println!("\n{}", "=".repeat(50));
        println!("{}", "FINAL SCORES".bold());
        println!("{}", "-".repeat(30));

        for (rank, player) in standings.players.iter().enumerate() {
            let line = format!("{}. {}: {} points", rank + 1, player.name(), player.score());
            if standings.is_winner(player.name()) {
                let marker = if standings.is_tie() {
                    "TIE WINNER!"
                } else {
                    "WINNER!"
                };
                println!("{} {}", line.bold(), marker.yellow().bold());
            } else {
                println!("{line}");
            }
        }

        if standings.is_tie() {
            println!(
                "\nIt's a tie! Congratulations {}!",
                standings.winners.join(" and ")
            );
        } else if let Some(winner) = standings.winners.first() {
            println!(
                "\nCongratulations {winner}! You won with {} points!",
                standings.max_score
            );
        }
        println!("{}", "=".repeat(50));
    }
}
