//! Question loading.
//!
//! The engine does not care where questions come from; this module is the
//! file-based source. Records are validated on load so the pool only ever
//! sees well-formed questions.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::TriviaError;
use crate::pool::question::Question;

/// A small starter set, embedded so the game runs without a question file.
const BUILTIN: &str = include_str!("builtin_questions.json");

/// Validate a batch of records, reporting the first bad one.
fn validate_all(questions: &[Question]) -> Result<(), TriviaError> {
    for question in questions {
        question.validate()?;
    }
    Ok(())
}

/// Load and validate questions from a JSON file.
///
/// The file holds an array of question records:
/// `question`, `category`, `difficulty`, `right_answer`, `wrong_answers`.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Question>, TriviaError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let questions: Vec<Question> = serde_json::from_str(&raw)?;
    validate_all(&questions)?;
    info!(path = %path.display(), count = questions.len(), "loaded question file");
    Ok(questions)
}

/// The embedded starter question set.
pub fn builtin() -> Result<Vec<Question>, TriviaError> {
    let questions: Vec<Question> = serde_json::from_str(BUILTIN)?;
    validate_all(&questions)?;
    Ok(questions)
}
