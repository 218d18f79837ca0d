//! Question records and the without-replacement draw pool.

pub mod manager;
pub mod question;

pub use manager::QuestionPool;
pub use question::{AnswerList, PresentedQuestion, Question};
