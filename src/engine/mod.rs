//! The turn/question rotation state machine and its collaborator seams.

pub mod game;
pub mod io;
pub mod standings;
pub mod turn;

pub use game::TurnEngine;
pub use io::{GameDisplay, InputSource};
pub use standings::Standings;
pub use turn::Answer;
