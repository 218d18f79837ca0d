//! Command-line front end: question loading and terminal collaborators.

pub mod loader;
pub mod terminal;

pub use terminal::{TerminalDisplay, TerminalInput, DEFAULT_TERMINAL_WIDTH};
