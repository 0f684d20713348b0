//! Wordle: six rows to find a five-letter word.
//!
//! - Letters fill the active row, BACKSPACE removes, ENTER submits a full row
//! - Tiles score by membership: `Correct`, `Present`, `Absent`
//! - A matching row wins; a sixth miss loses

mod config;
mod game;

pub use config::{WordleConfig, WORD_LENGTH};
pub use game::{Key, LetterStatus, Wordle, WordleState};
