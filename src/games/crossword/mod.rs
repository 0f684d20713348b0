//! Crossword: fill a grid against a fixed solution, against the clock.
//!
//! - Blocked squares (`#`) accept no input
//! - A full, correct grid completes the puzzle and stops the clock
//! - Clue numbers follow standard crossword numbering

mod clock;
mod clues;
mod config;
mod game;

pub use clock::{format_time, Clock, InstantTicker, TickSource};
pub use clues::{clue_number_at, numbering, Direction, NumberedCell};
pub use config::{Clue, CrosswordConfig, Square, BLOCKED, GRID_SIZE};
pub use game::{Crossword, CrosswordState};
