//! Strands: trace themed words through a letter grid.
//!
//! Paths connect touching cells, diagonals included, and never revisit a
//! cell. One word, the spangram, is flagged as the theme's centrepiece.
//! Finding every word completes the puzzle.

mod config;
mod game;

pub use config::StrandsConfig;
pub use game::{FoundWord, Path, Strands, StrandsState};
