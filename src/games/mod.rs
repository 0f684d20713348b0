//! The four puzzles.
//!
//! Each game module holds its configuration, its persisted state and its
//! engine. Engines share nothing at runtime except the store and the
//! completion registry.

pub mod wordle;
pub mod connections;
pub mod strands;
pub mod crossword;

pub use wordle::{Key, LetterStatus, Wordle, WordleConfig, WordleState};
pub use connections::{Connections, ConnectionsConfig, ConnectionsState, Group, GroupColor};
pub use strands::{FoundWord, Strands, StrandsConfig, StrandsState};
pub use crossword::{Clue, Crossword, CrosswordConfig, CrosswordState, Direction};
