//! Core building blocks shared by every puzzle: game ids, grid cells, RNG.
//!
//! Nothing here knows any game's rules.

pub mod cell;
pub mod game_id;
pub mod rng;

pub use cell::{Cell, ParseCellError};
pub use game_id::GameId;
pub use rng::GameRng;
