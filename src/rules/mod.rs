//! Engine trait for the puzzles.
//!
//! Games implement `PuzzleEngine` to expose:
//! - Their identity
//! - Their outcome (in progress, won, lost)
//! - A destructive reset
//!
//! The arcade hub drives resets and badges through this trait without
//! knowing any game's rules.

pub mod engine;

pub use engine::{Outcome, PuzzleEngine};
