//! Puzzle engine trait shared by the four games.
//!
//! Each game has its own input surface (keys, word toggles, cell clicks,
//! cell entries), so the trait only covers what the menu and the hub need:
//! - Which game this is
//! - Whether it has ended, and how
//! - Destructive reset

use crate::core::GameId;

/// Result of a puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Still accepting input.
    InProgress,
    /// Solved. The game is in the completion registry.
    Won,
    /// Out of attempts or mistakes.
    Lost,
}

impl Outcome {
    /// Check if the game has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Common surface of every puzzle engine.
///
/// ## Implementation Notes
///
/// - Every mutating operation saves the snapshot before returning
/// - `reset` restores the default state, saves it, and removes the game
///   from the completion registry
/// - Invalid input is ignored, never reported as an error
pub trait PuzzleEngine {
    /// Which game this engine runs.
    fn id(&self) -> GameId;

    /// Current outcome.
    fn outcome(&self) -> Outcome;

    /// Discard all progress.
    fn reset(&mut self);

    // === Convenience Methods ===

    /// Check if the game has ended.
    fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Check if the game was won.
    fn is_won(&self) -> bool {
        self.outcome() == Outcome::Won
    }
}
