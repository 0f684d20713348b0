//! Wordle puzzle configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Letters per guess.
pub const WORD_LENGTH: usize = 5;

/// Wordle puzzle definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordleConfig {
    /// The hidden word, uppercase.
    pub solution: String,

    /// Rows on the board (default: 6).
    pub max_guesses: usize,
}

impl Default for WordleConfig {
    fn default() -> Self {
        Self {
            solution: "AUGIE".to_string(),
            max_guesses: 6,
        }
    }
}

impl WordleConfig {
    /// Use a different solution. Case is normalized to uppercase.
    #[must_use]
    pub fn with_solution(mut self, solution: impl Into<String>) -> Self {
        self.solution = solution.into().to_ascii_uppercase();
        self
    }

    /// Use a different number of rows.
    #[must_use]
    pub fn with_max_guesses(mut self, rows: usize) -> Self {
        self.max_guesses = rows;
        self
    }

    /// Check the solution is five uppercase ASCII letters and there is at
    /// least one row.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.solution.len() != WORD_LENGTH
            || !self.solution.bytes().all(|b| b.is_ascii_uppercase())
        {
            return Err(ConfigError::new(format!(
                "wordle solution must be {WORD_LENGTH} uppercase letters, got {:?}",
                self.solution
            )));
        }
        if self.max_guesses == 0 {
            return Err(ConfigError::new("wordle needs at least one guess row"));
        }
        Ok(())
    }
}
