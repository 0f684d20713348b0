//! Strands puzzle configuration.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::Cell;
use crate::error::ConfigError;

/// Strands puzzle definition.
///
/// The grid is given as rows of uppercase letters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrandsConfig {
    /// Theme hint shown above the grid.
    pub theme: String,

    /// Letter rows, all the same length.
    pub grid: Vec<String>,

    /// Words hidden in the grid.
    pub words: Vec<String>,

    /// The word spanning the theme. Must be one of `words`.
    pub spangram: String,
}

impl Default for StrandsConfig {
    fn default() -> Self {
        Self {
            theme: "React Development".to_string(),
            grid: ["THEME", "REACT", "STATE", "HOOKS", "PROPS"]
                .into_iter()
                .map(String::from)
                .collect(),
            words: ["REACT", "STATE", "PROPS", "HOOKS", "THEME"]
                .into_iter()
                .map(String::from)
                .collect(),
            spangram: "THEME".to_string(),
        }
    }
}

impl StrandsConfig {
    /// Use a different grid and word list.
    #[must_use]
    pub fn with_puzzle<R, W>(mut self, grid: R, words: W, spangram: impl Into<String>) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        W: IntoIterator,
        W::Item: Into<String>,
    {
        self.grid = grid.into_iter().map(Into::into).collect();
        self.words = words.into_iter().map(Into::into).collect();
        self.spangram = spangram.into();
        self
    }

    /// Use a different theme hint.
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.len()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.grid.first().map_or(0, |row| row.len())
    }

    /// Letter at `cell`, or `None` outside the grid.
    #[must_use]
    pub fn letter_at(&self, cell: Cell) -> Option<char> {
        self.grid
            .get(cell.row)
            .and_then(|row| row.as_bytes().get(cell.col))
            .map(|&b| b as char)
    }

    /// Check if `word` is one of the hidden words.
    #[must_use]
    pub fn is_target(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Check the grid is a non-empty rectangle of uppercase letters and the
    /// word list is distinct and contains the spangram.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cols = self.cols();
        if self.grid.is_empty() || cols == 0 {
            return Err(ConfigError::new("strands grid must not be empty"));
        }
        for (index, row) in self.grid.iter().enumerate() {
            if row.len() != cols || !row.bytes().all(|b| b.is_ascii_uppercase()) {
                return Err(ConfigError::new(format!(
                    "strands row {index} must be {cols} uppercase letters, got {row:?}"
                )));
            }
        }

        if self.words.is_empty() {
            return Err(ConfigError::new("strands needs at least one word"));
        }
        let mut seen = FxHashSet::default();
        for word in &self.words {
            if word.is_empty() || !seen.insert(word.as_str()) {
                return Err(ConfigError::new(format!("strands word {word:?} is empty or repeated")));
            }
        }
        if !self.is_target(&self.spangram) {
            return Err(ConfigError::new(format!(
                "spangram {:?} is not in the word list",
                self.spangram
            )));
        }
        Ok(())
    }
}
