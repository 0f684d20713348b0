//! Crossword puzzle configuration.

use serde::{Deserialize, Serialize};

use super::clues::{numbering, Direction};
use crate::core::Cell;
use crate::error::ConfigError;

/// Side length of the default grid.
pub const GRID_SIZE: usize = 5;

/// Marker for a blocked square in solution rows.
pub const BLOCKED: char = '#';

/// One square of the solution grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Square {
    /// Solid square, accepts no input.
    Blocked,
    /// Open square with its answer letter.
    Letter(char),
}

/// A numbered clue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub number: u32,
    /// First square of the answer.
    pub start: Cell,
    pub text: String,
}

impl Clue {
    pub fn new(number: u32, start: Cell, text: impl Into<String>) -> Self {
        Self {
            number,
            start,
            text: text.into(),
        }
    }
}

/// Crossword puzzle definition.
///
/// `solution` rows use uppercase letters for open squares and `#` for
/// blocked ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrosswordConfig {
    pub solution: Vec<String>,
    pub across: Vec<Clue>,
    pub down: Vec<Clue>,
}

impl Default for CrosswordConfig {
    fn default() -> Self {
        Self {
            solution: ["REACT", "O#P#H", "U#P#E", "T#S#M", "ERROR"]
                .into_iter()
                .map(String::from)
                .collect(),
            across: vec![
                Clue::new(1, Cell::new(0, 0), "JavaScript library for building UIs"),
                Clue::new(4, Cell::new(4, 0), "Mistake in code"),
            ],
            // Only three down runs start in this grid, so there is no slot
            // for a fourth down clue ("CSS styling system").
            down: vec![
                Clue::new(1, Cell::new(0, 0), "Path or direction"),
                Clue::new(2, Cell::new(0, 2), "React application state"),
                Clue::new(3, Cell::new(0, 4), "Single idea or subject"),
            ],
        }
    }
}

impl CrosswordConfig {
    /// Use a different puzzle.
    #[must_use]
    pub fn with_puzzle<R>(mut self, solution: R, across: Vec<Clue>, down: Vec<Clue>) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
    {
        self.solution = solution.into_iter().map(Into::into).collect();
        self.across = across;
        self.down = down;
        self
    }

    /// Side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.solution.len()
    }

    /// The square at `cell`, or `None` outside the grid.
    #[must_use]
    pub fn square(&self, cell: Cell) -> Option<Square> {
        let byte = *self.solution.get(cell.row)?.as_bytes().get(cell.col)?;
        Some(match byte as char {
            BLOCKED => Square::Blocked,
            letter => Square::Letter(letter),
        })
    }

    /// Every open square with its answer letter, row by row.
    pub fn open_squares(&self) -> impl Iterator<Item = (Cell, char)> + '_ {
        let size = self.size();
        (0..size)
            .flat_map(move |row| (0..size).map(move |col| Cell::new(row, col)))
            .filter_map(|cell| match self.square(cell) {
                Some(Square::Letter(letter)) => Some((cell, letter)),
                _ => None,
            })
    }

    /// Clues running in `direction`.
    #[must_use]
    pub fn clues(&self, direction: Direction) -> &[Clue] {
        match direction {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    /// Check the grid is square with letters or `#`, and that every clue
    /// starts where standard numbering puts its number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.size();
        if size == 0 {
            return Err(ConfigError::new("crossword grid must not be empty"));
        }
        for (index, row) in self.solution.iter().enumerate() {
            let valid = row.len() == size
                && row.bytes().all(|b| b.is_ascii_uppercase() || b as char == BLOCKED);
            if !valid {
                return Err(ConfigError::new(format!(
                    "crossword row {index} must be {size} letters or '#', got {row:?}"
                )));
            }
        }

        let numbers = numbering(self);
        for direction in [Direction::Across, Direction::Down] {
            for clue in self.clues(direction) {
                let placed = numbers
                    .iter()
                    .find(|n| n.cell == clue.start)
                    .filter(|n| n.starts(direction));
                match placed {
                    Some(n) if n.number == clue.number => {}
                    _ => {
                        return Err(ConfigError::new(format!(
                            "{direction} clue {} does not start at {}",
                            clue.number, clue.start
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = CrosswordConfig::default();
        assert_eq!(config.size(), GRID_SIZE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_has_one_down_clue_per_run() {
        let config = CrosswordConfig::default();
        let down_runs = numbering(&config).iter().filter(|n| n.down).count();
        assert_eq!(config.down.len(), down_runs);
        assert_eq!(down_runs, 3);
    }

    #[test]
    fn test_squares() {
        let config = CrosswordConfig::default();
        assert_eq!(config.square(Cell::new(0, 0)), Some(Square::Letter('R')));
        assert_eq!(config.square(Cell::new(1, 1)), Some(Square::Blocked));
        assert_eq!(config.square(Cell::new(5, 0)), None);
        assert_eq!(config.open_squares().count(), 19);
    }

    #[test]
    fn test_validate_rejects_misplaced_clue() {
        let mut config = CrosswordConfig::default();
        config.down[0].start = Cell::new(0, 1);
        assert!(config.validate().is_err());

        let mut config = CrosswordConfig::default();
        config.across[1].number = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_square_grid() {
        let config = CrosswordConfig::default().with_puzzle(["AB", "CD", "EF"], vec![], vec![]);
        assert!(config.validate().is_err());
    }
}
