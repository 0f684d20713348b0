//! Clue numbering.
//!
//! Standard crossword numbering: scanning row by row, a square gets the
//! next number when it begins an across run or a down run of at least two
//! open squares.

use std::fmt;

use super::config::{CrosswordConfig, Square};
use crate::core::Cell;

/// Clue direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Across,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A numbered square and the runs it starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberedCell {
    pub cell: Cell,
    pub number: u32,
    pub across: bool,
    pub down: bool,
}

impl NumberedCell {
    /// Check if this square starts a run in `direction`.
    #[must_use]
    pub fn starts(&self, direction: Direction) -> bool {
        match direction {
            Direction::Across => self.across,
            Direction::Down => self.down,
        }
    }
}

fn is_open(config: &CrosswordConfig, row: usize, col: usize) -> bool {
    matches!(config.square(Cell::new(row, col)), Some(Square::Letter(_)))
}

/// Number the grid in reading order.
#[must_use]
pub fn numbering(config: &CrosswordConfig) -> Vec<NumberedCell> {
    let size = config.size();
    let mut numbered = Vec::new();
    let mut next = 1;

    for row in 0..size {
        for col in 0..size {
            if !is_open(config, row, col) {
                continue;
            }
            let across = (col == 0 || !is_open(config, row, col - 1)) && is_open(config, row, col + 1);
            let down = (row == 0 || !is_open(config, row - 1, col)) && is_open(config, row + 1, col);
            if across || down {
                numbered.push(NumberedCell {
                    cell: Cell::new(row, col),
                    number: next,
                    across,
                    down,
                });
                next += 1;
            }
        }
    }
    numbered
}

/// Smallest clue number starting at `cell`, across clues first.
#[must_use]
pub fn clue_number_at(config: &CrosswordConfig, cell: Cell) -> Option<u32> {
    let smallest = |direction| {
        config
            .clues(direction)
            .iter()
            .filter(|clue| clue.start == cell)
            .map(|clue| clue.number)
            .min()
    };
    smallest(Direction::Across).or_else(|| smallest(Direction::Down))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_numbering() {
        let numbers = numbering(&CrosswordConfig::default());
        let summary: Vec<_> = numbers
            .iter()
            .map(|n| (n.number, n.cell, n.across, n.down))
            .collect();

        assert_eq!(
            summary,
            vec![
                (1, Cell::new(0, 0), true, true),
                (2, Cell::new(0, 2), false, true),
                (3, Cell::new(0, 4), false, true),
                (4, Cell::new(4, 0), true, false),
            ]
        );
    }

    #[test]
    fn test_clue_number_at() {
        let config = CrosswordConfig::default();
        assert_eq!(clue_number_at(&config, Cell::new(0, 0)), Some(1));
        assert_eq!(clue_number_at(&config, Cell::new(0, 4)), Some(3));
        assert_eq!(clue_number_at(&config, Cell::new(4, 0)), Some(4));
        assert_eq!(clue_number_at(&config, Cell::new(2, 2)), None);
    }

    #[test]
    fn test_across_checked_before_down() {
        let mut config = CrosswordConfig::default();
        config.across[0].number = 9;
        assert_eq!(clue_number_at(&config, Cell::new(0, 0)), Some(9));
    }

    #[test]
    fn test_single_squares_are_not_numbered() {
        let config = CrosswordConfig::default().with_puzzle(["A#", "#B"], vec![], vec![]);
        assert!(numbering(&config).is_empty());
    }
}
