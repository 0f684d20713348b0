//! Grid coordinates shared by the grid puzzles.
//!
//! A `Cell` is a `(row, col)` pair. It persists as the string `"row-col"`,
//! which is the form stored snapshots use for selections and paths.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev distance (king moves) between two cells.
    #[must_use]
    pub fn chebyshev(self, other: Cell) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// True if `other` touches this cell, diagonals included.
    ///
    /// A cell is not adjacent to itself.
    #[must_use]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self != other && self.chebyshev(other) <= 1
    }

    /// True if the cell lies inside a `rows` x `cols` grid.
    #[must_use]
    pub const fn in_bounds(self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

/// Error parsing a `"row-col"` cell id.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid cell id {input:?}")]
pub struct ParseCellError {
    pub input: String,
}

impl FromStr for Cell {
    type Err = ParseCellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCellError { input: s.to_string() };
        let (row, col) = s.split_once('-').ok_or_else(err)?;
        let row = row.parse().map_err(|_| err())?;
        let col = col.parse().map_err(|_| err())?;
        Ok(Self { row, col })
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
