//! Board coordinates and the swap-distance rule.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Zero-indexed cell coordinate. Row grows downward, column grows rightward.
///
/// Signed so that callers can hand us whatever a gesture produced; negative
/// values are simply out of bounds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }

    /// Manhattan distance between two positions.
    #[must_use]
    pub fn distance(self, other: Self) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// Which pairs of cells may be swapped. Fixed for the lifetime of a board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Adjacency {
    /// Neighbours in one of the four cardinal directions.
    #[default]
    Orthogonal,
    /// Any two distinct cells sharing a row or a column.
    SameLine,
}

impl Adjacency {
    /// Bounds are not checked here.
    #[must_use]
    pub fn permits(self, a: Position, b: Position) -> bool {
        if a == b {
            return false;
        }
        match self {
            Self::Orthogonal => a.distance(b) == 1,
            Self::SameLine => a.row == b.row || a.col == b.col,
        }
    }
}
