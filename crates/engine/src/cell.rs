//! Cell type for the board grid.

use std::fmt;

/// One grid slot. `Empty` only exists between removal and refill inside a
/// cascade pass; a settled board holds nothing but tiles.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell<T> {
    Empty,
    Tile(T),
}

impl<T> Default for Cell<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T: fmt::Display> fmt::Display for Cell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "."),
            Self::Tile(tile) => write!(f, "{tile}"),
        }
    }
}

impl<T> From<T> for Cell<T> {
    fn from(tile: T) -> Self {
        Self::Tile(tile)
    }
}

impl<T> Cell<T> {
    #[must_use]
    pub fn tile(&self) -> Option<&T> {
        match self {
            Self::Tile(tile) => Some(tile),
            Self::Empty => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl<T: PartialEq> Cell<T> {
    /// True when both cells hold equal tiles. Empty never matches, not even
    /// another Empty.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Tile(a), Self::Tile(b)) => a == b,
            _ => false,
        }
    }
}
