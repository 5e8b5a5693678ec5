//! Run detection.
//!
//! A run is a maximal straight line of equal tiles. Each run of length >= 3
//! is reported once, from its first cell (leftmost for horizontal, topmost
//! for vertical), so a line of five is one match of five rather than three
//! overlapping matches of three. Horizontal and vertical runs through the
//! same tile are separate matches: an L, T or plus shape yields two.

use crate::grid::Grid;
use crate::position::Position;

/// Shortest run that counts as a match.
pub const MIN_RUN: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    const fn step(self) -> (i32, i32) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
        }
    }
}

/// A removable run: the shared tile and the cells it covers, in line order.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Match<T> {
    pub tile: T,
    pub positions: Vec<Position>,
    pub orientation: Orientation,
}

impl<T> Match<T> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn covers(&self, p: Position) -> bool {
        self.positions.contains(&p)
    }
}

/// Length of the run starting at `start` and extending along `orientation`.
/// Zero when `start` is empty or out of bounds.
fn run_length<T: PartialEq>(grid: &Grid<T>, start: Position, orientation: Orientation) -> usize {
    let Some(first) = grid.cell(start) else {
        return 0;
    };
    if first.is_empty() {
        return 0;
    }
    let (dr, dc) = orientation.step();
    let mut len = 1;
    let mut next = start.offset(dr, dc);
    while grid.cell(next).is_some_and(|c| c.matches(first)) {
        len += 1;
        next = next.offset(dr, dc);
    }
    len
}

/// True when the cell before `p` along `orientation` continues the same run.
fn continues_from_before<T: PartialEq>(grid: &Grid<T>, p: Position, orientation: Orientation) -> bool {
    let (dr, dc) = orientation.step();
    match (grid.cell(p.offset(-dr, -dc)), grid.cell(p)) {
        (Some(prev), Some(here)) => prev.matches(here),
        _ => false,
    }
}

fn run_at<T: PartialEq + Clone>(grid: &Grid<T>, p: Position, orientation: Orientation) -> Option<Match<T>> {
    if continues_from_before(grid, p, orientation) {
        return None;
    }
    let len = run_length(grid, p, orientation);
    if len < MIN_RUN {
        return None;
    }
    let tile = grid.piece(p)?.clone();
    let (dr, dc) = orientation.step();
    let positions = (0..len as i32).map(|k| p.offset(dr * k, dc * k)).collect();
    Some(Match {
        tile,
        positions,
        orientation,
    })
}

/// Every match on the grid. Cells are visited row-major; at each cell a
/// horizontal run is reported before a vertical one.
#[must_use]
pub fn find_matches<T: PartialEq + Clone>(grid: &Grid<T>) -> Vec<Match<T>> {
    let mut found = Vec::new();
    for p in grid.positions() {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            if let Some(m) = run_at(grid, p, orientation) {
                found.push(m);
            }
        }
    }
    found
}

/// Whether any run of at least `MIN_RUN` passes through one of `cells`.
#[must_use]
pub fn has_match_through<T: PartialEq>(grid: &Grid<T>, cells: &[Position]) -> bool {
    cells.iter().any(|&p| {
        [Orientation::Horizontal, Orientation::Vertical]
            .into_iter()
            .any(|orientation| {
                let (dr, dc) = orientation.step();
                let mut start = p;
                while continues_from_before(grid, start, orientation) {
                    start = start.offset(-dr, -dc);
                }
                run_length(grid, start, orientation) >= MIN_RUN
            })
    })
}
