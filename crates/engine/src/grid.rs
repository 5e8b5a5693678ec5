//! Fixed-size rectangular storage for board cells.

use crate::cell::Cell;
use crate::position::Position;
use crate::supply::TileSupply;

/// 2D grid of cells, stored row-major. Out-of-bounds reads return `None`,
/// writes are no-ops.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<Cell<T>>,
}

impl<T> Grid<T> {
    /// Fill every cell from `supply`, row by row. Zero dimensions are bumped
    /// to 1.
    pub fn from_supply<S>(width: usize, height: usize, supply: &mut S) -> Self
    where
        S: TileSupply<T> + ?Sized,
    {
        let width = width.max(1);
        let height = height.max(1);
        let cells = (0..width * height)
            .map(|_| Cell::Tile(supply.next_tile()))
            .collect();
        Self {
            width,
            height,
            cells,
        }
    }

    /// Build a grid from explicit rows. Ragged input is rejected.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let cells = rows.into_iter().flatten().map(Cell::Tile).collect();
        Some(Self {
            width,
            height,
            cells,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn in_bounds(&self, p: Position) -> bool {
        p.row >= 0 && (p.row as usize) < self.height && p.col >= 0 && (p.col as usize) < self.width
    }

    fn index(&self, p: Position) -> Option<usize> {
        self.in_bounds(p)
            .then(|| p.row as usize * self.width + p.col as usize)
    }

    #[must_use]
    pub fn cell(&self, p: Position) -> Option<&Cell<T>> {
        self.index(p).map(|i| &self.cells[i])
    }

    #[must_use]
    pub fn piece(&self, p: Position) -> Option<&T> {
        self.cell(p).and_then(Cell::tile)
    }

    pub fn set(&mut self, p: Position, cell: Cell<T>) {
        if let Some(i) = self.index(p) {
            self.cells[i] = cell;
        }
    }

    /// Exchange the contents of two cells. No-op if either is out of bounds.
    pub fn swap(&mut self, a: Position, b: Position) {
        if let (Some(i), Some(j)) = (self.index(a), self.index(b)) {
            self.cells.swap(i, j);
        }
    }

    /// Every coordinate, row-major.
    #[must_use]
    pub fn positions(&self) -> Vec<Position> {
        let w = self.width as i32;
        let h = self.height as i32;
        (0..h)
            .flat_map(|row| (0..w).map(move |col| Position::new(row, col)))
            .collect()
    }

    /// Row-major view of every cell.
    #[must_use]
    pub fn cells(&self) -> &[Cell<T>] {
        &self.cells
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Clear a cell. Returns whether it held a tile.
    pub fn clear(&mut self, p: Position) -> bool {
        match self.index(p) {
            Some(i) => !self.cells[i].take().is_empty(),
            None => false,
        }
    }

    /// Compact a column's tiles downward, keeping their relative order.
    /// The vacated cells at the top end up empty. Returns how many.
    pub fn collapse_column(&mut self, col: usize) -> usize {
        if col >= self.width {
            return 0;
        }
        let w = self.width;
        // Bottom-up: `write` is the lowest row not yet holding a settled tile.
        let mut write = self.height;
        for row in (0..self.height).rev() {
            let i = row * w + col;
            if self.cells[i].is_empty() {
                continue;
            }
            write -= 1;
            if write != row {
                let tile = self.cells[i].take();
                self.cells[write * w + col] = tile;
            }
        }
        write
    }

    pub fn collapse(&mut self) {
        for col in 0..self.width {
            self.collapse_column(col);
        }
    }

    /// Pull a tile for every empty cell, column by column, top to bottom.
    /// Returns the number of cells filled.
    pub fn refill<S>(&mut self, supply: &mut S) -> usize
    where
        S: TileSupply<T> + ?Sized,
    {
        let mut filled = 0;
        for col in 0..self.width {
            for row in 0..self.height {
                let cell = &mut self.cells[row * self.width + col];
                if cell.is_empty() {
                    *cell = Cell::Tile(supply.next_tile());
                    filled += 1;
                }
            }
        }
        filled
    }
}

impl<T: Clone> Grid<T> {
    /// Row-major copy of every tile; `None` for empty cells.
    #[must_use]
    pub fn tiles(&self) -> Vec<Option<T>> {
        self.cells.iter().map(|c| c.tile().cloned()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::supply::CycleSupply;
    use proptest::prelude::*;

    fn rows(layout: &[&str]) -> Grid<char> {
        Grid::from_rows(layout.iter().map(|r| r.chars().collect()).collect()).unwrap()
    }

    fn render(grid: &Grid<char>) -> Vec<String> {
        (0..grid.height() as i32)
            .map(|row| {
                (0..grid.width() as i32)
                    .map(|col| grid.cell(Position::new(row, col)).map_or('?', |c| *c.tile().unwrap_or(&'.')))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn grid_from_supply_fills_row_major() {
        let mut supply = CycleSupply::new("ABCDEF".chars()).unwrap();
        let grid = Grid::from_supply(3, 2, &mut supply);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.empty_count(), 0);
        assert_eq!(render(&grid), ["ABC", "DEF"]);
        assert_eq!(supply.pulled(), 6);
    }

    #[test]
    fn grid_zero_dimensions_clamp_to_one() {
        let mut supply = CycleSupply::new([7u8]).unwrap();
        let grid = Grid::from_supply(0, 0, &mut supply);
        assert_eq!((grid.width(), grid.height()), (1, 1));
        assert_eq!(grid.piece(Position::new(0, 0)), Some(&7));
    }

    #[test]
    fn grid_from_rows_rejects_ragged_input() {
        assert!(Grid::from_rows(vec![vec![1, 2], vec![3]]).is_none());
        assert!(Grid::<u8>::from_rows(vec![]).is_none());
    }

    #[test]
    fn grid_out_of_bounds_is_absent() {
        let grid = rows(&["AB", "CD"]);
        assert_eq!(grid.piece(Position::new(-1, 0)), None);
        assert_eq!(grid.piece(Position::new(0, -1)), None);
        assert_eq!(grid.piece(Position::new(2, 0)), None);
        assert_eq!(grid.piece(Position::new(0, 2)), None);
        assert!(grid.cell(Position::new(5, 5)).is_none());
    }

    #[test]
    fn grid_empty_cell_is_distinct_from_absent() {
        let mut grid = rows(&["AB", "CD"]);
        assert!(grid.clear(Position::new(0, 1)));
        assert_eq!(grid.cell(Position::new(0, 1)), Some(&Cell::Empty));
        assert_eq!(grid.piece(Position::new(0, 1)), None);
        assert_eq!(grid.cell(Position::new(0, 2)), None);
        assert!(!grid.clear(Position::new(0, 1)), "clearing twice is idempotent");
    }

    #[test]
    fn grid_set_out_of_bounds_is_noop() {
        let mut grid = rows(&["AB", "CD"]);
        let before = grid.clone();
        grid.set(Position::new(-1, 0), Cell::Tile('Z'));
        grid.set(Position::new(0, 9), Cell::Tile('Z'));
        grid.swap(Position::new(0, 0), Position::new(9, 9));
        assert_eq!(grid, before);
    }

    #[test]
    fn grid_swap_exchanges_tiles() {
        let mut grid = rows(&["AB", "CD"]);
        grid.swap(Position::new(0, 0), Position::new(1, 1));
        assert_eq!(render(&grid), ["DB", "CA"]);
    }

    #[test]
    fn positions_are_row_major() {
        let grid = rows(&["ABC", "DEF"]);
        let got: Vec<(i32, i32)> = grid.positions().iter().map(|p| (p.row, p.col)).collect();
        assert_eq!(got, [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn collapse_keeps_relative_order() {
        let mut grid = rows(&["A", "B", "C", "D", "E"]);
        grid.clear(Position::new(1, 0));
        grid.clear(Position::new(3, 0));
        let vacated = grid.collapse_column(0);
        assert_eq!(vacated, 2);
        assert_eq!(render(&grid), [".", ".", "A", "C", "E"]);
    }

    #[test]
    fn collapse_without_gaps_is_identity() {
        let mut grid = rows(&["AB", "CD"]);
        let before = grid.clone();
        grid.collapse();
        assert_eq!(grid, before);
    }

    #[test]
    fn refill_goes_column_by_column_top_to_bottom() {
        let mut grid = rows(&["AB", "CD"]);
        for p in grid.positions() {
            grid.clear(p);
        }
        let mut supply = CycleSupply::new("wxyz".chars()).unwrap();
        assert_eq!(grid.refill(&mut supply), 4);
        assert_eq!(render(&grid), ["wy", "xz"]);
    }

    // Property: gravity conserves tiles and leaves no gap beneath a tile.
    proptest! {
        #[test]
        fn prop_collapse_conserves_and_compacts(
            height in 1usize..8,
            width in 1usize..8,
            holes in proptest::collection::vec(any::<bool>(), 64),
        ) {
            let mut n = 0u32;
            let mut supply = || { n += 1; n };
            let mut grid = Grid::from_supply(width, height, &mut supply);
            for (p, hole) in grid.positions().into_iter().zip(holes) {
                if hole {
                    grid.clear(p);
                }
            }
            let before_cols: Vec<Vec<u32>> = (0..width as i32)
                .map(|col| (0..height as i32).filter_map(|row| grid.piece(Position::new(row, col)).copied()).collect())
                .collect();

            grid.collapse();

            for col in 0..width as i32 {
                let after: Vec<u32> = (0..height as i32)
                    .filter_map(|row| grid.piece(Position::new(row, col)).copied())
                    .collect();
                prop_assert_eq!(&after, &before_cols[col as usize]);
                let first_tile = (0..height as i32)
                    .find(|&row| grid.piece(Position::new(row, col)).is_some())
                    .unwrap_or(height as i32);
                for row in first_tile..height as i32 {
                    prop_assert!(grid.piece(Position::new(row, col)).is_some());
                }
            }
        }
    }
}
