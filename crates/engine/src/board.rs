//! The board: grid, tile supply and listeners behind one swap API.

use std::fmt;

use tracing::{debug, instrument};

use crate::cascade::{self, CascadeReport};
use crate::cell::Cell;
use crate::config::BoardConfig;
use crate::error::ConfigError;
use crate::event::{BoardEvent, Listeners};
use crate::grid::Grid;
use crate::matcher::has_match_through;
use crate::position::{Adjacency, Position};
use crate::supply::{RandomSupply, TileSupply};

/// A match-3 board.
///
/// A swap is legal when both cells are on the board, the adjacency rule
/// allows the pair, and the swap would put at least one of the two cells in
/// a run of three or more. Legal swaps are applied and then resolved to a
/// stable board before `move_pieces` returns.
pub struct Board<T, S> {
    grid: Grid<T>,
    supply: S,
    adjacency: Adjacency,
    listeners: Listeners<T>,
}

impl<T: fmt::Debug, S: fmt::Debug> fmt::Debug for Board<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("grid", &self.grid)
            .field("supply", &self.supply)
            .field("adjacency", &self.adjacency)
            .field("listeners", &self.listeners)
            .finish()
    }
}

impl<T, S> Board<T, S>
where
    T: PartialEq + Clone,
    S: TileSupply<T>,
{
    /// Fill a `width × height` board from `supply`, with orthogonal adjacency.
    /// The starting board is not resolved; it may already contain runs.
    pub fn new(supply: S, width: usize, height: usize) -> Self {
        Self::with_adjacency(supply, width, height, Adjacency::default())
    }

    pub fn with_adjacency(mut supply: S, width: usize, height: usize, adjacency: Adjacency) -> Self {
        let grid = Grid::from_supply(width, height, &mut supply);
        Self {
            grid,
            supply,
            adjacency,
            listeners: Listeners::default(),
        }
    }

    /// Use a prepared grid as the starting position. `supply` is only
    /// consulted on refill.
    pub fn from_grid(grid: Grid<T>, supply: S, adjacency: Adjacency) -> Self {
        Self {
            grid,
            supply,
            adjacency,
            listeners: Listeners::default(),
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    #[must_use]
    pub fn adjacency(&self) -> Adjacency {
        self.adjacency
    }

    #[must_use]
    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    #[must_use]
    pub fn supply(&self) -> &S {
        &self.supply
    }

    /// Every coordinate, row-major.
    #[must_use]
    pub fn positions(&self) -> Vec<Position> {
        self.grid.positions()
    }

    /// The tile at `p`, or `None` off the board.
    #[must_use]
    pub fn piece(&self, p: Position) -> Option<&T> {
        self.grid.piece(p)
    }

    #[must_use]
    pub fn cell(&self, p: Position) -> Option<&Cell<T>> {
        self.grid.cell(p)
    }

    /// Listeners must not touch the board. They cannot be removed.
    pub fn add_listener(&mut self, listener: impl FnMut(&BoardEvent<T>) + 'static) {
        self.listeners.add(listener);
    }

    /// Whether swapping `a` and `b` is legal. Never mutates the board: the
    /// swap is previewed on a copy.
    #[must_use]
    #[instrument(level = "trace", skip(self))]
    pub fn can_move(&self, a: Position, b: Position) -> bool {
        if !self.grid.in_bounds(a) || !self.grid.in_bounds(b) {
            return false;
        }
        if !self.adjacency.permits(a, b) {
            return false;
        }
        let mut preview = self.grid.clone();
        preview.swap(a, b);
        has_match_through(&preview, &[a, b])
    }

    /// Swap `a` and `b` and resolve the cascade. An illegal swap is a no-op
    /// and returns `None`.
    #[instrument(skip(self))]
    pub fn move_pieces(&mut self, a: Position, b: Position) -> Option<CascadeReport> {
        if !self.can_move(a, b) {
            debug!("illegal swap ignored");
            return None;
        }
        self.grid.swap(a, b);
        let report = cascade::resolve(&mut self.grid, &mut self.supply, &mut self.listeners);
        debug!(
            passes = report.passes,
            matches = report.matches,
            refilled = report.refilled,
            "cascade settled"
        );
        Some(report)
    }
}

impl Board<u8, RandomSupply> {
    /// Build a randomly seeded board from validated configuration.
    pub fn from_config(config: &BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let supply = RandomSupply::new(config.tile_kinds, config.seed)?;
        Ok(Self::with_adjacency(
            supply,
            config.width,
            config.height,
            config.adjacency,
        ))
    }
}
