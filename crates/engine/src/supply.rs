//! Tile supplies: where new tiles come from at construction and on refill.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SupplyError;

/// Pull-based source of tile values. Called once per cell at construction
/// and once per vacated cell during refill. Must never run dry.
pub trait TileSupply<T> {
    fn next_tile(&mut self) -> T;
}

impl<T, F> TileSupply<T> for F
where
    F: FnMut() -> T,
{
    fn next_tile(&mut self) -> T {
        self()
    }
}

/// Replays a fixed sequence forever.
#[derive(Clone, Debug)]
pub struct CycleSupply<T> {
    tiles: Vec<T>,
    cursor: usize,
}

impl<T: Clone> CycleSupply<T> {
    pub fn new(tiles: impl IntoIterator<Item = T>) -> Result<Self, SupplyError> {
        let tiles: Vec<T> = tiles.into_iter().collect();
        if tiles.is_empty() {
            return Err(SupplyError::EmptySequence);
        }
        Ok(Self { tiles, cursor: 0 })
    }

    /// How many tiles have been handed out so far.
    #[must_use]
    pub fn pulled(&self) -> usize {
        self.cursor
    }
}

impl<T: Clone> TileSupply<T> for CycleSupply<T> {
    fn next_tile(&mut self) -> T {
        let tile = self.tiles[self.cursor % self.tiles.len()].clone();
        self.cursor += 1;
        tile
    }
}

/// Seeded uniform supply of tile kinds `0..kinds`.
pub struct RandomSupply {
    rng: StdRng,
    kinds: u8,
}

impl RandomSupply {
    pub fn new(kinds: u8, seed: u64) -> Result<Self, SupplyError> {
        if kinds == 0 {
            return Err(SupplyError::NoKinds);
        }
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            kinds,
        })
    }

    #[must_use]
    pub fn kinds(&self) -> u8 {
        self.kinds
    }
}

impl fmt::Debug for RandomSupply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomSupply")
            .field("kinds", &self.kinds)
            .finish_non_exhaustive()
    }
}

impl TileSupply<u8> for RandomSupply {
    fn next_tile(&mut self) -> u8 {
        self.rng.random_range(0..self.kinds)
    }
}
