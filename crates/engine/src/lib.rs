//! Match-3 tile swap engine.
//!
//! A [`Board`] holds a grid of tiles pulled from a [`TileSupply`]. Swapping
//! two cells is legal when the adjacency rule allows the pair and the swap
//! lines up three or more equal tiles through one of them. A legal swap is
//! applied and then resolved: matches are removed, tiles fall, empty cells
//! are refilled from the supply, and the scan repeats until nothing matches.
//! Listeners hear about each removed match and each refill pass.

pub mod api;
pub mod board;
pub mod cascade;
pub mod cell;
pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod matcher;
pub mod position;
pub mod supply;


pub use api::Session;
pub use board::Board;
pub use cascade::{CascadeReport, PassReport};
pub use cell::Cell;
pub use config::BoardConfig;
pub use error::{ConfigError, SupplyError};
pub use event::BoardEvent;
pub use grid::Grid;
pub use matcher::{find_matches, Match, Orientation};
pub use position::{Adjacency, Position};
pub use supply::{CycleSupply, RandomSupply, TileSupply};
