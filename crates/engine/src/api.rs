//! JS-facing session over a randomly seeded `u8` board.
//!
//! Events are buffered and handed to JS as a flat `u32` stream from
//! `drain_events`:
//!
//! - match: `EVENT_MATCH, tile, len, row0, col0, row1, col1, ...`
//! - refill: `EVENT_REFILL`

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::config::BoardConfig;
use crate::event::BoardEvent;
use crate::position::{Adjacency, Position};
use crate::supply::RandomSupply;

pub const EVENT_MATCH: u32 = 1;
pub const EVENT_REFILL: u32 = 2;

fn encode(event: &BoardEvent<u8>, out: &mut Vec<u32>) {
    match event {
        BoardEvent::Match(m) => {
            out.push(EVENT_MATCH);
            out.push(u32::from(m.tile));
            out.push(m.len() as u32);
            for p in &m.positions {
                out.push(p.row as u32);
                out.push(p.col as u32);
            }
        }
        BoardEvent::Refill => out.push(EVENT_REFILL),
    }
}

#[wasm_bindgen]
#[derive(Debug)]
pub struct Session {
    board: Board<u8, RandomSupply>,
    events: Rc<RefCell<Vec<u32>>>,
}

#[wasm_bindgen]
impl Session {
    /// `same_line` picks the any-distance swap rule instead of neighbours only.
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: usize,
        height: usize,
        tile_kinds: u8,
        seed: u64,
        same_line: bool,
    ) -> Result<Session, JsError> {
        let config = BoardConfig {
            width,
            height,
            tile_kinds,
            adjacency: if same_line {
                Adjacency::SameLine
            } else {
                Adjacency::Orthogonal
            },
            seed,
        };
        let board = Board::from_config(&config).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self::from_board(board))
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.board.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.board.height()
    }

    /// Tile kind at (row, col), or -1 off the board.
    #[must_use]
    pub fn piece(&self, row: i32, col: i32) -> i32 {
        self.board
            .piece(Position::new(row, col))
            .map_or(-1, |&t| i32::from(t))
    }

    /// Row-major snapshot of every tile kind.
    #[must_use]
    pub fn tiles(&self) -> Vec<u8> {
        self.board
            .grid()
            .cells()
            .iter()
            .filter_map(|c| c.tile().copied())
            .collect()
    }

    #[must_use]
    pub fn can_move(&self, r1: i32, c1: i32, r2: i32, c2: i32) -> bool {
        self.board
            .can_move(Position::new(r1, c1), Position::new(r2, c2))
    }

    /// Returns whether the swap was legal and applied.
    pub fn move_pieces(&mut self, r1: i32, c1: i32, r2: i32, c2: i32) -> bool {
        self.board
            .move_pieces(Position::new(r1, c1), Position::new(r2, c2))
            .is_some()
    }

    /// Take every event recorded since the last call.
    pub fn drain_events(&mut self) -> Vec<u32> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl Session {
    #[must_use]
    pub fn from_board(mut board: Board<u8, RandomSupply>) -> Self {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        board.add_listener(move |event| encode(event, &mut sink.borrow_mut()));
        Self { board, events }
    }

    #[must_use]
    pub fn board(&self) -> &Board<u8, RandomSupply> {
        &self.board
    }
}
