//! History entries: one board snapshot per ply.

use super::position::Position;
use super::types::Board;
use serde::{Deserialize, Serialize};

/// Column and row of a cell, both 0-2.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({column},{row})")]
pub struct Coordinates {
    /// Column, left to right.
    pub column: u8,
    /// Row, top to bottom.
    pub row: u8,
}

impl Coordinates {
    /// Creates a coordinate pair.
    pub fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }
}

/// A recorded board snapshot and the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    /// Cell played to reach this snapshot; `None` for the initial entry.
    origin: Option<Position>,
}

impl HistoryEntry {
    /// The entry every game starts from: an empty board, no move.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            origin: None,
        }
    }

    /// An entry produced by playing at `origin`.
    pub fn from_move(board: Board, origin: Position) -> Self {
        Self {
            board,
            origin: Some(origin),
        }
    }

    /// The board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cell that was played, if any.
    pub fn origin(&self) -> Option<Position> {
        self.origin
    }

    /// The (column, row) of the originating move, if any.
    pub fn originating_move(&self) -> Option<Coordinates> {
        self.origin.map(Position::coordinates)
    }
}

impl Default for HistoryEntry {
    fn default() -> Self {
        Self::initial()
    }
}
