//! The nine cells of the board and their coordinates.

use super::history::Coordinates;
use super::rules::check_winner;
use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Column of this position (0-2, left to right).
    pub fn column(self) -> u8 {
        (self.to_index() % 3) as u8
    }

    /// Row of this position (0-2, top to bottom).
    pub fn row(self) -> u8 {
        (self.to_index() / 3) as u8
    }

    /// Returns the (column, row) pair for this position.
    pub fn coordinates(self) -> Coordinates {
        Coordinates::new(self.column(), self.row())
    }

    /// Creates a position from a column and row, both 0-2.
    pub fn from_coordinates(column: u8, row: u8) -> Option<Self> {
        if column > 2 || row > 2 {
            return None;
        }
        Self::from_index(row as usize * 3 + column as usize)
    }

    /// Filters positions by board state - returns only empty squares.
    ///
    /// A won board has no valid moves.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        if check_winner(board).is_some() {
            return Vec::new();
        }
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}
