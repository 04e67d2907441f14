//! Render-ready output state.
//!
//! The engine never draws anything. [`GameState::view`] flattens a state
//! into the pieces a front end needs: the displayed board, a status line,
//! and the move list in display order.

use super::engine::GameState;
use super::history::Coordinates;
use super::rules::{check_winner, is_full};
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Presentation switches chosen by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    /// Append "(col,row)" to move labels.
    pub show_coordinates: bool,
    /// Report a full board without a winner as a draw.
    pub announce_draw: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            show_coordinates: true,
            announce_draw: false,
        }
    }
}

/// Status line for the displayed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The displayed board has a winner.
    #[display("Winner {_0}")]
    Winner(Player),
    /// Play continues with this player.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
    /// Full board, no winner. Only reported with [`ViewOptions::announce_draw`].
    #[display("Draw")]
    Draw,
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDescriptor {
    /// History step this entry jumps to.
    pub step: usize,
    /// Button text, e.g. "Go to move #2 (1,1)".
    pub label: String,
    /// Where the move was played; `None` for the game start.
    pub coordinates: Option<Coordinates>,
    /// True for the step currently displayed.
    pub is_current: bool,
}

/// Everything a front end renders for one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Board at the current step.
    pub board: Board,
    /// Step being displayed.
    pub current_step: usize,
    /// Status line.
    pub status: Status,
    /// Move list, already in display order.
    pub moves: Vec<MoveDescriptor>,
    /// Whether `moves` is oldest first.
    pub sort_ascending: bool,
    /// Text for the sort toggle control.
    pub sort_toggle_label: String,
}

/// Label for a move-list entry.
pub fn move_label(step: usize, coordinates: Option<Coordinates>, show_coordinates: bool) -> String {
    match (step, coordinates) {
        (0, _) => "Go to game start".to_string(),
        (n, Some(coords)) if show_coordinates => format!("Go to move #{} {}", n, coords),
        (n, _) => format!("Go to move #{}", n),
    }
}

/// Label for the control that flips the sort order.
pub fn sort_toggle_label(sort_ascending: bool) -> &'static str {
    if sort_ascending {
        "Sort history in descending order"
    } else {
        "Sort history in ascending order"
    }
}

impl GameState {
    /// Status of the displayed step.
    pub fn status(&self, options: ViewOptions) -> Status {
        let board = self.current_board();
        if let Some(winner) = check_winner(board) {
            Status::Winner(winner)
        } else if options.announce_draw && is_full(board) {
            Status::Draw
        } else {
            Status::NextPlayer(self.to_move())
        }
    }

    /// Move-list entries in display order.
    ///
    /// Storage order never changes; descending order only reverses the
    /// returned list.
    pub fn move_descriptors(&self, options: ViewOptions) -> Vec<MoveDescriptor> {
        let mut moves: Vec<MoveDescriptor> = self
            .history()
            .iter()
            .enumerate()
            .map(|(step, entry)| {
                let coordinates = entry.originating_move();
                MoveDescriptor {
                    step,
                    label: move_label(step, coordinates, options.show_coordinates),
                    coordinates,
                    is_current: step == self.current_step(),
                }
            })
            .collect();

        if !self.sort_ascending() {
            moves.reverse();
        }
        moves
    }

    /// Builds the full render state.
    #[instrument(skip(self), fields(step = self.current_step()))]
    pub fn view(&self, options: ViewOptions) -> GameView {
        GameView {
            board: self.current_board().clone(),
            current_step: self.current_step(),
            status: self.status(options),
            moves: self.move_descriptors(options),
            sort_ascending: self.sort_ascending(),
            sort_toggle_label: sort_toggle_label(self.sort_ascending()).to_string(),
        }
    }
}
