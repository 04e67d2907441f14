//! Time-travel game engine.
//!
//! [`GameState`] records one [`HistoryEntry`] per ply and a cursor
//! (`current_step`) into that history. Every operation borrows the current
//! state and returns the next one; callers replace their copy.
//!
//! Playing from an earlier step discards every entry after it
//! (branch-and-discard). Jumping alone never discards anything.

use super::error::{EngineError, EngineErrorKind};
use super::history::HistoryEntry;
use super::invariants::{InvariantSet, TimelineInvariants};
use super::position::Position;
use super::rules::check_winner;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Phase of the displayed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves can still be played from this step.
    InProgress,
    /// The displayed board has a complete line.
    Won(Player),
}

/// Complete game state.
///
/// Deserializing checks every timeline invariant; a state that breaks
/// one is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) current_step: usize,
    pub(crate) sort_ascending: bool,
}

impl GameState {
    /// Creates a new game: one empty entry, step 0, ascending move list.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            current_step: 0,
            sort_ascending: true,
        }
    }

    /// Returns the recorded history.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the step being viewed.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns whether the move list is shown oldest first.
    pub fn sort_ascending(&self) -> bool {
        self.sort_ascending
    }

    /// Returns the board at the current step.
    pub fn current_board(&self) -> &Board {
        self.history[self.current_step].board()
    }

    /// Returns the player to move at the current step.
    pub fn to_move(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Returns the winner on the current board, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.current_board())
    }

    /// Returns the phase of the displayed step.
    pub fn phase(&self) -> Phase {
        match self.winner() {
            Some(player) => Phase::Won(player),
            None => Phase::InProgress,
        }
    }

    /// Returns true when the current step is the last recorded one.
    pub fn is_latest(&self) -> bool {
        self.current_step + 1 == self.history.len()
    }

    /// Empty cells that can be played from the current step.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(self.current_board())
    }

    /// Plays the cell at `index` (0-8) for the player to move.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error when `index` is not 0-8.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn play_move(&self, index: usize) -> Result<Self, EngineError> {
        let position = Position::from_index(index)
            .ok_or_else(|| EngineError::new(EngineErrorKind::CellOutOfRange { index }))?;
        Ok(self.play_position(position))
    }

    /// Plays `position` for the player to move.
    ///
    /// Returns an unchanged copy when the current board is already won or
    /// the cell is occupied. Otherwise history after the current step is
    /// dropped, the new snapshot appended, and the cursor moved onto it.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.to_move()))]
    pub fn play_position(&self, position: Position) -> Self {
        let board = self.current_board();

        if let Some(winner) = check_winner(board) {
            debug!(%winner, "Board already won, ignoring move");
            return self.clone();
        }

        if !board.is_empty(position) {
            debug!(?position, "Square already occupied, ignoring move");
            return self.clone();
        }

        let next_board = board.with_mark(position, self.to_move());

        let discarded = self.history.len() - (self.current_step + 1);
        if discarded > 0 {
            debug!(discarded, "Branching from earlier step, dropping recorded future");
        }

        let mut history = self.history[..=self.current_step].to_vec();
        history.push(HistoryEntry::from_move(next_board, position));

        let next = Self {
            current_step: history.len() - 1,
            history,
            sort_ascending: self.sort_ascending,
        };
        debug_invariants(&next);
        next
    }

    /// Moves the cursor to `step` without touching history.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error when `step` is past the last entry.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to_step(&self, step: usize) -> Result<Self, EngineError> {
        let len = self.history.len();
        if step >= len {
            return Err(EngineError::new(EngineErrorKind::StepOutOfRange { step, len }));
        }

        debug!(step, "Jumping to step");
        let next = Self {
            history: self.history.clone(),
            current_step: step,
            sort_ascending: self.sort_ascending,
        };
        debug_invariants(&next);
        Ok(next)
    }

    /// Flips the move-list display order.
    #[instrument(skip(self), fields(ascending = self.sort_ascending))]
    pub fn toggle_sort_order(&self) -> Self {
        Self {
            sort_ascending: !self.sort_ascending,
            ..self.clone()
        }
    }

    /// Returns a copy with the given display order.
    pub fn with_sort_ascending(&self, ascending: bool) -> Self {
        Self {
            sort_ascending: ascending,
            ..self.clone()
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<HistoryEntry>,
    current_step: usize,
    sort_ascending: bool,
}

impl TryFrom<RawGameState> for GameState {
    type Error = EngineError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            history: raw.history,
            current_step: raw.current_step,
            sort_ascending: raw.sort_ascending,
        };
        TimelineInvariants::check_all(&state).map_err(|violations| {
            warn!(
                violations = violations.len(),
                first = %violations[0].description,
                "Rejecting malformed game state"
            );
            EngineError::new(EngineErrorKind::MalformedState {
                violations: violations.len(),
            })
        })?;
        Ok(state)
    }
}

/// Asserts every timeline invariant (debug builds only).
fn debug_invariants(state: &GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = TimelineInvariants::check_all(state)
    {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        panic!("Timeline invariant violated: {}", descriptions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play_all(indices: &[usize]) -> GameState {
        indices.iter().fold(GameState::new(), |state, &index| {
            state.play_move(index).expect("index in range")
        })
    }

    #[test]
    fn test_new_game_has_single_empty_entry() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.current_step(), 0);
        assert!(state.sort_ascending());
        assert_eq!(state.current_board(), &Board::new());
        assert_eq!(state.history()[0].origin(), None);
        assert_eq!(state.to_move(), Player::X);
    }

    #[test]
    fn test_play_move_records_coordinates() {
        let state = play_all(&[5]);
        let entry = &state.history()[1];
        assert_eq!(entry.origin(), Some(Position::MiddleRight));
        let coords = entry.originating_move().expect("move recorded");
        assert_eq!((coords.column, coords.row), (2, 1));
        assert_eq!(
            state.current_board().get(Position::MiddleRight),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_jump_keeps_future_until_next_move() {
        let state = play_all(&[0, 4, 8]);
        let rewound = state.jump_to_step(1).unwrap();
        assert_eq!(rewound.history().len(), 4);
        assert_eq!(rewound.to_move(), Player::O);
        assert!(!rewound.is_latest());

        let forward = rewound.jump_to_step(3).unwrap();
        assert_eq!(forward, state);
    }

    #[test]
    fn test_won_phase_and_valid_moves() {
        let state = play_all(&[0, 4, 1, 3, 2]);
        assert_eq!(state.phase(), Phase::Won(Player::X));
        assert!(state.valid_moves().is_empty());

        let before_win = state.jump_to_step(4).unwrap();
        assert_eq!(before_win.phase(), Phase::InProgress);
        assert_eq!(before_win.valid_moves().len(), 5);
    }

    #[test]
    fn test_try_from_accepts_valid_state() {
        let state = play_all(&[4, 0]);
        let raw = RawGameState {
            history: state.history.clone(),
            current_step: 1,
            sort_ascending: false,
        };
        let restored = GameState::try_from(raw).unwrap();
        assert_eq!(restored.current_step(), 1);
        assert!(!restored.sort_ascending());
    }

    #[test]
    fn test_try_from_rejects_step_past_history() {
        let raw = RawGameState {
            history: vec![HistoryEntry::initial()],
            current_step: 5,
            sort_ascending: true,
        };
        let err = GameState::try_from(raw).unwrap_err();
        assert_eq!(err.kind, EngineErrorKind::MalformedState { violations: 1 });
    }

    #[test]
    fn test_with_sort_ascending() {
        let state = GameState::new().with_sort_ascending(false);
        assert!(!state.sort_ascending());
        assert_eq!(state.history().len(), 1);
    }
}
