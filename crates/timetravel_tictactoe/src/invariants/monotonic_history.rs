//! Shape of the recorded boards: empty start, one new mark per entry.

use super::super::{GameState, Position, Square};
use super::Invariant;

/// Invariant: history starts with an empty board and no move.
pub struct EmptyStartInvariant;

impl Invariant<GameState> for EmptyStartInvariant {
    fn holds(state: &GameState) -> bool {
        match state.history().first() {
            Some(entry) => entry.origin().is_none() && entry.board().filled() == 0,
            None => false,
        }
    }

    fn description() -> &'static str {
        "History starts with an empty board and no originating move"
    }
}

/// Invariant: each entry adds exactly one mark to the previous board.
///
/// The changed cell goes from Empty to a mark, and it is the cell the
/// entry records as its originating move.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameState> for MonotonicHistoryInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let changed: Vec<Position> = Position::ALL
                .into_iter()
                .filter(|pos| before.get(*pos) != after.get(*pos))
                .collect();

            match changed.as_slice() {
                [pos] => {
                    before.get(*pos) == Square::Empty
                        && after.get(*pos) != Square::Empty
                        && pair[1].origin() == Some(*pos)
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history entry fills exactly one empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, HistoryEntry, Player};

    #[test]
    fn test_new_game_holds() {
        let state = GameState::new();
        assert!(EmptyStartInvariant::holds(&state));
        assert!(MonotonicHistoryInvariant::holds(&state));
    }

    #[test]
    fn test_marked_start_violates() {
        let mut state = GameState::new();
        state.history[0] = HistoryEntry::from_move(
            Board::new().with_mark(Position::Center, Player::X),
            Position::Center,
        );
        assert!(!EmptyStartInvariant::holds(&state));
    }

    #[test]
    fn test_two_marks_in_one_entry_violates() {
        let mut state = GameState::new().play_move(0).unwrap();
        let board = state.history[1].board().with_mark(Position::BottomRight, Player::O);
        state.history[1] = HistoryEntry::from_move(board, Position::TopLeft);
        assert!(!MonotonicHistoryInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_origin_violates() {
        let mut state = GameState::new().play_move(0).unwrap();
        let board = state.history[1].board().clone();
        state.history[1] = HistoryEntry::from_move(board, Position::Center);
        assert!(!MonotonicHistoryInvariant::holds(&state));
    }
}
