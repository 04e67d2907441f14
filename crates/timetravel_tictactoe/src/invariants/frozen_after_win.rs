//! Nothing is recorded past a won board.

use super::super::GameState;
use super::super::rules::check_winner;
use super::Invariant;

/// Invariant: only the last history entry may hold a winning board.
///
/// If entry `k` has a complete line, no entry after `k` exists.
pub struct FrozenAfterWinInvariant;

impl Invariant<GameState> for FrozenAfterWinInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        history
            .iter()
            .take(history.len().saturating_sub(1))
            .all(|entry| check_winner(entry.board()).is_none())
    }

    fn description() -> &'static str {
        "No history is recorded after a winning board"
    }
}
