//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: the mark added at entry `k` belongs to the player for step `k - 1`.
///
/// Turn order is never stored; this checks the recorded marks agree with
/// step parity.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, entry)| match entry.origin() {
                Some(pos) => entry.board().get(pos).player() == Some(Player::for_step(step - 1)),
                None => false,
            })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_sequence_holds() {
        let state = [0, 4, 8, 2]
            .iter()
            .fold(GameState::new(), |s, &i| s.play_move(i).unwrap());
        assert!(AlternatingTurnInvariant::holds(&state));
        assert_eq!(state.to_move(), Player::X);
    }
}
