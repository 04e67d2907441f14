//! Input events the view layer delivers to the engine.
//!
//! Intents are domain events, not side effects: a shell collects them from
//! whatever input it has (keys, script lines, tests) and feeds them to
//! [`GameState::apply`] one at a time.

use super::engine::GameState;
use super::error::EngineError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A user intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Intent {
    /// Play the cell at this index (0-8).
    #[display("play {_0}")]
    PlayMove(usize),
    /// View this history step.
    #[display("jump {_0}")]
    JumpToStep(usize),
    /// Flip the move-list display order.
    #[display("sort")]
    ToggleSortOrder,
}

impl GameState {
    /// Applies an intent, returning the next state.
    ///
    /// # Errors
    ///
    /// Propagates invalid-argument errors from [`GameState::play_move`]
    /// and [`GameState::jump_to_step`].
    #[instrument(skip(self), fields(step = self.current_step()))]
    pub fn apply(&self, intent: Intent) -> Result<GameState, EngineError> {
        match intent {
            Intent::PlayMove(index) => self.play_move(index),
            Intent::JumpToStep(step) => self.jump_to_step(step),
            Intent::ToggleSortOrder => Ok(self.toggle_sort_order()),
        }
    }

    /// Applies intents in order, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error; earlier intents are not kept.
    pub fn apply_all<I>(&self, intents: I) -> Result<GameState, EngineError>
    where
        I: IntoIterator<Item = Intent>,
    {
        intents
            .into_iter()
            .try_fold(self.clone(), |state, intent| state.apply(intent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_display() {
        assert_eq!(Intent::PlayMove(4).to_string(), "play 4");
        assert_eq!(Intent::JumpToStep(0).to_string(), "jump 0");
        assert_eq!(Intent::ToggleSortOrder.to_string(), "sort");
    }

    #[test]
    fn test_apply_dispatches() {
        let state = GameState::new()
            .apply_all([
                Intent::PlayMove(4),
                Intent::PlayMove(0),
                Intent::JumpToStep(1),
                Intent::ToggleSortOrder,
            ])
            .unwrap();
        assert_eq!(state.current_step(), 1);
        assert_eq!(state.history().len(), 3);
        assert!(!state.sort_ascending());
    }

    #[test]
    fn test_apply_all_stops_at_error() {
        let err = GameState::new()
            .apply_all([Intent::PlayMove(4), Intent::JumpToStep(7), Intent::PlayMove(0)])
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
