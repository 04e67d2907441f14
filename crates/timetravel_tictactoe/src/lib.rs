//! Time-travel tic-tac-toe engine.
//!
//! A pure state-transition library: [`GameState`] keeps one board snapshot
//! per ply, a cursor into that history, and the move-list sort order.
//! Front ends feed [`Intent`]s in and render the [`GameView`] that comes out.
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{GameState, Player, Status, ViewOptions};
//!
//! # fn main() -> Result<(), timetravel_tictactoe::EngineError> {
//! let state = GameState::new()
//!     .play_move(0)?
//!     .play_move(4)?
//!     .play_move(1)?
//!     .play_move(3)?
//!     .play_move(2)?;
//!
//! assert_eq!(state.winner(), Some(Player::X));
//! assert_eq!(state.status(ViewOptions::default()).to_string(), "Winner X");
//!
//! // Look back at the board before the winning move.
//! let earlier = state.jump_to_step(4)?;
//! assert_eq!(earlier.status(ViewOptions::default()), Status::NextPlayer(Player::X));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;
mod view;

pub use action::Intent;
pub use engine::{GameState, Phase};
pub use error::{EngineError, EngineErrorKind};
pub use history::{Coordinates, HistoryEntry};
pub use position::Position;
pub use rules::check_winner;
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveDescriptor, Status, ViewOptions, move_label, sort_toggle_label};
