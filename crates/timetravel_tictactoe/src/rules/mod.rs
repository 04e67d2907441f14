//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board). They never look at
//! history, so the engine can evaluate any recorded snapshot.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};
