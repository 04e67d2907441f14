//! Terminal front end for the time-travel tic-tac-toe engine.
//!
//! Two shells drive the same [`GameState`](timetravel_tictactoe::GameState):
//! an interactive ratatui UI and a line-driven script mode for pipes and
//! tests.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod script;
mod terminal;
mod ui;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{ConfigError, Settings};
pub use input::{Command as KeyCommand, Direction, Focus, command_for, move_cursor};
pub use script::{ScriptCommand, ScriptError, parse_line, run as run_script};
pub use terminal::{RestoreGuard, enter as enter_terminal};
pub use ui::draw;
