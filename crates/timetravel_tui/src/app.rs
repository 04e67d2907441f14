//! Application state and logic.

use crate::config::Settings;
use crate::input::{Command, Direction, Focus, move_cursor};
use timetravel_tictactoe::{GameState, GameView, Intent, Position, ViewOptions};
use tracing::{debug, info, warn};

/// Main application state.
///
/// Owns the single [`GameState`] of the session and replaces it after
/// every intent.
#[derive(Debug, Clone)]
pub struct App {
    state: GameState,
    options: ViewOptions,
    cursor: Position,
    focus: Focus,
    /// Row of the move list under the selection, in display order.
    selected: usize,
    last_error: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application from settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            state: GameState::new().with_sort_ascending(*settings.sort_ascending()),
            options: settings.view_options(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            last_error: None,
            should_quit: false,
        }
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Render state for the current game.
    pub fn view(&self) -> GameView {
        self.state.view(self.options)
    }

    /// Current view switches.
    pub fn options(&self) -> ViewOptions {
        self.options
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected move-list row (display order).
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Error from the last rejected intent, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a command from the key map.
    pub fn handle(&mut self, command: Command) {
        debug!(?command, focus = ?self.focus, "Handling command");

        match (command, self.focus) {
            (Command::Navigate(direction), Focus::Board) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            (Command::Navigate(direction), Focus::History) => self.move_selection(direction),
            (Command::Select, Focus::Board) => {
                self.apply(Intent::PlayMove(self.cursor.to_index()));
            }
            (Command::Select, Focus::History) => {
                if let Some(step) = self.step_at(self.selected) {
                    self.apply(Intent::JumpToStep(step));
                }
            }
            (Command::PlayCell(index), _) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.apply(Intent::PlayMove(index));
            }
            (Command::SwitchFocus, _) => {
                self.focus = self.focus.toggle();
                self.select_current();
            }
            (Command::ToggleSort, _) => self.apply(Intent::ToggleSortOrder),
            (Command::ToggleCoordinates, _) => {
                self.options.show_coordinates = !self.options.show_coordinates;
            }
            (Command::Restart, _) => self.restart(),
            (Command::Quit, _) => self.should_quit = true,
        }
    }

    /// Restarts the game, keeping the sort order.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.state = GameState::new().with_sort_ascending(self.state.sort_ascending());
        self.last_error = None;
        self.select_current();
    }

    fn apply(&mut self, intent: Intent) {
        match self.state.apply(intent) {
            Ok(next) => {
                debug!(%intent, step = next.current_step(), "Intent applied");
                self.state = next;
                self.last_error = None;
                self.select_current();
            }
            Err(e) => {
                warn!(%intent, error = %e, "Intent rejected");
                self.last_error = Some(e.kind.to_string());
            }
        }
    }

    fn move_selection(&mut self, direction: Direction) {
        let last = self.state.history().len() - 1;
        self.selected = match direction {
            Direction::Up => self.selected.saturating_sub(1),
            Direction::Down => (self.selected + 1).min(last),
            Direction::Left | Direction::Right => self.selected,
        };
    }

    /// Puts the selection on the row of the current step.
    fn select_current(&mut self) {
        let step = self.state.current_step();
        self.selected = if self.state.sort_ascending() {
            step
        } else {
            self.state.history().len() - 1 - step
        };
    }

    fn step_at(&self, row: usize) -> Option<usize> {
        let len = self.state.history().len();
        if row >= len {
            return None;
        }
        Some(if self.state.sort_ascending() {
            row
        } else {
            len - 1 - row
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetravel_tictactoe::{Player, Status};

    fn app() -> App {
        App::new(&Settings::default())
    }

    #[test]
    fn test_select_plays_cursor_cell() {
        let mut app = app();
        app.handle(Command::Select);
        assert_eq!(app.state().current_step(), 1);
        assert!(!app.state().current_board().is_empty(Position::Center));
        assert_eq!(app.view().status, Status::NextPlayer(Player::O));
    }

    #[test]
    fn test_history_selection_jumps_in_descending_order() {
        let mut app = app();
        for index in [0, 4, 8] {
            app.handle(Command::PlayCell(index));
        }
        app.handle(Command::ToggleSort);
        app.handle(Command::SwitchFocus);
        // Newest first: row 0 is step 3.
        assert_eq!(app.selected(), 0);

        app.handle(Command::Navigate(Direction::Down));
        app.handle(Command::Navigate(Direction::Down));
        app.handle(Command::Select);
        assert_eq!(app.state().current_step(), 1);
        assert_eq!(app.state().history().len(), 4);
        assert_eq!(app.selected(), 2);
    }

    #[test]
    fn test_restart_keeps_sort_order() {
        let mut app = app();
        app.handle(Command::PlayCell(4));
        app.handle(Command::ToggleSort);
        app.handle(Command::Restart);
        assert_eq!(app.state().history().len(), 1);
        assert!(!app.state().sort_ascending());
    }

    #[test]
    fn test_toggle_coordinates_changes_labels() {
        let mut app = app();
        app.handle(Command::PlayCell(4));
        assert_eq!(app.view().moves[1].label, "Go to move #1 (1,1)");
        app.handle(Command::ToggleCoordinates);
        assert_eq!(app.view().moves[1].label, "Go to move #1");
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle(Command::Quit);
        assert!(app.should_quit());
    }
}
