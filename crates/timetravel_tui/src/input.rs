//! Key bindings and cursor movement.

use crossterm::event::KeyCode;
use timetravel_tictactoe::Position;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Up/Down move through the move list.
    History,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up one row.
    Up,
    /// Down one row.
    Down,
    /// Left one column.
    Left,
    /// Right one column.
    Right,
}

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Arrow key.
    Navigate(Direction),
    /// Play the cursor cell, or jump to the selected move.
    Select,
    /// Play the cell at this index directly.
    PlayCell(usize),
    /// Switch between board and move list.
    SwitchFocus,
    /// Flip the move-list order.
    ToggleSort,
    /// Show or hide move coordinates.
    ToggleCoordinates,
    /// Start a new game.
    Restart,
    /// Leave the application.
    Quit,
}

/// Maps a key to a command.
pub fn command_for(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Up => Some(Command::Navigate(Direction::Up)),
        KeyCode::Down => Some(Command::Navigate(Direction::Down)),
        KeyCode::Left => Some(Command::Navigate(Direction::Left)),
        KeyCode::Right => Some(Command::Navigate(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Select),
        KeyCode::Tab => Some(Command::SwitchFocus),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Command::PlayCell(digit as usize - 1)),
        KeyCode::Char('s') => Some(Command::ToggleSort),
        KeyCode::Char('c') => Some(Command::ToggleCoordinates),
        KeyCode::Char('r') => Some(Command::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Moves the board cursor, staying put at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (column, row) = (cursor.column(), cursor.row());
    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|r| (column, r)),
        Direction::Down => Some((column, row + 1)),
        Direction::Left => column.checked_sub(1).map(|c| (c, row)),
        Direction::Right => Some((column + 1, row)),
    };
    target
        .and_then(|(c, r)| Position::from_coordinates(c, r))
        .unwrap_or(cursor)
}
