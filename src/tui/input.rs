//! Keyboard and mouse input mapped to game commands.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::ui::ScreenLayout;
use crate::games::tictactoe::Position;

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Clear the board, X to move.
    NewGame,
    /// Clear the board, the other side to move.
    SwitchSides,
    /// Leave the program.
    Quit,
    /// Mark a cell.
    Place(Position),
    /// Mark the cell under the cursor.
    PlaceAtCursor,
    /// Move the keyboard cursor.
    MoveCursor(KeyCode),
}

/// Maps a terminal event to a command, if it means anything.
///
/// Mouse clicks are resolved against the layout of the last drawn frame.
pub fn command_for(event: &Event, layout: &ScreenLayout) -> Option<Command> {
    match event {
        Event::Key(key) => command_for_key(key),
        Event::Mouse(mouse) => command_for_mouse(mouse, layout),
        _ => None,
    }
}

/// Maps a key press to a command.
///
/// Menu accelerators work bare or with Ctrl held.
pub fn command_for_key(key: &KeyEvent) -> Option<Command> {
    // Skip key release events (crossterm fires both press and release).
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::NewGame),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::SwitchSides),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map(Command::Place),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlaceAtCursor),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Some(Command::MoveCursor(code))
        }
        _ => None,
    }
}

/// Maps a left click on a cell or menu entry to a command.
pub fn command_for_mouse(mouse: &MouseEvent, layout: &ScreenLayout) -> Option<Command> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    if let Some(pos) = layout.cell_at(mouse.column, mouse.row) {
        return Some(Command::Place(pos));
    }
    layout.menu_at(mouse.column, mouse.row)
}

/// Moves cursor based on arrow keys. Stops at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::new(r, c))
        .unwrap_or(cursor)
}
