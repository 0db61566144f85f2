//! Keyboard and mouse translation.

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use rewind_tictactoe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the app.
    Quit,
    /// Start over with an empty history.
    Restart,
    /// Move the board cursor.
    Cursor(KeyCode),
    /// Place a mark at the cursor.
    PlaceAtCursor,
    /// Place a mark at a specific square.
    Place(Position),
    /// Show the previous history step.
    StepBack,
    /// Show the next history step.
    StepForward,
    /// Show the empty board.
    First,
    /// Show the latest board.
    Last,
}

/// Maps a key to a command.
pub fn command_for_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') => Some(Command::Restart),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Command::Cursor(code))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlaceAtCursor),
        KeyCode::Char(c @ '0'..='8') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize))
            .map(Command::Place),
        KeyCode::Char('[') | KeyCode::PageUp => Some(Command::StepBack),
        KeyCode::Char(']') | KeyCode::PageDown => Some(Command::StepForward),
        KeyCode::Home => Some(Command::First),
        KeyCode::End => Some(Command::Last),
        _ => None,
    }
}

/// Returns the screen coordinates of a left-button press.
pub fn left_click(event: &MouseEvent) -> Option<(u16, u16)> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some((event.column, event.row)),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
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
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_digit_keys_place() {
        assert_eq!(
            command_for_key(KeyCode::Char('0')),
            Some(Command::Place(Position::TopLeft))
        );
        assert_eq!(
            command_for_key(KeyCode::Char('8')),
            Some(Command::Place(Position::BottomRight))
        );
        assert_eq!(command_for_key(KeyCode::Char('9')), None);
    }

    #[test]
    fn test_only_left_press_clicks() {
        let press = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        };
        let release = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            ..press
        };
        assert_eq!(left_click(&press), Some((4, 7)));
        assert_eq!(left_click(&release), None);
    }
}
