//! Application state and logic.

use crossterm::event::{KeyCode, MouseEvent};
use ratatui::layout::Rect;
use rewind_tictactoe::{Action, GameState, GameView, Position};
use tracing::{debug, info, instrument};

use super::input::{self, Command};
use super::layout::Regions;

/// Main application state.
///
/// The engine state is the only game data held here; everything drawn is
/// re-projected from it on each frame.
#[derive(Debug, Clone)]
pub struct App {
    state: GameState,
    cursor: Position,
    show_cell_numbers: bool,
    area: Rect,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(show_cell_numbers: bool) -> Self {
        Self {
            state: GameState::new(),
            cursor: Position::Center,
            show_cell_numbers,
            area: Rect::default(),
            should_quit: false,
        }
    }

    /// Gets the engine state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Projection of the engine state for drawing.
    pub fn view(&self) -> GameView {
        GameView::project(&self.state)
    }

    /// Square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether empty squares show their key number.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records the area of the last drawn frame for hit-testing.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Regions of the last drawn frame.
    pub fn regions(&self) -> Regions {
        Regions::compute(self.area)
    }

    /// Feeds an action to the engine.
    #[instrument(skip(self), fields(step = self.state.step()))]
    pub fn apply(&mut self, action: Action) {
        debug!(%action, "Applying action");
        self.state = std::mem::take(&mut self.state).reduce(action);
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, code: KeyCode) {
        let Some(command) = input::command_for_key(code) else {
            return;
        };

        match command {
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Command::Restart => self.restart(),
            Command::Cursor(key) => self.cursor = input::move_cursor(self.cursor, key),
            Command::PlaceAtCursor => self.apply(Action::Place(self.cursor)),
            Command::Place(pos) => {
                self.cursor = pos;
                self.apply(Action::Place(pos));
            }
            Command::StepBack => {
                if let Some(step) = self.state.step().checked_sub(1) {
                    self.apply(Action::JumpTo(step));
                }
            }
            Command::StepForward => self.apply(Action::JumpTo(self.state.step() + 1)),
            Command::First => self.apply(Action::JumpTo(0)),
            Command::Last => self.apply(Action::JumpTo(self.state.len() - 1)),
        }
    }

    /// Handles a mouse event; only left clicks on cells or history entries act.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        let Some((column, row)) = input::left_click(&event) else {
            return;
        };

        let hit = self
            .regions()
            .hit_test(column, row, self.state.len(), self.state.step());
        if let Some(action) = hit {
            if let Action::Place(pos) = action {
                self.cursor = pos;
            }
            self.apply(action);
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.state = GameState::new();
        self.cursor = Position::Center;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEventKind};
    use rewind_tictactoe::{GameStatus, Player};

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn app() -> App {
        let mut app = App::new(true);
        app.set_area(Rect::new(0, 0, 80, 24));
        app
    }

    #[test]
    fn test_clicks_play_winning_game() {
        let mut app = app();
        let regions = app.regions();
        for cell in [0, 4, 1, 3, 2] {
            let r = regions.cells[cell];
            app.handle_mouse(click(r.x, r.y));
        }
        assert_eq!(app.state().status(), GameStatus::Won(Player::X));

        // Click "Go to move #2" in the move list.
        let inner = regions.moves_inner;
        app.handle_mouse(click(inner.x, inner.y + 2));
        assert_eq!(app.state().step(), 2);
        assert_eq!(app.view().status_text(), "Next player: X");
    }

    #[test]
    fn test_keys_place_and_step_through_history() {
        let mut app = app();
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.state().len(), 3);

        app.handle_key(KeyCode::Char('['));
        assert_eq!(app.state().step(), 1);
        app.handle_key(KeyCode::Home);
        app.handle_key(KeyCode::Char('['));
        assert_eq!(app.state().step(), 0);
        app.handle_key(KeyCode::End);
        assert_eq!(app.state().step(), 2);
        app.handle_key(KeyCode::Char(']'));
        assert_eq!(app.state().step(), 2);
    }

    #[test]
    fn test_cursor_follows_arrows() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.cursor(), Position::TopLeft);
        app.handle_key(KeyCode::Char(' '));
        assert!(!app.state().current().is_empty(Position::TopLeft));
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = app();
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.state().len(), 1);
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
