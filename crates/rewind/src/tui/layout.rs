//! Screen regions shared by drawing and mouse hit-testing.
//!
//! Both sides compute their rectangles from [`Regions::compute`], so a click
//! always lands on what was drawn there.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use rewind_tictactoe::{Action, Position};

/// Width of one grid cell in columns.
pub const CELL_WIDTH: u16 = 7;
/// Height of one grid cell in rows.
pub const CELL_HEIGHT: u16 = 3;

const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Rectangles of every interactive and decorative part of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    /// Title bar.
    pub title: Rect,
    /// Bordered board pane.
    pub board: Rect,
    /// The nine cells, in index order.
    pub cells: [Rect; 9],
    /// Bordered status pane.
    pub status: Rect,
    /// Bordered move-list pane.
    pub moves: Rect,
    /// Inside of the move-list pane, one row per visible entry.
    pub moves_inner: Rect,
    /// Key help.
    pub footer: Rect,
}

impl Regions {
    /// Splits the frame area.
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(GRID_HEIGHT + 2),
                Constraint::Length(3), // Footer
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(rows[1]);

        let info = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(body[1]);

        let board = body[0];
        let board_inner = Block::default().borders(Borders::ALL).inner(board);
        let grid = center_rect(board_inner, GRID_WIDTH, GRID_HEIGHT);
        let cells = Position::ALL.map(|pos| {
            Rect::new(
                grid.x + pos.col() as u16 * (CELL_WIDTH + 1),
                grid.y + pos.row() as u16 * (CELL_HEIGHT + 1),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(board_inner)
        });

        let moves = info[1];
        Self {
            title: rows[0],
            board,
            cells,
            status: info[0],
            moves,
            moves_inner: Block::default().borders(Borders::ALL).inner(moves),
            footer: rows[2],
        }
    }

    /// First move-list entry shown, chosen so the displayed step is visible.
    pub fn move_offset(&self, len: usize, step: usize) -> usize {
        let visible = (self.moves_inner.height as usize).max(1);
        if len <= visible {
            0
        } else {
            step.saturating_sub(visible - 1).min(len - visible)
        }
    }

    /// Maps a click at `(column, row)` to the action drawn there.
    pub fn hit_test(&self, column: u16, row: u16, len: usize, step: usize) -> Option<Action> {
        if let Some(index) = self.cells.iter().position(|r| contains(*r, column, row)) {
            return Position::from_index(index).map(Action::Place);
        }

        if contains(self.moves_inner, column, row) {
            let entry = self.move_offset(len, step) + (row - self.moves_inner.y) as usize;
            if entry < len {
                return Some(Action::JumpTo(entry));
            }
        }

        None
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Centers a `width` x `height` rectangle inside `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
