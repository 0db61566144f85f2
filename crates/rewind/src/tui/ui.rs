//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rewind_tictactoe::{CellView, GameView, Player, Position, StatusLine};

use super::app::App;
use super::layout::{CELL_HEIGHT, Regions};

/// Renders one frame from the app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let regions = Regions::compute(frame.area());
    let view = app.view();

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, regions.title);

    draw_board(frame, &regions, &view, app);
    draw_status(frame, regions.status, &view);
    draw_moves(frame, &regions, &view, app.state().step());

    let help = Paragraph::new("0-8/Enter: move  [ ]: history  Home/End  r: restart  q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(help, regions.footer);
}

fn draw_board(frame: &mut Frame, regions: &Regions, view: &GameView, app: &App) {
    frame.render_widget(
        Block::default().borders(Borders::ALL).title(" Board "),
        regions.board,
    );

    for cell in &view.cells {
        let area = regions.cells[cell.position.to_index()];
        draw_cell(frame, area, cell, app.cursor(), app.show_cell_numbers());
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, cursor: Position, numbers: bool) {
    let (symbol, mut style) = match cell.mark {
        None if numbers => (
            cell.position.to_index().to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        None => (String::new(), Style::default()),
        Some(Player::X) => (
            cell.text(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Player::O) => (
            cell.text(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if cell.highlighted {
        style = style.bg(Color::Green);
    }
    if cell.position == cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Vertically center the mark inside the cell.
    let mut lines = vec![Line::from(""); (CELL_HEIGHT / 2) as usize];
    lines.push(Line::from(Span::raw(symbol)));
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, area: Rect, view: &GameView) {
    let color = match view.status {
        StatusLine::Winner(_) => Color::Green,
        StatusLine::Draw => Color::Magenta,
        StatusLine::NextPlayer(_) => Color::Yellow,
    };
    let status = Paragraph::new(view.status_text())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Status "));
    frame.render_widget(status, area);
}

fn draw_moves(frame: &mut Frame, regions: &Regions, view: &GameView, step: usize) {
    let offset = regions.move_offset(view.moves.len(), step);
    let lines: Vec<Line> = view
        .moves
        .iter()
        .skip(offset)
        .map(|entry| {
            let text = format!("{}. {}", entry.step + 1, entry.label);
            if entry.current {
                Line::from(Span::styled(
                    format!("> {}", text),
                    Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
                ))
            } else {
                Line::from(format!("  {}", text))
            }
        })
        .collect();

    let list = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" History "));
    frame.render_widget(list, regions.moves);
}
