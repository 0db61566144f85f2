//! Plain-text rendering of a [`GameView`].

use rewind_tictactoe::GameView;

/// Renders the grid, status line and move list as text.
///
/// The displayed step is marked with `>`.
pub fn render_text(view: &GameView, show_cell_numbers: bool) -> String {
    let mut out = String::new();

    for (row, cells) in view.cells.chunks(3).enumerate() {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        let line = cells
            .iter()
            .map(|cell| match cell.mark {
                Some(player) => format!(" {} ", player),
                None if show_cell_numbers => format!(" {} ", cell.position.to_index()),
                None => "   ".to_string(),
            })
            .collect::<Vec<_>>()
            .join("|");
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&view.status_text());
    out.push('\n');

    for entry in &view.moves {
        let marker = if entry.current { '>' } else { ' ' };
        out.push_str(&format!("{} {}. {}\n", marker, entry.step + 1, entry.label));
    }

    out
}
