//! Text rendering of a [`GameSnapshot`] for the terminal.

use std::fmt::Write as _;

use client_core::{
    view::{character_cells, header, keyboard_rows, CharacterCell},
    GameSnapshot, GuessPhase,
};

const CELLS_PER_LINE: usize = 20;
const KEYS_PER_ROW: usize = 13;

pub fn render_board(snapshot: &GameSnapshot) -> String {
    let mut out = String::new();
    for line in header(&snapshot.game) {
        let _ = writeln!(out, "{line}");
    }
    out.push('\n');

    let cells = character_cells(&snapshot.game, snapshot.selected_index);
    let width = column_width(&cells);
    for chunk in cells.chunks(CELLS_PER_LINE) {
        render_cell_block(&mut out, chunk, width);
        out.push('\n');
    }

    for row in keyboard_rows(KEYS_PER_ROW) {
        let keys: Vec<String> = row.iter().map(|c| format!("[{c}]")).collect();
        let _ = writeln!(out, "{}", keys.join(" "));
    }

    if let GuessPhase::Awaiting { index, letter } = snapshot.phase {
        let _ = writeln!(out, "\nchecking '{letter}' at position {index}...");
    }
    if !snapshot.message.text().is_empty() {
        let _ = writeln!(out, "\n{}", snapshot.message);
    }
    out
}

/// Widest index or hint plus one space of separation.
fn column_width(cells: &[CharacterCell]) -> usize {
    let widest_index = cells.len().saturating_sub(1).to_string().len();
    let widest_hint = cells
        .iter()
        .filter_map(|cell| cell.hint)
        .map(|hint| hint.to_string().len())
        .max()
        .unwrap_or(0);
    widest_index.max(widest_hint) + 1
}

fn render_cell_block(out: &mut String, cells: &[CharacterCell], width: usize) {
    let mut indices = String::new();
    let mut glyphs = String::new();
    let mut hints = String::new();
    let mut caret = String::new();
    for cell in cells {
        let _ = write!(indices, "{:>width$}", cell.index);
        let _ = write!(glyphs, "{:>width$}", cell.glyph);
        match cell.hint {
            Some(hint) => {
                let _ = write!(hints, "{hint:>width$}");
            }
            None => {
                let _ = write!(hints, "{:>width$}", "");
            }
        }
        let _ = write!(caret, "{:>width$}", if cell.selected { "^" } else { "" });
    }
    for row in [indices, glyphs, hints, caret] {
        let _ = writeln!(out, "{}", row.trim_end());
    }
}
