//! Stateless projection of the game into what a front end draws.

use shared::domain::{GameState, ALPHABET};

pub const TITLE: &str = "Quote Guessing Game";

/// Letters offered on the on-screen keyboard.
pub const KEYBOARD: [char; 26] = ALPHABET;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterCell {
    pub index: usize,
    pub glyph: char,
    pub hint: Option<i64>,
    pub selected: bool,
}

pub fn character_cells(game: &GameState, selected_index: Option<usize>) -> Vec<CharacterCell> {
    game.answered_quote
        .chars()
        .enumerate()
        .map(|(index, glyph)| CharacterCell {
            index,
            glyph,
            hint: game.numerical_hints.get(index).copied().flatten(),
            selected: selected_index == Some(index),
        })
        .collect()
}

pub fn keyboard_rows(width: usize) -> Vec<&'static [char]> {
    KEYBOARD.chunks(width.max(1)).collect()
}

pub fn header(game: &GameState) -> Vec<String> {
    let mut lines = vec![TITLE.to_string()];
    if !game.category.is_empty() {
        lines.push(format!("Category: {}", game.category));
    }
    if !game.author.is_empty() {
        lines.push(format!("Author: {}", game.author));
    }
    lines
}
