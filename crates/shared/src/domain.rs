use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placeholder for a position of `answered_quote` that has not been revealed.
pub const BLANK_MARKER: char = '_';

/// Letters a player can guess, in keyboard order.
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Per-position cue shown under a character cell; `None` serializes as `null`.
pub type NumericalHint = Option<i64>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub quote: String,
    pub answered_quote: String,
    /// Guess responses may leave this out; the client keeps its own copy.
    #[serde(default)]
    pub numerical_hints: Vec<NumericalHint>,
    pub author: String,
    pub category: String,
}

impl GameState {
    /// Checks that `quote`, `answered_quote` and `numerical_hints` line up
    /// position for position.
    pub fn check_lengths(&self) -> Result<(), LengthMismatch> {
        let quote = self.quote.chars().count();
        let answered_quote = self.answered_quote.chars().count();
        let numerical_hints = self.numerical_hints.len();
        if quote == answered_quote && answered_quote == numerical_hints {
            Ok(())
        } else {
            Err(LengthMismatch {
                quote,
                answered_quote,
                numerical_hints,
            })
        }
    }

    pub fn has_blanks(&self) -> bool {
        self.answered_quote.contains(BLANK_MARKER)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "game state lengths disagree: quote={quote} answered_quote={answered_quote} numerical_hints={numerical_hints}"
)]
pub struct LengthMismatch {
    pub quote: usize,
    pub answered_quote: usize,
    pub numerical_hints: usize,
}

/// A single letter from [`ALPHABET`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct GuessLetter(char);

impl GuessLetter {
    pub fn as_char(self) -> char {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("'{0}' is not a letter from a to z")]
pub struct InvalidGuessLetter(pub char);

impl TryFrom<char> for GuessLetter {
    type Error = InvalidGuessLetter;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let lower = value.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            Ok(Self(lower))
        } else {
            Err(InvalidGuessLetter(value))
        }
    }
}

impl From<GuessLetter> for char {
    fn from(value: GuessLetter) -> Self {
        value.0
    }
}

impl fmt::Display for GuessLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
