use serde::{Deserialize, Serialize};

use crate::domain::{GameState, GuessLetter};

/// Body of a successful session start.
pub type StartSessionResponse = GameState;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuessRequest {
    #[serde(flatten)]
    pub state: GameState,
    pub guess_index: usize,
    pub guess_letter: GuessLetter,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GuessResponse {
    #[serde(flatten)]
    pub state: GameState,
    pub correct: bool,
}
