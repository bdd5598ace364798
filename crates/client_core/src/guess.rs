//! Guess controller: selection, the in-flight guard, and feedback derivation.

use shared::{
    domain::{GameState, GuessLetter},
    protocol::GuessRequest,
};

use crate::status::StatusMessage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessPhase {
    Idle,
    Selected(usize),
    Awaiting { index: usize, letter: GuessLetter },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessRejection {
    NoSelection,
    InFlight,
}

impl GuessRejection {
    pub fn message(self) -> StatusMessage {
        match self {
            Self::NoSelection => StatusMessage::SelectPositionFirst,
            Self::InFlight => StatusMessage::GuessInFlight,
        }
    }
}

#[derive(Debug, Default)]
pub struct GuessController {
    selected_index: Option<usize>,
    in_flight: Option<(usize, GuessLetter)>,
}

impl GuessController {
    /// Bounds are not checked; callers only offer indices of rendered cells.
    pub fn select_position(&mut self, index: usize) {
        self.selected_index = Some(index);
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn phase(&self) -> GuessPhase {
        match (self.in_flight, self.selected_index) {
            (Some((index, letter)), _) => GuessPhase::Awaiting { index, letter },
            (None, Some(index)) => GuessPhase::Selected(index),
            (None, None) => GuessPhase::Idle,
        }
    }

    /// Checks local preconditions and, when they hold, marks a guess as in
    /// flight and builds the request carrying the whole current game.
    pub fn begin(
        &mut self,
        game: &GameState,
        letter: GuessLetter,
    ) -> Result<GuessRequest, GuessRejection> {
        let index = self.selected_index.ok_or(GuessRejection::NoSelection)?;
        if self.in_flight.is_some() {
            return Err(GuessRejection::InFlight);
        }
        self.in_flight = Some((index, letter));
        Ok(GuessRequest {
            state: game.clone(),
            guess_index: index,
            guess_letter: letter,
        })
    }

    /// Ends the in-flight guess. The selection is cleared whether the request
    /// succeeded or failed.
    pub fn finish(&mut self) {
        self.in_flight = None;
        self.selected_index = None;
    }

    /// Drops the in-flight guess without a result, keeping the selection.
    pub fn abandon(&mut self) {
        self.in_flight = None;
    }
}

/// Message after a merged guess response. A board with no blanks left always
/// reports the win, even when the triggering guess was wrong.
pub fn feedback(correct: bool, merged: &GameState) -> StatusMessage {
    if !merged.has_blanks() {
        StatusMessage::QuoteComplete
    } else if correct {
        StatusMessage::CorrectGuess
    } else {
        StatusMessage::IncorrectGuess
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> GuessLetter {
        GuessLetter::try_from(c).expect("letter")
    }

    fn game(answered_quote: &str) -> GameState {
        GameState {
            quote: "ab cd".into(),
            answered_quote: answered_quote.into(),
            numerical_hints: vec![Some(1), None, None, Some(2), None],
            author: "X".into(),
            category: "Y".into(),
        }
    }

    #[test]
    fn begin_without_selection_is_rejected() {
        let mut guess = GuessController::default();
        assert_eq!(
            guess.begin(&game("__ __"), letter('a')),
            Err(GuessRejection::NoSelection)
        );
        assert_eq!(guess.phase(), GuessPhase::Idle);
    }

    #[test]
    fn selection_overwrites_previous_choice() {
        let mut guess = GuessController::default();
        guess.select_position(3);
        guess.select_position(42);
        assert_eq!(guess.phase(), GuessPhase::Selected(42));
    }

    #[test]
    fn begin_builds_request_from_full_game() {
        let mut guess = GuessController::default();
        guess.select_position(4);

        let request = guess.begin(&game("__ __"), letter('d')).expect("begin");

        assert_eq!(request.state, game("__ __"));
        assert_eq!(request.guess_index, 4);
        assert_eq!(request.guess_letter, letter('d'));
        assert_eq!(
            guess.phase(),
            GuessPhase::Awaiting {
                index: 4,
                letter: letter('d')
            }
        );
    }

    #[test]
    fn second_begin_while_awaiting_is_rejected() {
        let mut guess = GuessController::default();
        guess.select_position(0);
        guess.begin(&game("__ __"), letter('a')).expect("begin");

        guess.select_position(1);
        assert_eq!(
            guess.begin(&game("__ __"), letter('b')),
            Err(GuessRejection::InFlight)
        );
    }

    #[test]
    fn finish_returns_to_idle() {
        let mut guess = GuessController::default();
        guess.select_position(0);
        guess.begin(&game("__ __"), letter('a')).expect("begin");

        guess.finish();

        assert_eq!(guess.phase(), GuessPhase::Idle);
        assert_eq!(guess.selected_index(), None);
    }

    #[test]
    fn abandon_reopens_submission_and_keeps_selection() {
        let mut guess = GuessController::default();
        guess.select_position(2);
        guess.begin(&game("__ __"), letter('a')).expect("begin");

        guess.abandon();

        assert_eq!(guess.phase(), GuessPhase::Selected(2));
        assert!(guess.begin(&game("__ __"), letter('b')).is_ok());
    }

    #[test]
    fn feedback_reports_correctness_while_blanks_remain() {
        assert_eq!(feedback(true, &game("a_ __")), StatusMessage::CorrectGuess);
        assert_eq!(feedback(false, &game("a_ __")), StatusMessage::IncorrectGuess);
    }

    #[test]
    fn completed_board_overrides_feedback() {
        assert_eq!(feedback(true, &game("ab cd")), StatusMessage::QuoteComplete);
        assert_eq!(feedback(false, &game("ab cd")), StatusMessage::QuoteComplete);
    }
}
