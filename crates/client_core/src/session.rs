//! Session controller: owns the puzzle as last confirmed by the game service.

use shared::{
    domain::{GameState, LengthMismatch},
    protocol::StartSessionResponse,
};

#[derive(Debug, Default)]
pub struct SessionController {
    game: GameState,
    loaded: bool,
}

impl SessionController {
    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Replaces the whole game with a session-start body. A body whose
    /// lengths disagree is refused and the current game is kept.
    pub fn apply_start(&mut self, response: StartSessionResponse) -> Result<(), LengthMismatch> {
        response.check_lengths()?;
        self.game = response;
        self.loaded = true;
        Ok(())
    }

    /// Takes everything from a guess response except the hints, which stay as
    /// issued at session start.
    pub fn merge_guess(&mut self, response: GameState) -> Result<(), LengthMismatch> {
        let merged = GameState {
            numerical_hints: self.game.numerical_hints.clone(),
            ..response
        };
        merged.check_lengths()?;
        self.game = merged;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start_body() -> GameState {
        GameState {
            quote: "ab cd".into(),
            answered_quote: "__ __".into(),
            numerical_hints: vec![Some(1), None, None, Some(2), None],
            author: "X".into(),
            category: "Y".into(),
        }
    }

    #[test]
    fn start_replaces_empty_game() {
        let mut session = SessionController::default();
        assert!(!session.is_loaded());

        session.apply_start(start_body()).expect("apply");

        assert!(session.is_loaded());
        assert_eq!(session.game(), &start_body());
    }

    #[test]
    fn start_with_mismatched_lengths_keeps_previous_game() {
        let mut session = SessionController::default();
        let mut body = start_body();
        body.answered_quote = "__".into();

        session.apply_start(body).expect_err("mismatch");

        assert!(!session.is_loaded());
        assert_eq!(session.game(), &GameState::default());
    }

    #[test]
    fn merge_keeps_original_hints() {
        let mut session = SessionController::default();
        session.apply_start(start_body()).expect("apply");

        let echoed = GameState {
            answered_quote: "a_ __".into(),
            numerical_hints: vec![Some(7), Some(7), Some(7), Some(7), Some(7)],
            ..start_body()
        };
        session.merge_guess(echoed).expect("merge");

        assert_eq!(session.game().answered_quote, "a_ __");
        assert_eq!(
            session.game().numerical_hints,
            vec![Some(1), None, None, Some(2), None]
        );
    }

    #[test]
    fn merge_ignores_missing_hints_in_response() {
        let mut session = SessionController::default();
        session.apply_start(start_body()).expect("apply");

        let echoed = GameState {
            answered_quote: "ab __".into(),
            numerical_hints: Vec::new(),
            ..start_body()
        };
        session.merge_guess(echoed).expect("merge");

        assert_eq!(session.game().numerical_hints.len(), 5);
    }

    #[test]
    fn merge_rejects_resized_quote() {
        let mut session = SessionController::default();
        session.apply_start(start_body()).expect("apply");

        let echoed = GameState {
            quote: "abc".into(),
            answered_quote: "a__".into(),
            ..start_body()
        };
        session.merge_guess(echoed).expect_err("mismatch");

        assert_eq!(session.game(), &start_body());
    }
}
