use std::fmt;

/// The single user-facing status line. Every state-changing action replaces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusMessage {
    #[default]
    Empty,
    LoadFailed,
    SelectPositionFirst,
    GuessInFlight,
    CorrectGuess,
    IncorrectGuess,
    QuoteComplete,
    GuessFailed,
}

impl StatusMessage {
    pub fn text(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::LoadFailed => "Failed to load game data.",
            Self::SelectPositionFirst => "Please select a position first.",
            Self::GuessInFlight => "Please wait for the current guess to finish.",
            Self::CorrectGuess => "Correct guess!",
            Self::IncorrectGuess => "Incorrect guess, try again!",
            Self::QuoteComplete => "Congratulations, you have guessed the entire quote!",
            Self::GuessFailed => "Error processing your guess.",
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
