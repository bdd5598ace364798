use shared::domain::{GuessLetter, InvalidGuessLetter};
use thiserror::Error;

pub const USAGE: &str = "\
commands:
  select <n> | s <n> | <n>    pick character position n (0-based)
  guess <letter> | g <letter> | <letter>
                              guess a letter for the selected position
  show                        redraw the board
  reload                      start a new session
  help                        show this help
  quit                        leave the game";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(usize),
    Guess(GuessLetter),
    Show,
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("'{0}' needs an argument")]
    MissingArgument(String),
    #[error("'{0}' is not a position")]
    InvalidPosition(String),
    #[error("a guess must be a single letter, got '{0}'")]
    NotSingleLetter(String),
    #[error(transparent)]
    InvalidLetter(#[from] InvalidGuessLetter),
    #[error("unknown command '{0}'")]
    Unknown(String),
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(Command::Show);
    };
    let arg = words.next();
    let head_lower = head.to_ascii_lowercase();

    match (head_lower.as_str(), arg) {
        ("select" | "s", Some(arg)) => parse_position(arg).map(Command::Select),
        ("guess" | "g", Some(arg)) => parse_letter(arg).map(Command::Guess),
        ("select" | "guess", None) => Err(CommandError::MissingArgument(head_lower)),
        ("show", _) => Ok(Command::Show),
        ("reload", _) => Ok(Command::Reload),
        ("help" | "?", _) => Ok(Command::Help),
        ("quit" | "exit", _) => Ok(Command::Quit),
        (_, None) if head.chars().all(|c| c.is_ascii_digit()) => {
            parse_position(head).map(Command::Select)
        }
        (_, None) if head.chars().count() == 1 => parse_letter(head).map(Command::Guess),
        _ => Err(CommandError::Unknown(head.to_string())),
    }
}

fn parse_position(raw: &str) -> Result<usize, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::InvalidPosition(raw.to_string()))
}

fn parse_letter(raw: &str) -> Result<GuessLetter, CommandError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(GuessLetter::try_from(c)?),
        _ => Err(CommandError::NotSingleLetter(raw.to_string())),
    }
}
