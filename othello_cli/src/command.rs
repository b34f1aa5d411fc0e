use std::str::FromStr;

use othello::Position;

/// A line of console input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Place a disc. Already converted to 0-indexed coordinates.
    Place(Position),
    /// List the legal moves with their heuristic scores.
    Hint,
    /// Abandon the current game and start the next one.
    NewGame,
    Quit,
}

/// The error type for the [`FromStr`] instance of [`Command`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseCommandError {
    Empty,
    WrongTokenCount { found: usize },
    NotANumber { token: String },
}

impl std::error::Error for ParseCommandError {}

impl std::fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseCommandError::Empty => write!(f, "Enter a column and a row, e.g. \"3 4\""),
            ParseCommandError::WrongTokenCount { found } => write!(
                f,
                "Expected a column and a row separated by a space, but got {} values",
                found
            ),
            ParseCommandError::NotANumber { token } => {
                write!(f, "'{}' is not a coordinate", token)
            }
        }
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    /// Coordinates are read 1-indexed as `column row`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        match tokens.as_slice() {
            [] => Err(ParseCommandError::Empty),
            ["q" | "quit" | "exit"] => Ok(Command::Quit),
            ["h" | "hint"] => Ok(Command::Hint),
            ["n" | "new"] => Ok(Command::NewGame),
            [x, y] => Ok(Command::Place(Position::new(
                parse_coordinate(x)? - 1,
                parse_coordinate(y)? - 1,
            ))),
            _ => Err(ParseCommandError::WrongTokenCount {
                found: tokens.len(),
            }),
        }
    }
}

fn parse_coordinate(token: &str) -> Result<i32, ParseCommandError> {
    token.parse().map_err(|_| ParseCommandError::NotANumber {
        token: String::from(token),
    })
}
