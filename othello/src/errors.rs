use crate::{FinalScore, PlayerId, Position, MAX_BOARD_SIZE};

/// The error type for [`Board::place_disc()`](crate::Board::place_disc).
///
/// Apart from [`IllegalPlacement::GameAlreadyEnded`], the board is left untouched.
#[derive(Debug, PartialEq, Eq)]
pub enum IllegalPlacement {
    OutOfBounds { position: Position },
    SquareOccupied { position: Position },
    NoCapture { position: Position },
    UnknownPlayer { player: PlayerId },
    /// The game was already over. The placement was not made; instead the
    /// finished game was tallied and a new one started.
    GameAlreadyEnded { final_score: FinalScore },
}

impl std::error::Error for IllegalPlacement {}

impl std::fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlacement::OutOfBounds { position } => {
                write!(f, "Disc was placed outside of the board at {}", position)
            }
            IllegalPlacement::SquareOccupied { position } => {
                write!(f, "Disc was placed on the occupied square {}", position)
            }
            IllegalPlacement::NoCapture { position } => write!(
                f,
                "Disc placed at {} would not capture any opposing disc",
                position
            ),
            IllegalPlacement::UnknownPlayer { player } => {
                write!(f, "There is no player {} in this game", player)
            }
            IllegalPlacement::GameAlreadyEnded { final_score } => write!(
                f,
                "The game had already ended ({}), a new game was started",
                final_score
            ),
        }
    }
}

/// The error type for [`Board::from_layout()`](crate::Board::from_layout).
#[derive(Debug, PartialEq, Eq)]
pub enum ParseLayoutError {
    /// The layout must be an even number of rows between 2 and [`MAX_BOARD_SIZE`].
    InvalidSize { rows: usize },
    RaggedRow { row: usize, len: usize },
    InvalidSquare { row: usize, found: char },
    NextPlayerOutOfRange { player: PlayerId },
}

impl std::error::Error for ParseLayoutError {}

impl std::fmt::Display for ParseLayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseLayoutError::InvalidSize { rows } => write!(
                f,
                "A layout needs an even number of rows between 2 and {}, but has {}",
                MAX_BOARD_SIZE, rows
            ),
            ParseLayoutError::RaggedRow { row, len } => write!(
                f,
                "Row {} has {} squares, which does not match the number of rows",
                row, len
            ),
            ParseLayoutError::InvalidSquare { row, found } => {
                write!(f, "Unexpected character '{}' in row {}", found, row)
            }
            ParseLayoutError::NextPlayerOutOfRange { player } => {
                write!(f, "Player {} does not take part in this layout", player)
            }
        }
    }
}
