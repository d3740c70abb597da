use thiserror::Error;

/// A rejected move. The board or session it was aimed at is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("invalid move: cell {index} is out of range")]
    OutOfRange { index: usize },

    #[error("invalid move: cell {index} is already occupied")]
    Occupied { index: usize },

    #[error("invalid move: game is already over")]
    GameFinished,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardParseError {
    #[error("board must have 9 cells, got {got}")]
    WrongCellCount { got: usize },

    #[error("invalid character '{character}' at cell {position}")]
    InvalidCharacter { character: char, position: usize },
}
