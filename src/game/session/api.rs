use crate::game::board::{BoardError, Color};
use std::fmt::{Display, Formatter};

/// lifecycle of a session once setup is done
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    Won,
    Drawn,
}

/// result of one accepted move
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// game goes on, `next` is to move
    Continue { next: Color },
    /// the mover completed five in a row
    Won { winner: String, loser: String },
    /// the board filled up without a winner
    Drawn,
}

/// final outcome of a finished session
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Won { winner: String, loser: String },
    Drawn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    OutOfRange,
    CellOccupied,
    /// the session already ended in a win or draw
    GameOver,
}

impl From<BoardError> for MoveError {
    fn from(e: BoardError) -> Self {
        match e {
            BoardError::OutOfRange => MoveError::OutOfRange,
            BoardError::CellOccupied => MoveError::CellOccupied,
        }
    }
}

impl Display for MoveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::OutOfRange => write!(f, "coordinates out of range"),
            MoveError::CellOccupied => write!(f, "cell already occupied"),
            MoveError::GameOver => write!(f, "game is over"),
        }
    }
}

impl std::error::Error for MoveError {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResumeError {
    /// the saved board holds a value other than 0, 1, 2
    CorruptBoard,
    /// the saved move count disagrees with the stones on the board
    MoveCountMismatch,
    /// a saved board with no empty cell cannot be in progress
    BoardFull,
}

impl Display for ResumeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ResumeError::CorruptBoard => write!(f, "saved board is corrupt"),
            ResumeError::MoveCountMismatch => write!(f, "saved move count does not match board"),
            ResumeError::BoardFull => write!(f, "saved board is already full"),
        }
    }
}

impl std::error::Error for ResumeError {}

/// The game being played: a name and its rules text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameInfo {
    pub name: &'static str,
    pub rules: &'static str,
}

pub const GOMOKU: GameInfo = GameInfo {
    name: "Gomoku",
    rules: "GOMOKU RULES\n\
        The game is played on a 15x15 board.\n\
        Two sides play: black and white.\n\
        The player with the black stones moves first,\n\
        then players take turns placing one stone on an empty cell.\n\
        The first player to line up five or more stones of their color\n\
        horizontally, vertically or diagonally wins.\n\
        If the board fills up without such a line, the game is a draw.\n\
        Who moves first (and plays black) is decided by a coin flip.",
};
