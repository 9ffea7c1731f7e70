pub mod board;
pub mod session;

pub use board::{check_win, Board, BoardError, Cell, Color, BOARD_SIZE};
pub use session::{
    GameInfo, GameOutcome, GameSession, MoveError, MoveOutcome, Phase, PlayerIdentity,
    ResumeError, SessionSetup, TurnEngine, GOMOKU,
};
