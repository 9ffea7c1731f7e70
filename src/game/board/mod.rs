mod codec;
mod field;
mod win;

use bincode::{Decode, Encode};
use std::fmt::{Display, Formatter};

pub use codec::{decode_rows, encode_rows, BoardRows};
pub use field::{Board, BOARD_SIZE};
pub use win::check_win;

/// Represents player action (black or white)
#[derive(Clone, PartialEq, Eq, Copy, Debug, Hash, Encode, Decode)]
#[repr(u8)]
pub enum Color {
    Black = 1,
    White = 2,
}

impl Color {
    pub fn switch(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// represents a board cell: Empty, Black, White
#[derive(Clone, PartialEq, Eq, Copy, Debug)]
#[repr(u8)]
pub enum Cell {
    Empty = 0,
    Black = 1,
    White = 2,
}

impl From<Color> for Cell {
    #[inline(always)]
    fn from(c: Color) -> Self {
        match c {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// row or column outside `[0, 15)`
    OutOfRange,
    /// the target cell already holds a stone
    CellOccupied,
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::OutOfRange => write!(f, "board range exceeded"),
            BoardError::CellOccupied => write!(f, "cell already occupied"),
        }
    }
}

impl std::error::Error for BoardError {}
