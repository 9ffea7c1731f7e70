use crate::game::board::BoardError::{CellOccupied, OutOfRange};
use crate::game::board::{BoardError, Cell, Color};

pub const BOARD_SIZE: usize = 15;
const CELL_COUNT: u8 = (BOARD_SIZE * BOARD_SIZE) as u8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    inner: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    e_count: u8,
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    #[inline(always)]
    pub fn new() -> Self {
        Board {
            inner: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            e_count: CELL_COUNT,
        }
    }

    /// build a board from existing cells, recounting empty cells
    pub fn from_rows(inner: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let e_count = inner
            .iter()
            .flat_map(|row| row.iter())
            .filter(|c| **c == Cell::Empty)
            .count() as u8;
        Board { inner, e_count }
    }

    /// read a single cell
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        match self.inner.get(row).and_then(|r| r.get(col)) {
            None => unlikely_error(Err(OutOfRange)),
            Some(c) => Ok(*c),
        }
    }

    /// put a stone of `color` on an empty cell.
    ///
    /// the board is left untouched on error.
    pub fn set(&mut self, row: usize, col: usize, color: Color) -> Result<(), BoardError> {
        match self.inner.get_mut(row) {
            None => unlikely_error(Err(OutOfRange)),
            Some(r) => match r.get_mut(col) {
                None => unlikely_error(Err(OutOfRange)),
                Some(s) => {
                    if *s != Cell::Empty {
                        unlikely_error(Err(CellOccupied))
                    } else {
                        self.e_count -= 1;
                        *s = color.into();
                        Ok(())
                    }
                }
            },
        }
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.e_count == 0
    }

    pub fn empty_cells(&self) -> usize {
        self.e_count as usize
    }

    /// read the internal representation of board
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.inner
    }
}

#[cold]
fn unlikely_error<T>(e: T) -> T {
    e
}
