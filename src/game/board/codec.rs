use crate::game::board::{Board, Cell, BOARD_SIZE};
use unroll::unroll_for_loops;

/// board as 15 rows of 15 integers: 0 empty, 1 black, 2 white
pub type BoardRows = [[u8; BOARD_SIZE]; BOARD_SIZE];

const EMPTY_CODE: u8 = 0;
const BLACK_CODE: u8 = 1;
const WHITE_CODE: u8 = 2;

#[inline]
#[unroll_for_loops]
pub fn encode_rows(board: &Board) -> BoardRows {
    let field = board.rows();
    let mut rows = [[EMPTY_CODE; 15]; 15];
    for n in 0..15 {
        rows[n] = encode_row(&field[n]);
    }
    rows
}

/// returns `None` if any value is not a valid cell code
pub fn decode_rows(rows: &BoardRows) -> Option<Board> {
    let mut field = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (decoded, encoded) in field.iter_mut().zip(rows.iter()) {
        *decoded = decode_row(encoded)?;
    }
    Some(Board::from_rows(field))
}

#[inline]
#[unroll_for_loops]
fn encode_row(row: &[Cell; 15]) -> [u8; 15] {
    let mut out = [EMPTY_CODE; 15];
    for i in 0..15 {
        out[i] = cell_to_code(&row[i]);
    }
    out
}

#[inline]
fn decode_row(row: &[u8; BOARD_SIZE]) -> Option<[Cell; BOARD_SIZE]> {
    let mut out = [Cell::Empty; BOARD_SIZE];
    for (cell, code) in out.iter_mut().zip(row.iter()) {
        *cell = code_to_cell(*code)?;
    }
    Some(out)
}

#[inline(always)]
const fn cell_to_code(cell: &Cell) -> u8 {
    match cell {
        Cell::Empty => EMPTY_CODE,
        Cell::Black => BLACK_CODE,
        Cell::White => WHITE_CODE,
    }
}

#[inline(always)]
const fn code_to_cell(code: u8) -> Option<Cell> {
    match code {
        EMPTY_CODE => Some(Cell::Empty),
        BLACK_CODE => Some(Cell::Black),
        WHITE_CODE => Some(Cell::White),
        _ => None,
    }
}
