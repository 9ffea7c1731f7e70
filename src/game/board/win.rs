use crate::game::board::{Board, Cell, Color, BOARD_SIZE};

/// stones in a row needed to win, overlines included
const WIN_LENGTH: u8 = 5;
/// half width of the window scanned on diagonals
const DIAGONAL_REACH: isize = 4;

/// Decide whether the stone of `color` just played at `(row, col)` wins.
///
/// Rows and columns are scanned from edge to edge, while both diagonals
/// only look at the 9 cells centered on the move. Any five-or-more run
/// through the new stone lies within that window.
pub fn check_win(board: &Board, row: usize, col: usize, color: Color) -> bool {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return false;
    }
    let target = Cell::from(color);
    let field = board.rows();
    // vertical
    reaches_five((0..BOARD_SIZE).map(|i| field[i][col]), target)
        // horizontal
        || reaches_five(field[row].iter().copied(), target)
        // diagonal "\"
        || reaches_five(diagonal_window(field, row, col, 1), target)
        // diagonal "/"
        || reaches_five(diagonal_window(field, row, col, -1), target)
}

/// cells at offsets `-4..=4` along a diagonal, off-board cells skipped.
///
/// `col_step` is `1` for "\" and `-1` for "/".
fn diagonal_window(
    field: &[[Cell; BOARD_SIZE]; BOARD_SIZE],
    row: usize,
    col: usize,
    col_step: isize,
) -> impl Iterator<Item = Cell> + '_ {
    (-DIAGONAL_REACH..=DIAGONAL_REACH).filter_map(move |i| {
        let r = row as isize + i;
        let c = col as isize + i * col_step;
        if (0..BOARD_SIZE as isize).contains(&r) && (0..BOARD_SIZE as isize).contains(&c) {
            Some(field[r as usize][c as usize])
        } else {
            None
        }
    })
}

/// running count of `target`, reset on any other cell,
/// stops at the first cell where it reaches five
#[inline(always)]
fn reaches_five(line: impl Iterator<Item = Cell>, target: Cell) -> bool {
    line.scan(0u8, |run, s| {
        *run = if s == target { *run + 1 } else { 0 };
        Some(*run)
    })
    .any(|run| run >= WIN_LENGTH)
}
