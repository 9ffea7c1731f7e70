//! shared board layouts for unit tests
use lazy_static::lazy_static;

lazy_static! {
    /// full board with no five anywhere, 113 black and 112 white
    pub(crate) static ref DRAW_PATTERN: [&'static str; 15] = [
        "WWBWWWWBWWWWBWW",
        "WWWWBBWWWBBBWWW",
        "BBBWWWBBBWWWBBB",
        "BBBWWWBBBWWWBBB",
        "WWWBBBWWWBBBWWW",
        "BBBWWWBBBWWWBBB",
        "BBBWWWBBBWWWBBB",
        "WWWBBBWWWBBBWWW",
        "BBBWWWBBBWWWBBB",
        "BBBWWWBBBWWWBBB",
        "WWWBBBWWWBBBWWW",
        "BBBWWWBBBWWWBBB",
        "BBBWWWBBBWWWBBB",
        "WWWBBBWWWBBBWWW",
        "BBBWWWBBBWWWBBB",
    ];
    /// the draw pattern as alternating moves, black first
    pub(crate) static ref DRAW_MOVES: Vec<(usize, usize)> = {
        let cells = |stone: char| -> Vec<(usize, usize)> {
            DRAW_PATTERN
                .iter()
                .enumerate()
                .flat_map(|(i, row)| {
                    row.chars()
                        .enumerate()
                        .filter(move |(_, c)| *c == stone)
                        .map(move |(j, _)| (i, j))
                })
                .collect()
        };
        let (black, white) = (cells('B'), cells('W'));
        let mut moves = Vec::with_capacity(225);
        for i in 0..black.len() {
            moves.push(black[i]);
            if let Some(w) = white.get(i) {
                moves.push(*w);
            }
        }
        moves
    };
}
