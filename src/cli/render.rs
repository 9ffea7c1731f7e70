use crate::game::{Board, Cell, BOARD_SIZE};
use crate::store::{format_timestamp, GameResult, Statistics};
use std::fmt::Write;

fn cell_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Black => 'X',
        Cell::White => 'O',
    }
}

/// text grid with 1-based row and column headers
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("   ");
    for col in 1..=BOARD_SIZE {
        let _ = write!(out, "{:>3}", col);
    }
    out.push('\n');
    for (row, cells) in board.rows().iter().enumerate() {
        let _ = write!(out, "{:>3}", row + 1);
        for cell in cells {
            let _ = write!(out, "{:>3}", cell_char(*cell));
        }
        out.push('\n');
    }
    out
}

pub fn render_history(history: &[GameResult]) -> String {
    if history.is_empty() {
        return "no finished games yet".to_string();
    }
    let mut out = String::from("finished games:\n");
    for (i, result) in history.iter().enumerate() {
        let verdict = match &result.winner {
            Some(winner) => format!("winner: {}", winner),
            None => "draw".to_string(),
        };
        let _ = writeln!(
            out,
            "{:>3}. {}  {} vs {}  {}  ({} moves, black: {}, white: {})",
            i + 1,
            format_timestamp(result.finished_at),
            result.player_a,
            result.player_b,
            verdict,
            result.move_count,
            result.black_player,
            result.white_player,
        );
    }
    out
}

pub fn render_stats(stats: &Statistics) -> String {
    if stats.games == 0 {
        return "no statistics yet".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(out, "games played: {}", stats.games);
    let _ = writeln!(out, "draws: {}", stats.draws);
    let _ = writeln!(out, "total moves: {}", stats.total_moves);
    let _ = writeln!(out, "average moves per game: {:.1}", stats.average_moves);
    out.push_str("players:\n");
    for (name, player) in &stats.players {
        let _ = writeln!(
            out,
            "    - {}: {} games, {} wins, {:.1}%",
            name,
            player.games,
            player.wins,
            player.win_rate * 100.0
        );
    }
    match &stats.best_player {
        Some((name, rate)) => {
            let _ = writeln!(out, "best player: {} ({:.1}%)", name, rate * 100.0);
        }
        None => out.push_str("best player: none yet\n"),
    }
    out
}

#[cfg(test)]
mod test_render {
    use super::*;
    use crate::game::Color;
    use crate::store::OutcomeKind;

    #[test]
    fn test_render_board() {
        let mut board = Board::new();
        board.set(0, 0, Color::Black).unwrap();
        board.set(14, 14, Color::White).unwrap();
        let text = render_board(&board);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 16);
        assert!(lines[0].trim_start().starts_with("1  2  3"));
        assert!(lines[0].ends_with("15"));
        assert!(lines[1].starts_with("  1  X  ."));
        assert!(lines[15].starts_with(" 15  ."));
        assert!(lines[15].ends_with('O'));
        assert_eq!(text.matches('.').count(), 223);
    }

    #[test]
    fn test_render_history_and_stats() {
        assert_eq!(render_history(&[]), "no finished games yet");
        let result = GameResult {
            player_a: "amber".to_string(),
            player_b: "lisa".to_string(),
            winner: Some("amber".to_string()),
            move_count: 9,
            kind: OutcomeKind::Win,
            black_player: "amber".to_string(),
            white_player: "lisa".to_string(),
            first_mover: "amber".to_string(),
            finished_at: 0,
            board_size: GameResult::BOARD_SIZE,
        };
        let history = render_history(&[result.clone()]);
        assert!(history.contains("amber vs lisa  winner: amber  (9 moves"));

        let stats = render_stats(&Statistics::from_history(&[result]));
        assert!(stats.contains("games played: 1"));
        assert!(stats.contains("- lisa: 1 games, 0 wins, 0.0%"));
        assert!(stats.contains("best player: amber (100.0%)"));
        assert_eq!(render_stats(&Statistics::default()), "no statistics yet");
    }
}
