use crate::store::records::GameResult;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerStats {
    pub games: u32,
    pub wins: u32,
    /// wins over games, in `0.0..=1.0`
    pub win_rate: f64,
}

/// Aggregates over the history log.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Statistics {
    pub games: u32,
    pub draws: u32,
    pub total_moves: u64,
    pub average_moves: f64,
    pub players: BTreeMap<String, PlayerStats>,
    /// highest win rate above zero, first name wins a tie
    pub best_player: Option<(String, f64)>,
}

impl Statistics {
    pub fn from_history(history: &[GameResult]) -> Self {
        let mut stats = Statistics::default();
        for result in history {
            stats.games += 1;
            stats.total_moves += result.move_count as u64;
            if result.winner.is_none() {
                stats.draws += 1;
            }
            stats.count_game(&result.player_a, result);
            // a player facing a namesake plays one game, not two
            if result.player_b != result.player_a {
                stats.count_game(&result.player_b, result);
            }
        }
        if stats.games > 0 {
            stats.average_moves = stats.total_moves as f64 / stats.games as f64;
        }
        for player in stats.players.values_mut() {
            player.win_rate = player.wins as f64 / player.games as f64;
        }
        stats.best_player = stats
            .players
            .iter()
            .filter(|(_, p)| p.win_rate > 0.0)
            .fold(None, |best: Option<(&String, f64)>, (name, p)| match best {
                Some((_, rate)) if rate >= p.win_rate => best,
                _ => Some((name, p.win_rate)),
            })
            .map(|(name, rate)| (name.clone(), rate));
        stats
    }

    fn count_game(&mut self, name: &str, result: &GameResult) {
        let entry = self.players.entry(name.to_string()).or_default();
        entry.games += 1;
        if result.winner.as_deref() == Some(name) {
            entry.wins += 1;
        }
    }
}

#[cfg(test)]
mod test_stats {
    use super::*;
    use crate::store::records::OutcomeKind;

    fn game(a: &str, b: &str, winner: Option<&str>, moves: u32) -> GameResult {
        GameResult {
            player_a: a.to_string(),
            player_b: b.to_string(),
            winner: winner.map(str::to_string),
            move_count: moves,
            kind: if winner.is_some() {
                OutcomeKind::Win
            } else {
                OutcomeKind::Draw
            },
            black_player: a.to_string(),
            white_player: b.to_string(),
            first_mover: a.to_string(),
            finished_at: 0,
            board_size: GameResult::BOARD_SIZE,
        }
    }

    #[test]
    fn test_empty_history() {
        let stats = Statistics::from_history(&[]);
        assert_eq!(stats, Statistics::default());
        assert_eq!(stats.best_player, None);
    }

    #[test]
    fn test_aggregation() {
        let history = vec![
            game("amber", "lisa", Some("amber"), 9),
            game("lisa", "amber", Some("lisa"), 21),
            game("amber", "lisa", None, 225),
            game("amber", "kaeya", Some("amber"), 11),
        ];
        let stats = Statistics::from_history(&history);
        assert_eq!(stats.games, 4);
        assert_eq!(stats.draws, 1);
        assert_eq!(stats.total_moves, 266);
        assert!((stats.average_moves - 66.5).abs() < 1e-9);

        let amber = &stats.players["amber"];
        assert_eq!((amber.games, amber.wins), (4, 2));
        assert!((amber.win_rate - 0.5).abs() < 1e-9);
        let lisa = &stats.players["lisa"];
        assert_eq!((lisa.games, lisa.wins), (3, 1));
        let kaeya = &stats.players["kaeya"];
        assert_eq!((kaeya.games, kaeya.wins), (1, 0));
        assert_eq!(kaeya.win_rate, 0.0);

        assert_eq!(stats.best_player, Some(("amber".to_string(), 0.5)));
    }

    #[test]
    fn test_best_player_tie_and_zero() {
        let history = vec![
            game("zed", "bob", Some("zed"), 9),
            game("bob", "zed", Some("bob"), 9),
        ];
        let stats = Statistics::from_history(&history);
        assert_eq!(stats.best_player, Some(("bob".to_string(), 0.5)));

        let draws = vec![game("zed", "bob", None, 225)];
        assert_eq!(Statistics::from_history(&draws).best_player, None);
    }

    #[test]
    fn test_namesakes_count_once() {
        let stats = Statistics::from_history(&[game("Player", "Player", Some("Player"), 9)]);
        let player = &stats.players["Player"];
        assert_eq!((player.games, player.wins), (1, 1));
    }
}
