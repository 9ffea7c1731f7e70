use crate::game::board::{BoardRows, Color, BOARD_SIZE};
use bincode::{Decode, Encode};
use chrono::{DateTime, Local, Utc};

/// A resumable in-progress game, as held in the save slot.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct GameSnapshot {
    pub board: BoardRows,
    pub player1_name: String,
    pub player2_name: String,
    pub black_player: String,
    pub white_player: String,
    pub current_player: String,
    pub current_color: Color,
    pub move_count: u32,
    /// unix seconds
    pub saved_at: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Encode, Decode)]
pub enum OutcomeKind {
    Win,
    Draw,
}

/// One completed game in the history log.
///
/// On a win `player_a` is the winner and `player_b` the loser,
/// on a draw both are in entry order.
#[derive(Clone, Debug, PartialEq, Eq, Encode, Decode)]
pub struct GameResult {
    pub player_a: String,
    pub player_b: String,
    /// `None` marks a draw
    pub winner: Option<String>,
    pub move_count: u32,
    pub kind: OutcomeKind,
    pub black_player: String,
    pub white_player: String,
    pub first_mover: String,
    /// unix seconds
    pub finished_at: i64,
    pub board_size: u8,
}

impl GameResult {
    pub const BOARD_SIZE: u8 = BOARD_SIZE as u8;
}

pub fn now_timestamp() -> i64 {
    Utc::now().timestamp()
}

/// `dd.mm.yyyy HH:MM` in local time
pub fn format_timestamp(secs: i64) -> String {
    match DateTime::<Utc>::from_timestamp(secs, 0) {
        Some(t) => t.with_timezone(&Local).format("%d.%m.%Y %H:%M").to_string(),
        None => "unknown date".to_string(),
    }
}
