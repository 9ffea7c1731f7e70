mod game_store;
mod records;
mod stats;

pub use game_store::{GameStore, LoadSnapshotFailure};
pub use records::{format_timestamp, now_timestamp, GameResult, GameSnapshot, OutcomeKind};
pub use stats::{PlayerStats, Statistics};
