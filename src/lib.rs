pub mod cli;
pub mod config;
pub mod game;
pub mod store;

#[cfg(test)]
mod test_fixtures;

pub use cli::{Shell, FAREWELL};
pub use game::*;
pub use store::{
    GameResult, GameSnapshot, GameStore, LoadSnapshotFailure, OutcomeKind, PlayerStats,
    Statistics,
};
