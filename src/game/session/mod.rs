mod api;
mod player;
mod session_impl;
mod turn;

pub use api::*;
pub use player::{normalize_name, validate_name, InvalidPlayerName, PlayerIdentity, DEFAULT_PLAYER_NAME};
pub use session_impl::{GameSession, SessionSetup};
pub use turn::TurnEngine;
