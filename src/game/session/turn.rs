use crate::game::board::Color::{self, Black, White};
use crate::game::session::player::{normalize_name, PlayerIdentity};
use log::trace;
use rand::Rng;

/// Color assignment and the turn pointer.
///
/// Black always opens. Each accepted move toggles the pointer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnEngine {
    /// names in the order they were entered
    entry_names: (String, String),
    black: PlayerIdentity,
    white: PlayerIdentity,
    current: Color,
}

impl TurnEngine {
    /// flip a fair coin for the first mover, who plays black
    pub fn coin_flip<R: Rng>(player1: &str, player2: &str, rng: &mut R) -> Self {
        let is_p1_black = rng.gen::<bool>();
        trace!("coin flip: player 1 black = {}", is_p1_black);
        let (black, white) = if is_p1_black {
            (player1, player2)
        } else {
            (player2, player1)
        };
        Self::assign(player1, player2, black, white, Black)
    }

    /// rebuild colors and turn from saved names.
    ///
    /// Black is whichever entry name equals `black_name` (the second entry
    /// otherwise), and the current turn is black iff `current_name` is
    /// the black player's name. Two players sharing one name cannot be told
    /// apart that way, so `saved_color` decides for them.
    pub fn resume(
        player1: &str,
        player2: &str,
        black_name: &str,
        current_name: &str,
        saved_color: Color,
    ) -> Self {
        let (black, white) = if player1 == black_name {
            (player1, player2)
        } else {
            (player2, player1)
        };
        let current = if black == white {
            saved_color
        } else if current_name == black {
            Black
        } else {
            White
        };
        Self::assign(player1, player2, black, white, current)
    }

    fn assign(player1: &str, player2: &str, black: &str, white: &str, current: Color) -> Self {
        TurnEngine {
            entry_names: (normalize_name(player1), normalize_name(player2)),
            black: PlayerIdentity::new(black, Black),
            white: PlayerIdentity::new(white, White),
            current,
        }
    }

    pub fn current(&self) -> &PlayerIdentity {
        self.player(self.current)
    }

    pub fn current_color(&self) -> Color {
        self.current
    }

    pub fn player(&self, color: Color) -> &PlayerIdentity {
        match color {
            Black => &self.black,
            White => &self.white,
        }
    }

    pub fn black(&self) -> &PlayerIdentity {
        &self.black
    }

    pub fn white(&self) -> &PlayerIdentity {
        &self.white
    }

    /// the player who opened the game, always black
    pub fn first_mover(&self) -> &PlayerIdentity {
        &self.black
    }

    pub fn entry_names(&self) -> (&str, &str) {
        (&self.entry_names.0, &self.entry_names.1)
    }

    pub fn toggle(&mut self) {
        self.current = self.current.switch();
    }
}
