use crate::game::board::{check_win, decode_rows, encode_rows, Board, BOARD_SIZE};
use crate::game::session::api::{GameOutcome, MoveError, MoveOutcome, Phase, ResumeError};
use crate::game::session::player::PlayerIdentity;
use crate::game::session::turn::TurnEngine;
use crate::store::{GameResult, GameSnapshot, OutcomeKind};
use log::{debug, info};
use rand::Rng;

/// Names collected before a game starts.
#[derive(Clone, Debug, Default)]
pub struct SessionSetup {
    pub player1: String,
    pub player2: String,
}

impl SessionSetup {
    pub fn new(player1: &str, player2: &str) -> Self {
        SessionSetup {
            player1: player1.to_string(),
            player2: player2.to_string(),
        }
    }

    /// flip the coin and open the game with black to move
    pub fn start<R: Rng>(self, rng: &mut R) -> GameSession {
        let turn = TurnEngine::coin_flip(&self.player1, &self.player2, rng);
        info!(
            "new game: {} plays black, {} plays white",
            turn.black().name(),
            turn.white().name()
        );
        GameSession {
            board: Board::new(),
            turn,
            move_count: 0,
            phase: Phase::InProgress,
            outcome: None,
        }
    }
}

/// One game between two players on one board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    turn: TurnEngine,
    move_count: u32,
    phase: Phase,
    outcome: Option<GameOutcome>,
}

impl GameSession {
    /// play `(row, col)` (0-based) for the player to move
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        if self.phase != Phase::InProgress {
            return Err(MoveError::GameOver);
        }
        let mover = self.turn.current().clone();
        self.board.set(row, col, mover.color())?;
        self.move_count += 1;
        debug!(
            "move {}: {} at ({}, {})",
            self.move_count,
            mover,
            row + 1,
            col + 1
        );
        if check_win(&self.board, row, col, mover.color()) {
            let loser = self.turn.player(mover.color().switch()).name().to_string();
            let winner = mover.name().to_string();
            info!("{} wins after {} moves", winner, self.move_count);
            self.phase = Phase::Won;
            self.outcome = Some(GameOutcome::Won {
                winner: winner.clone(),
                loser: loser.clone(),
            });
            Ok(MoveOutcome::Won { winner, loser })
        } else if self.board.is_full() {
            info!("draw after {} moves", self.move_count);
            self.phase = Phase::Drawn;
            self.outcome = Some(GameOutcome::Drawn);
            Ok(MoveOutcome::Drawn)
        } else {
            self.turn.toggle();
            Ok(MoveOutcome::Continue {
                next: self.turn.current_color(),
            })
        }
    }

    pub fn is_draw(&self) -> bool {
        self.phase == Phase::Drawn
    }

    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> &PlayerIdentity {
        self.turn.current()
    }

    pub fn turn(&self) -> &TurnEngine {
        &self.turn
    }

    /// capture the game for the save slot; board and turn are untouched
    pub fn suspend(&self, saved_at: i64) -> Result<GameSnapshot, MoveError> {
        if self.phase != Phase::InProgress {
            return Err(MoveError::GameOver);
        }
        let (player1, player2) = self.turn.entry_names();
        let current = self.turn.current();
        Ok(GameSnapshot {
            board: encode_rows(&self.board),
            player1_name: player1.to_string(),
            player2_name: player2.to_string(),
            black_player: self.turn.black().name().to_string(),
            white_player: self.turn.white().name().to_string(),
            current_player: current.name().to_string(),
            current_color: current.color(),
            move_count: self.move_count,
            saved_at,
        })
    }

    /// rebuild an in-progress session from the save slot
    pub fn resume(snapshot: &GameSnapshot) -> Result<GameSession, ResumeError> {
        let board = decode_rows(&snapshot.board).ok_or(ResumeError::CorruptBoard)?;
        let stones = BOARD_SIZE * BOARD_SIZE - board.empty_cells();
        if stones != snapshot.move_count as usize {
            return Err(ResumeError::MoveCountMismatch);
        }
        if board.is_full() {
            return Err(ResumeError::BoardFull);
        }
        let turn = TurnEngine::resume(
            &snapshot.player1_name,
            &snapshot.player2_name,
            &snapshot.black_player,
            &snapshot.current_player,
            snapshot.current_color,
        );
        info!(
            "resumed game after {} moves, {} to move",
            snapshot.move_count,
            turn.current()
        );
        Ok(GameSession {
            board,
            turn,
            move_count: snapshot.move_count,
            phase: Phase::InProgress,
            outcome: None,
        })
    }

    /// history record of a finished session, `None` while in progress
    pub fn result(&self, finished_at: i64) -> Option<GameResult> {
        let (player1, player2) = self.turn.entry_names();
        let (player_a, player_b, winner, kind) = match self.outcome.as_ref()? {
            GameOutcome::Won { winner, loser } => (
                winner.clone(),
                loser.clone(),
                Some(winner.clone()),
                OutcomeKind::Win,
            ),
            GameOutcome::Drawn => (
                player1.to_string(),
                player2.to_string(),
                None,
                OutcomeKind::Draw,
            ),
        };
        Some(GameResult {
            player_a,
            player_b,
            winner,
            move_count: self.move_count,
            kind,
            black_player: self.turn.black().name().to_string(),
            white_player: self.turn.white().name().to_string(),
            first_mover: self.turn.first_mover().name().to_string(),
            finished_at,
            board_size: GameResult::BOARD_SIZE,
        })
    }
}
