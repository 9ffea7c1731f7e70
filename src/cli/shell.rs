use crate::cli::commands::{
    parse_confirm, parse_game, parse_menu, GameCommand, InputError, MenuCommand, GAME_HELP,
    MENU_HELP,
};
use crate::cli::render::{render_board, render_history, render_stats};
use crate::game::session::validate_name;
use crate::game::{GameSession, MoveOutcome, SessionSetup, GOMOKU};
use crate::store::{format_timestamp, now_timestamp, GameStore, LoadSnapshotFailure, Statistics};
use anyhow::Result;
use log::{error, info, warn};
use rand::rngs::StdRng;
use std::io::{BufRead, Write};

pub const FAREWELL: &str = "Thanks for playing, goodbye!";

/// leave outside the interactive loop: an optional notice, then the farewell
pub fn say_goodbye<W: Write>(output: &mut W, notice: Option<&str>) -> std::io::Result<()> {
    if let Some(notice) = notice {
        writeln!(output, "{}", notice)?;
    }
    writeln!(output, "{}", FAREWELL)?;
    output.flush()
}

/// where control goes after a screen is done
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Menu,
    Exit,
}

/// The interactive loop: menu, setup and game screens.
///
/// End of input is handled like `exit`.
pub struct Shell<'a, R: BufRead, W: Write> {
    input: R,
    output: W,
    store: &'a GameStore,
    rng: StdRng,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(input: R, output: W, store: &'a GameStore, rng: StdRng) -> Self {
        Shell {
            input,
            output,
            store,
            rng,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// run until the user leaves, then say goodbye
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to {}!", GOMOKU.name)?;
        writeln!(self.output, "{}", MENU_HELP)?;
        while self.menu()? == Flow::Menu {}
        writeln!(self.output, "{}", FAREWELL)?;
        self.output.flush()?;
        Ok(())
    }

    fn menu(&mut self) -> Result<Flow> {
        let prompt = if self.store.has_snapshot() {
            "menu (saved game: 2 to resume)> "
        } else {
            "menu> "
        };
        let line = match self.prompt(prompt)? {
            None => return Ok(Flow::Exit),
            Some(line) => line,
        };
        match parse_menu(&line) {
            Ok(MenuCommand::NewGame) => match self.setup()? {
                Ok(session) => self.play(session),
                Err(flow) => Ok(flow),
            },
            Ok(MenuCommand::Resume) => self.resume(),
            Ok(MenuCommand::Rules) => {
                writeln!(self.output, "{}", GOMOKU.rules)?;
                Ok(Flow::Menu)
            }
            Ok(MenuCommand::History) => {
                let history = self.store.load_history();
                writeln!(self.output, "{}", render_history(&history))?;
                Ok(Flow::Menu)
            }
            Ok(MenuCommand::Stats) => {
                let stats = Statistics::from_history(&self.store.load_history());
                writeln!(self.output, "{}", render_stats(&stats))?;
                Ok(Flow::Menu)
            }
            Ok(MenuCommand::ClearHistory) => {
                self.clear_history()?;
                Ok(Flow::Menu)
            }
            Ok(MenuCommand::Exit) => Ok(Flow::Exit),
            Err(InputError::Empty) => Ok(Flow::Menu),
            Err(e) => {
                writeln!(self.output, "{}\n{}", e, MENU_HELP)?;
                Ok(Flow::Menu)
            }
        }
    }

    /// ask for both names and flip the coin
    fn setup(&mut self) -> Result<Result<GameSession, Flow>> {
        let player1 = match self.ask_name(1)? {
            Ok(name) => name,
            Err(flow) => return Ok(Err(flow)),
        };
        let player2 = match self.ask_name(2)? {
            Ok(name) => name,
            Err(flow) => return Ok(Err(flow)),
        };
        let session = SessionSetup::new(&player1, &player2).start(&mut self.rng);
        let turn = session.turn();
        writeln!(
            self.output,
            "coin flip: {} plays black (X) and moves first, {} plays white (O)",
            turn.black().name(),
            turn.white().name()
        )?;
        Ok(Ok(session))
    }

    /// `Err(flow)` when the user typed `menu` or `exit` instead of a name
    fn ask_name(&mut self, n: u8) -> Result<Result<String, Flow>> {
        loop {
            let prompt = format!(
                "player {} name (blank for default, `menu` or `exit` to leave): ",
                n
            );
            let line = match self.prompt(&prompt)? {
                None => return Ok(Err(Flow::Exit)),
                Some(line) => line,
            };
            match line.trim().to_lowercase().as_str() {
                "menu" => return Ok(Err(Flow::Menu)),
                "exit" | "quit" => return Ok(Err(Flow::Exit)),
                _ => {}
            }
            match validate_name(&line) {
                Ok(name) => return Ok(Ok(name.to_string())),
                Err(e) => writeln!(self.output, "{}, try again", e)?,
            }
        }
    }

    fn resume(&mut self) -> Result<Flow> {
        let snapshot = match self.store.load_snapshot() {
            Ok(snapshot) => snapshot,
            Err(LoadSnapshotFailure::NotFound) => {
                writeln!(self.output, "no saved game to resume")?;
                return Ok(Flow::Menu);
            }
            Err(LoadSnapshotFailure::DataCorrupted) => {
                writeln!(self.output, "no resumable game (the save is damaged)")?;
                return Ok(Flow::Menu);
            }
            Err(LoadSnapshotFailure::StoreError) => {
                writeln!(self.output, "failed to read the saved game")?;
                return Ok(Flow::Menu);
            }
        };
        match GameSession::resume(&snapshot) {
            Ok(session) => {
                writeln!(
                    self.output,
                    "resuming game saved {}: {} (X) vs {} (O), {} moves played, {} to move",
                    format_timestamp(snapshot.saved_at),
                    session.turn().black().name(),
                    session.turn().white().name(),
                    session.move_count(),
                    session.current_player().name()
                )?;
                self.play(session)
            }
            Err(e) => {
                warn!("saved game rejected: {}", e);
                writeln!(self.output, "no resumable game ({})", e)?;
                Ok(Flow::Menu)
            }
        }
    }

    fn play(&mut self, mut session: GameSession) -> Result<Flow> {
        writeln!(self.output, "{}", GAME_HELP)?;
        let mut redraw = true;
        loop {
            if redraw {
                writeln!(self.output, "{}", render_board(session.board()))?;
                redraw = false;
            }
            let prompt = format!("{} to move> ", session.current_player());
            let line = match self.prompt(&prompt)? {
                None => return Ok(Flow::Exit),
                Some(line) => line,
            };
            match parse_game(&line) {
                Ok(GameCommand::Move(row, col)) => match session.apply_move(row, col) {
                    Ok(MoveOutcome::Continue { .. }) => redraw = true,
                    Ok(MoveOutcome::Won { winner, .. }) => {
                        writeln!(self.output, "{}", render_board(session.board()))?;
                        writeln!(
                            self.output,
                            "{} wins after {} moves!",
                            winner,
                            session.move_count()
                        )?;
                        self.record(&session)?;
                        return Ok(Flow::Menu);
                    }
                    Ok(MoveOutcome::Drawn) => {
                        writeln!(self.output, "{}", render_board(session.board()))?;
                        writeln!(self.output, "the board is full, the game is a draw")?;
                        self.record(&session)?;
                        return Ok(Flow::Menu);
                    }
                    Err(e) => writeln!(self.output, "{}, try again", e)?,
                },
                Ok(GameCommand::Save) => {
                    if self.save(&session)? {
                        return Ok(Flow::Menu);
                    }
                }
                Ok(GameCommand::Menu) => return Ok(Flow::Menu),
                Ok(GameCommand::Exit) => return Ok(Flow::Exit),
                Err(InputError::Empty) => {}
                Err(e) => writeln!(self.output, "{}\n{}", e, GAME_HELP)?,
            }
        }
    }

    /// `false` when saving failed and the game goes on
    fn save(&mut self, session: &GameSession) -> Result<bool> {
        let saved = session
            .suspend(now_timestamp())
            .map_err(anyhow::Error::from)
            .and_then(|snapshot| self.store.save_snapshot(&snapshot));
        match saved {
            Ok(()) => {
                writeln!(self.output, "game saved")?;
                Ok(true)
            }
            Err(e) => {
                error!("failed to save game: {}", e);
                writeln!(self.output, "failed to save the game, keep playing or try again")?;
                Ok(false)
            }
        }
    }

    fn record(&mut self, session: &GameSession) -> Result<()> {
        let result = match session.result(now_timestamp()) {
            Some(result) => result,
            None => return Ok(()),
        };
        match self.store.finish_game(&result) {
            Ok(count) => info!("{} games recorded", count),
            Err(e) => {
                error!("failed to record game result: {}", e);
                writeln!(self.output, "failed to record the result in the history")?;
            }
        }
        Ok(())
    }

    fn clear_history(&mut self) -> Result<()> {
        let answer = self.prompt("clear the whole history? (y/n) ")?;
        if answer.as_deref().map(parse_confirm).unwrap_or(false) {
            match self.store.clear_history() {
                Ok(()) => writeln!(self.output, "history cleared")?,
                Err(e) => {
                    error!("failed to clear history: {}", e);
                    writeln!(self.output, "failed to clear the history")?;
                }
            }
        } else {
            writeln!(self.output, "history kept")?;
        }
        Ok(())
    }

    /// `None` at end of input
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

#[cfg(test)]
mod test_shell {
    use super::*;
    use rand::SeedableRng;

    fn run_script(store: &GameStore, script: &str) -> String {
        let mut shell = Shell::new(
            script.as_bytes(),
            Vec::new(),
            store,
            StdRng::seed_from_u64(11),
        );
        shell.run().unwrap();
        String::from_utf8(shell.into_output()).unwrap()
    }

    #[test]
    fn test_exit_says_goodbye() {
        let store = GameStore::temporary().unwrap();
        assert!(run_script(&store, "0\n").ends_with(&format!("{}\n", FAREWELL)));
        assert!(run_script(&store, "").ends_with(&format!("{}\n", FAREWELL)));
    }

    #[test]
    fn test_menu_screens() {
        let store = GameStore::temporary().unwrap();
        let out = run_script(&store, "3\n4\n5\n2\nfoo\n\n0\n");
        assert!(out.contains("GOMOKU RULES"));
        assert!(out.contains("no finished games yet"));
        assert!(out.contains("no statistics yet"));
        assert!(out.contains("no saved game to resume"));
        assert!(out.contains("unknown command `foo`"));
        assert!(!out.contains("saved game:"));
    }

    #[test]
    fn test_save_then_resume() {
        let store = GameStore::temporary().unwrap();
        let out = run_script(&store, "new\namber\nlisa\n8 8\n8 8\n20 1\n8 9\ns\n0\n");
        assert!(out.contains("coin flip:"));
        assert!(out.contains("cell already occupied, try again"));
        assert!(out.contains("row and column must be between 1 and 15"));
        assert!(out.contains("game saved"));
        let snapshot = store.load_snapshot().unwrap();
        assert_eq!(snapshot.move_count, 2);
        assert_eq!(snapshot.board[7][7], 1);
        assert_eq!(snapshot.board[7][8], 2);

        assert!(out.contains("menu (saved game: 2 to resume)> "));

        let out = run_script(&store, "2\nm\n0\n");
        assert!(out.contains("2 moves played"));
        assert!(out.contains(&format!("saved {}:", format_timestamp(snapshot.saved_at))));
        assert!(out.contains(&format!("{} to move\n", snapshot.current_player)));
        // leaving without saving keeps the old save
        assert!(store.has_snapshot());
    }

    #[test]
    fn test_setup_back_to_menu() {
        let store = GameStore::temporary().unwrap();
        let out = run_script(&store, "1\namber\nmenu\n0\n");
        assert!(!out.contains("coin flip:"));
        assert!(out.ends_with(&format!("{}\n", FAREWELL)));
        let out = run_script(&store, "1\nexit\n");
        assert!(!out.contains("menu> menu>"));
        assert!(out.ends_with(&format!("{}\n", FAREWELL)));
    }

    #[test]
    fn test_short_names_are_names() {
        let store = GameStore::temporary().unwrap();
        let out = run_script(&store, "1\nm\nq\nm\n0\n");
        assert!(out.contains("coin flip:"));
        assert!(out.contains("(X) and moves first"));
        let named_m = out.contains("coin flip: m plays black") || out.contains(", m plays white");
        assert!(named_m);
    }

    #[test]
    fn test_failed_save_keeps_playing() {
        let store = GameStore::temporary().unwrap();
        store.fail_writes(true);
        let out = run_script(&store, "1\namber\nlisa\n1 1\ns\n2 2\nm\n0\n");
        assert!(out.contains("failed to save the game"));
        assert!(!out.contains("game saved"));
        assert!(!out.contains("cell already occupied"));
        // one game prompt per line typed in the game
        assert_eq!(out.matches(" to move> ").count(), 4);
        assert!(!store.has_snapshot());
    }

    #[test]
    fn test_say_goodbye() {
        let mut out = Vec::new();
        say_goodbye(&mut out, Some("usage: ./gomoku")).unwrap();
        say_goodbye(&mut out, None).unwrap();
        let expected = format!("usage: ./gomoku\n{}\n{}\n", FAREWELL, FAREWELL);
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_clear_history_needs_yes() {
        let store = GameStore::temporary().unwrap();
        let script = "1\na\nb\n1 1\n2 1\n1 2\n2 2\n1 3\n2 3\n1 4\n2 4\n1 5\n0\n";
        let out = run_script(&store, script);
        assert!(out.contains("wins after 9 moves!"));
        assert_eq!(store.load_history().len(), 1);
        assert!(!store.has_snapshot());

        run_script(&store, "6\nno\n0\n");
        assert_eq!(store.load_history().len(), 1);
        let out = run_script(&store, "6\nyes\n0\n");
        assert!(out.contains("history cleared"));
        assert!(store.load_history().is_empty());
    }
}
