use crate::game::BOARD_SIZE;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    NewGame,
    Resume,
    Rules,
    History,
    Stats,
    ClearHistory,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    /// 0-based row and column
    Move(usize, usize),
    Save,
    Menu,
    Exit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputError {
    Empty,
    Unknown(String),
    /// not two integers
    BadCoordinates,
    /// integers outside `1..=15`
    OutOfRange,
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Empty => write!(f, "empty input"),
            InputError::Unknown(cmd) => write!(f, "unknown command `{}`", cmd),
            InputError::BadCoordinates => write!(f, "enter a move as `row col`, e.g. `8 8`"),
            InputError::OutOfRange => {
                write!(f, "row and column must be between 1 and {}", BOARD_SIZE)
            }
        }
    }
}

impl std::error::Error for InputError {}

pub fn parse_menu(line: &str) -> Result<MenuCommand, InputError> {
    let cmd = line.trim().to_lowercase();
    match cmd.as_str() {
        "" => Err(InputError::Empty),
        "1" | "new" => Ok(MenuCommand::NewGame),
        "2" | "resume" => Ok(MenuCommand::Resume),
        "3" | "rules" => Ok(MenuCommand::Rules),
        "4" | "history" => Ok(MenuCommand::History),
        "5" | "stats" => Ok(MenuCommand::Stats),
        "6" | "clear" => Ok(MenuCommand::ClearHistory),
        "0" | "exit" | "quit" => Ok(MenuCommand::Exit),
        _ => Err(InputError::Unknown(cmd)),
    }
}

pub fn parse_game(line: &str) -> Result<GameCommand, InputError> {
    let cmd = line.trim().to_lowercase();
    match cmd.as_str() {
        "" => Err(InputError::Empty),
        "s" | "save" => Ok(GameCommand::Save),
        "m" | "menu" => Ok(GameCommand::Menu),
        "q" | "exit" | "quit" => Ok(GameCommand::Exit),
        _ => parse_coordinates(&cmd),
    }
}

/// `row col`, 1-based, separated by whitespace or a comma
fn parse_coordinates(cmd: &str) -> Result<GameCommand, InputError> {
    let parts: Vec<&str> = cmd
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();
    if parts.len() != 2 {
        return if parts.iter().all(|p| i64::from_str(p).is_err()) {
            Err(InputError::Unknown(cmd.to_string()))
        } else {
            Err(InputError::BadCoordinates)
        };
    }
    match (i64::from_str(parts[0]), i64::from_str(parts[1])) {
        (Ok(row), Ok(col)) => {
            let range = 1..=BOARD_SIZE as i64;
            if range.contains(&row) && range.contains(&col) {
                Ok(GameCommand::Move(row as usize - 1, col as usize - 1))
            } else {
                Err(InputError::OutOfRange)
            }
        }
        _ => Err(InputError::BadCoordinates),
    }
}

/// only an explicit yes confirms
pub fn parse_confirm(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
}

pub const MENU_HELP: &str = "commands:\n\
    - 1 | new      start a new game\n\
    - 2 | resume   resume the saved game\n\
    - 3 | rules    show the rules\n\
    - 4 | history  show finished games\n\
    - 5 | stats    show statistics\n\
    - 6 | clear    clear the history\n\
    - 0 | exit     leave";

pub const GAME_HELP: &str = "in game:\n\
    - 'row' 'col'  place a stone (1-15), e.g. `8 8`\n\
    - s | save     save and return to menu\n\
    - m | menu     return to menu without saving\n\
    - q | exit     leave";
