mod commands;
mod render;
mod shell;

pub use commands::{
    parse_confirm, parse_game, parse_menu, GameCommand, InputError, MenuCommand, GAME_HELP,
    MENU_HELP,
};
pub use render::{render_board, render_history, render_stats};
pub use shell::{say_goodbye, Shell, FAREWELL};
