use gomoku::cli::say_goodbye;
use gomoku::config::{Config, Invocation, DB_ENV_VAR, USAGE};
use gomoku::{GameStore, Shell};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::io::{stdin, stdout};

fn main() {
    let config = match Config::from_args(env::args().skip(1), env::var(DB_ENV_VAR).ok()) {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Help) => {
            let _ = say_goodbye(&mut stdout(), Some(USAGE));
            return;
        }
        Err(e) => {
            let _ = say_goodbye(&mut stdout(), Some(&e.to_string()));
            return;
        }
    };
    env_logger::builder()
        .filter_module("gomoku", config.log_filter)
        .parse_default_env()
        .init();
    let store = match GameStore::open(&config.db_path) {
        Ok(store) => store,
        Err(e) => {
            error!("failed to open game db: {}", e);
            let notice = format!("cannot open the game data at {}", config.db_path.display());
            let _ = say_goodbye(&mut stdout(), Some(&notice));
            return;
        }
    };
    info!("game db opened at {}", config.db_path.display());
    let stdin = stdin();
    let mut shell = Shell::new(stdin.lock(), stdout(), &store, StdRng::from_entropy());
    if let Err(e) = shell.run() {
        error!("shell stopped on error {}", e);
        let _ = say_goodbye(&mut stdout(), None);
    }
}
