use anyhow::{Error, Result};
use log::LevelFilter;
use std::path::PathBuf;

pub const DB_ENV_VAR: &str = "GOMOKU_DB";
pub const DEFAULT_DB_PATH: &str = "./gomoku_db";

pub const USAGE: &str = "usage: ./gomoku [-v] {db path}\n\
    the db path falls back to $GOMOKU_DB, then ./gomoku_db\n\
    -v logs game events to stderr (RUST_LOG overrides)";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    /// level of this crate's own log records
    pub log_filter: LevelFilter,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    Run(Config),
    Help,
}

impl Config {
    /// `args` without the program name, `env_db` the value of `GOMOKU_DB`
    pub fn from_args<I: IntoIterator<Item = String>>(
        args: I,
        env_db: Option<String>,
    ) -> Result<Invocation> {
        let mut db_path = None;
        let mut log_filter = LevelFilter::Warn;
        for arg in args {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Invocation::Help),
                "-v" | "--verbose" => log_filter = LevelFilter::Info,
                flag if flag.starts_with('-') => {
                    return Err(Error::msg(format!("unknown option {}\n{}", flag, USAGE)))
                }
                _ if db_path.is_some() => {
                    return Err(Error::msg(format!("too many arguments\n{}", USAGE)))
                }
                path => db_path = Some(PathBuf::from(path)),
            }
        }
        let db_path = db_path
            .or_else(|| env_db.filter(|p| !p.trim().is_empty()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));
        Ok(Invocation::Run(Config {
            db_path,
            log_filter,
        }))
    }
}
