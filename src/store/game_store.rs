use crate::store::records::{GameResult, GameSnapshot};
use anyhow::{Error, Result};
use bincode::config::Configuration;
use bincode::{config, decode_from_slice, encode_to_vec};
use crc32fast::hash as checksum;
use log::{error, info, trace, warn};
use sled::{Db, Tree};
#[cfg(test)]
use std::cell::Cell;
use std::fmt::{Display, Formatter};
use std::path::Path;

const DB_BIN_CONFIG: Configuration = config::standard();
const GAME_TREE: &[u8] = b"gomoku";
const SAVE_SLOT: &[u8] = b"save_slot";
const HISTORY: &[u8] = b"history";
const CHECKSUM_BYTES: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadSnapshotFailure {
    /// no saved game, the usual case
    NotFound,
    /// checksum mismatch or undecodable record
    DataCorrupted,
    StoreError,
}

impl Display for LoadSnapshotFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadSnapshotFailure::NotFound => write!(f, "no saved game"),
            LoadSnapshotFailure::DataCorrupted => write!(f, "saved game is corrupted"),
            LoadSnapshotFailure::StoreError => write!(f, "failed to read saved game"),
        }
    }
}

impl std::error::Error for LoadSnapshotFailure {}

/// Durable save slot (at most one snapshot) and history log.
///
/// Both live under fixed keys of one sled tree. The history is
/// rewritten as a whole on every change.
pub struct GameStore {
    db: Db,
    games: Tree,
    #[cfg(test)]
    failing_writes: Cell<bool>,
}

impl GameStore {
    pub fn open(path: &Path) -> Result<Self> {
        let db = sled::open(path)
            .map_err(|e| Error::msg(format!("bad game db path {}: {}", path.display(), e)))?;
        Self::init(db)
    }

    /// a store deleted when dropped
    pub fn temporary() -> Result<Self> {
        let db = sled::Config::new()
            .temporary(true)
            .open()
            .map_err(|_| Error::msg("failed to open temporary game db".to_string()))?;
        Self::init(db)
    }

    fn init(db: Db) -> Result<Self> {
        let games = db
            .open_tree(GAME_TREE)
            .map_err(|_| Error::msg("failed to open tree (games)".to_string()))?;
        Ok(Self {
            db,
            games,
            #[cfg(test)]
            failing_writes: Cell::new(false),
        })
    }

    /// overwrite the save slot
    pub fn save_snapshot(&self, snapshot: &GameSnapshot) -> Result<()> {
        self.writable()?;
        let payload = encode_to_vec(snapshot.clone(), DB_BIN_CONFIG).map_err(|e| {
            error!("snapshot encode error: {}", e);
            Error::msg("snapshot encode error")
        })?;
        let mut record = Vec::with_capacity(CHECKSUM_BYTES + payload.len());
        record.extend_from_slice(&checksum(&payload).to_le_bytes());
        record.extend_from_slice(&payload);
        if let Err(e) = self.games.insert(SAVE_SLOT, record) {
            error!("save slot insertion error: {}", e);
            return Err(e.into());
        }
        self.games.flush()?;
        info!(
            "game saved after {} moves ({} to move)",
            snapshot.move_count, snapshot.current_player
        );
        Ok(())
    }

    pub fn load_snapshot(&self) -> Result<GameSnapshot, LoadSnapshotFailure> {
        match self.games.get(SAVE_SLOT) {
            Ok(Some(data)) => decode_snapshot(data.as_ref()),
            Ok(None) => Err(LoadSnapshotFailure::NotFound),
            Err(e) => {
                error!("save slot query error: {}", e);
                Err(LoadSnapshotFailure::StoreError)
            }
        }
    }

    /// removing an empty save slot is not an error
    pub fn delete_snapshot(&self) -> Result<()> {
        if self.games.remove(SAVE_SLOT)?.is_some() {
            trace!("save slot cleared");
            self.games.flush()?;
        }
        Ok(())
    }

    pub fn has_snapshot(&self) -> bool {
        match self.games.contains_key(SAVE_SLOT) {
            Ok(exists) => exists,
            Err(e) => {
                error!("save slot query error: {}", e);
                false
            }
        }
    }

    /// all finished games, oldest first.
    ///
    /// a missing or unreadable history is an empty one.
    pub fn load_history(&self) -> Vec<GameResult> {
        match self.games.get(HISTORY) {
            Ok(Some(data)) => match decode_from_slice(data.as_ref(), DB_BIN_CONFIG) {
                Ok((history, _)) => history,
                Err(e) => {
                    warn!("history decode error, treated as empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("history query error, treated as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// append one result, returns the new number of recorded games
    pub fn append_result(&self, result: &GameResult) -> Result<usize> {
        let mut history = self.load_history();
        history.push(result.clone());
        let count = history.len();
        self.write_history(history)?;
        info!("game result recorded, {} games in history", count);
        Ok(count)
    }

    /// record a finished game and drop the save slot.
    ///
    /// the save slot is cleared even when recording fails.
    pub fn finish_game(&self, result: &GameResult) -> Result<usize> {
        let recorded = self.append_result(result);
        if let Err(e) = self.delete_snapshot() {
            error!("failed to clear save slot of finished game: {}", e);
            recorded?;
            return Err(e);
        }
        recorded
    }

    pub fn clear_history(&self) -> Result<()> {
        self.write_history(Vec::new())?;
        info!("history cleared");
        Ok(())
    }

    fn write_history(&self, history: Vec<GameResult>) -> Result<()> {
        self.writable()?;
        let bytes = encode_to_vec(history, DB_BIN_CONFIG).map_err(|e| {
            error!("history encode error: {}", e);
            Error::msg("history encode error")
        })?;
        if let Err(e) = self.games.insert(HISTORY, bytes) {
            error!("history insertion error: {}", e);
            return Err(e.into());
        }
        self.games.flush()?;
        Ok(())
    }

    #[cfg(not(test))]
    #[inline(always)]
    fn writable(&self) -> Result<()> {
        Ok(())
    }

    #[cfg(test)]
    fn writable(&self) -> Result<()> {
        if self.failing_writes.get() {
            Err(Error::msg("game db is not writable"))
        } else {
            Ok(())
        }
    }

    /// make snapshot and history writes fail, deletes still succeed
    #[cfg(test)]
    pub(crate) fn fail_writes(&self, fail: bool) {
        self.failing_writes.set(fail);
    }

    #[cfg(test)]
    fn raw_insert(&self, key: &[u8], value: &[u8]) {
        self.games.insert(key, value).unwrap();
    }
}

fn decode_snapshot(data: &[u8]) -> Result<GameSnapshot, LoadSnapshotFailure> {
    if data.len() < CHECKSUM_BYTES {
        error!("save slot too short ({} bytes)", data.len());
        return Err(LoadSnapshotFailure::DataCorrupted);
    }
    let (sum, payload) = data.split_at(CHECKSUM_BYTES);
    let mut sum_bytes = [0u8; CHECKSUM_BYTES];
    sum_bytes.copy_from_slice(sum);
    if u32::from_le_bytes(sum_bytes) != checksum(payload) {
        error!("save slot checksum mismatch");
        return Err(LoadSnapshotFailure::DataCorrupted);
    }
    match decode_from_slice(payload, DB_BIN_CONFIG) {
        Ok((snapshot, _)) => Ok(snapshot),
        Err(e) => {
            error!("save slot decode error: {}", e);
            Err(LoadSnapshotFailure::DataCorrupted)
        }
    }
}

impl Drop for GameStore {
    fn drop(&mut self) {
        let _ = self.db.flush();
    }
}
