//! Saving and restoring games.
//!
//! A save holds every player's account, including the properties they own
//! and how improved each one is. The owner of each property is rebuilt from
//! those accounts when the save is loaded.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::SaveError;
use super::globals::Player;
use super::ledger::Ledger;
use super::track::Track;

/// Current save file format version
pub const SAVE_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Everything needed to pick a game back up.
pub struct Snapshot {
    /// Save format version
    pub version: u32,
    /// Every player in turn order, eliminated or not.
    pub players: Vec<Player>,
}

impl Snapshot {
    /// Take a snapshot of `ledger`.
    pub fn capture(ledger: &Ledger) -> Snapshot {
        Snapshot {
            version: SAVE_VERSION,
            players: ledger.accounts().to_vec(),
        }
    }

    /// Rebuild the ledger this snapshot was taken of, checking it against `track`.
    pub fn restore(self, track: &Track) -> Result<Ledger, SaveError> {
        if self.version != SAVE_VERSION {
            return Err(SaveError::Corrupted(format!(
                "expected version {}, found {}",
                SAVE_VERSION, self.version
            )));
        }

        for player in &self.players {
            if let Some(unknown) = player.improvements.keys().find(|name| !track.contains(name)) {
                return Err(SaveError::Corrupted(format!(
                    "{} owns '{}', which isn't on the board",
                    player.name, unknown
                )));
            }
        }

        Ledger::from_accounts(self.players).map_err(|e| SaveError::Corrupted(e.to_string()))
    }
}

/// Write `snapshot` to `path` as JSON, replacing whatever was there.
pub fn save(path: &Path, snapshot: &Snapshot) -> Result<(), SaveError> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, snapshot)?;

    log::debug!("saved {} players to {}", snapshot.players.len(), path.display());
    Ok(())
}

/// Read a snapshot from `path`. Returns `Ok(None)` if there's no save there.
pub fn load(path: &Path) -> Result<Option<Snapshot>, SaveError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let snapshot = serde_json::from_reader(BufReader::new(file))?;
    Ok(Some(snapshot))
}
