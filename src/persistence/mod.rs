//! Score persistence
//!
//! Features:
//! - `ScoreStore` contract: load and save the whole roster at once
//! - Flat comma-separated score file (`score_file`)
//! - In-memory store for tests and headless runs
//! - Degradation to an empty roster on any load problem

pub mod score_file;

pub use score_file::FileScoreStore;

use std::path::PathBuf;

use thiserror::Error;

use crate::highscores::{PlayerProfile, Roster};

/// Why a score store could not be read or written
#[derive(Debug, Error)]
pub enum ScoreStoreError {
    #[error("score file {0} does not exist")]
    Missing(PathBuf),
    #[error("malformed score line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("score file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Whole-roster storage
pub trait ScoreStore {
    fn load(&self) -> Result<Vec<PlayerProfile>, ScoreStoreError>;
    fn save(&mut self, players: &[PlayerProfile]) -> Result<(), ScoreStoreError>;
}

/// Volatile store
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    players: Vec<PlayerProfile>,
    saves: usize,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_players(players: Vec<PlayerProfile>) -> Self {
        Self { players, saves: 0 }
    }

    pub fn players(&self) -> &[PlayerProfile] {
        &self.players
    }

    /// Number of successful saves
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> Result<Vec<PlayerProfile>, ScoreStoreError> {
        Ok(self.players.clone())
    }

    fn save(&mut self, players: &[PlayerProfile]) -> Result<(), ScoreStoreError> {
        self.players = players.to_vec();
        self.saves += 1;
        Ok(())
    }
}

/// Load the roster, falling back to an empty one on any failure
///
/// A missing store is immediately re-created empty.
pub fn load_roster<S: ScoreStore + ?Sized>(store: &mut S) -> Roster {
    match store.load() {
        Ok(players) => {
            log::info!("Loaded {} players", players.len());
            Roster::from_profiles(players)
        }
        Err(ScoreStoreError::Missing(path)) => {
            log::warn!("No score file at {}, starting fresh", path.display());
            if let Err(e) = store.save(&[]) {
                log::warn!("Could not create empty score file: {}", e);
            }
            Roster::new()
        }
        Err(e) => {
            log::warn!("Discarding unreadable scores: {}", e);
            Roster::new()
        }
    }
}

/// Write the roster back; failures are logged and otherwise ignored
pub fn save_roster<S: ScoreStore + ?Sized>(store: &mut S, roster: &Roster) -> bool {
    match store.save(roster.profiles()) {
        Ok(()) => {
            log::info!("Saved {} players", roster.len());
            true
        }
        Err(e) => {
            log::warn!("Could not save scores: {}", e);
            false
        }
    }
}
