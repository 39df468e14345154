//! Best-score persistence
//!
//! Loading never fails: a missing or unreadable record is a fresh start.
//! Saving is a single synchronous attempt whose error the caller logs.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::highscores::BestScore;

/// Failure to write the best score
#[derive(Debug)]
pub enum PersistError {
    Io(std::io::Error),
    Encode(serde_json::Error),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "best score write failed: {e}"),
            Self::Encode(e) => write!(f, "best score encode failed: {e}"),
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Encode(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for PersistError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(e: serde_json::Error) -> Self {
        Self::Encode(e)
    }
}

/// Where the best score lives between sessions
pub trait ScoreStore {
    fn load(&self) -> BestScore;
    fn save(&mut self, record: &BestScore) -> Result<(), PersistError>;
}

/// JSON file on disk, overwritten on every save
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> BestScore {
        match fs::read_to_string(&self.path) {
            Ok(json) => {
                let record = BestScore::from_json(&json);
                log::info!("Loaded best score {} from {}", record.best_score, self.path.display());
                record
            }
            Err(_) => {
                log::info!("No best score at {}, starting fresh", self.path.display());
                BestScore::default()
            }
        }
    }

    fn save(&mut self, record: &BestScore) -> Result<(), PersistError> {
        let json = record.to_json()?;
        fs::write(&self.path, json)?;
        log::info!("Best score {} saved", record.best_score);
        Ok(())
    }
}

/// In-memory store, counting writes
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub record: Option<BestScore>,
    pub writes: u32,
    /// Simulate an unwritable backend
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn with_best(best_score: u64) -> Self {
        Self {
            record: Some(BestScore::new(best_score)),
            ..Default::default()
        }
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> BestScore {
        self.record.unwrap_or_default()
    }

    fn save(&mut self, record: &BestScore) -> Result<(), PersistError> {
        if self.fail_writes {
            return Err(PersistError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "store is read-only",
            )));
        }
        self.record = Some(*record);
        self.writes += 1;
        Ok(())
    }
}
