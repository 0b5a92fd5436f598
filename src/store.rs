//! Save-game and high-score persistence.
//!
//! The save record is `{level, score, lives}` as JSON; the high score is a
//! bare integer in its own file.  Every function takes an explicit path so
//! tests can point them at a temp directory; the `*_path()` helpers give the
//! defaults under the user's home directory.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The persisted slice of a running game.  Round-trips exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveData {
    pub level: u32,
    pub score: u32,
    pub lives: u32,
}

/// Why a load did not produce a `SaveData`.  A missing file and a corrupt
/// one are different situations and are reported as such; neither is fatal.
#[derive(Debug)]
pub enum LoadError {
    NotFound,
    Corrupt(serde_json::Error),
    Io(io::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound => write!(f, "save file not found"),
            LoadError::Corrupt(e) => write!(f, "save data corrupt: {}", e),
            LoadError::Io(e) => write!(f, "could not read save file: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::NotFound => None,
            LoadError::Corrupt(e) => Some(e),
            LoadError::Io(e) => Some(e),
        }
    }
}

// ── Save record ──────────────────────────────────────────────────────────────

pub fn save_game(path: &Path, data: &SaveData) -> io::Result<()> {
    let json = serde_json::to_string(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    log::info!("game saved to {}", path.display());
    Ok(())
}

pub fn load_game(path: &Path) -> Result<SaveData, LoadError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(LoadError::NotFound),
        Err(e) => return Err(LoadError::Io(e)),
    };
    match serde_json::from_str(&raw) {
        Ok(data) => {
            log::info!("game loaded from {}", path.display());
            Ok(data)
        }
        Err(e) => {
            log::warn!("save file {} is corrupt: {}", path.display(), e);
            Err(LoadError::Corrupt(e))
        }
    }
}

// ── High score ───────────────────────────────────────────────────────────────

/// 0 when the file is absent or unreadable; a fresh install has no record.
pub fn load_high_score(path: &Path) -> u32 {
    fs::read_to_string(path)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}

pub fn save_high_score(path: &Path, score: u32) {
    if let Err(e) = fs::write(path, score.to_string()) {
        log::warn!("could not persist high score: {}", e);
    }
}

// ── Default locations ────────────────────────────────────────────────────────

fn home_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home)
}

pub fn save_path() -> PathBuf {
    home_dir().join(".alien_siege_save.json")
}

pub fn high_score_path() -> PathBuf {
    home_dir().join(".alien_siege_score")
}
