use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const APP_DIR_NAME: &str = "grid-snake";
const SCORE_FILE_NAME: &str = "high_score.json";

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct HighScoreFile {
    best: u32,
}

/// Returns the platform-correct high score file path.
#[must_use]
pub fn high_score_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

/// Loads the recorded high score.
///
/// Returns `Ok(0)` when no score has been recorded yet (first run).
/// Returns `Err` when the file exists but cannot be read or parsed, so
/// the caller can surface a warning before entering raw terminal mode.
pub fn load_high_score() -> io::Result<u32> {
    load_from_path(&high_score_path())
}

/// Writes `score` to disk when it beats the stored record.
///
/// Returns true when a new record was written.
pub fn record_if_best(score: u32) -> io::Result<bool> {
    record_if_best_at_path(&high_score_path(), score)
}

fn load_from_path(path: &Path) -> io::Result<u32> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(error) => return Err(error),
    };

    serde_json::from_str::<HighScoreFile>(&raw)
        .map(|file| file.best)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))
}

fn record_if_best_at_path(path: &Path, score: u32) -> io::Result<bool> {
    // A corrupt record loses to any new score rather than blocking the save.
    let best = load_from_path(path).unwrap_or(0);
    if score <= best {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = HighScoreFile { best: score };
    let json = serde_json::to_string_pretty(&payload)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;

    fs::write(path, json)?;
    Ok(true)
}
