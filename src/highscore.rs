//! Persist the best score to disk (XDG config or ~/.config/blockfall).
//!
//! Loading is infallible: a missing, unreadable, or mangled file means a
//! best of zero and a playable game either way. Only saving reports errors,
//! and the shell treats even those as non-fatal.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const FILENAME: &str = "highscore.json";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct ScoreFile {
    high_score: u32,
}

/// File-backed store for the best score.
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Store backed by an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the conventional config location.
    pub fn open_default() -> Self {
        Self {
            path: default_path(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Best score on record; 0 when the file is missing or unreadable.
    pub fn load(&self) -> u32 {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return 0;
        };
        serde_json::from_str::<ScoreFile>(&content)
            .map(|file| file.high_score)
            .unwrap_or(0)
    }

    /// Write a new best score, creating the config directory if needed.
    pub fn save(&self, high_score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(&ScoreFile { high_score })?;
        fs::write(&self.path, content).with_context(|| format!("writing {}", self.path.display()))
    }
}

/// Config-dir path honoring `XDG_CONFIG_HOME`, falling back to
/// `~/.config`, then the current directory.
fn default_path() -> PathBuf {
    let base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => home_config(),
    };
    base.join("blockfall").join(FILENAME)
}

fn home_config() -> PathBuf {
    std::env::var("HOME")
        .map(|home| PathBuf::from(home).join(".config"))
        .unwrap_or_else(|_| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn scratch_file() -> PathBuf {
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "blockfall-scores-{}-{}.json",
            std::process::id(),
            n
        ))
    }

    #[test]
    fn test_missing_file_loads_as_zero() {
        let store = HighScoreStore::at(scratch_file());
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let path = scratch_file();
        let store = HighScoreStore::at(&path);
        store.save(4210).unwrap();
        assert_eq!(store.load(), 4210);

        // Overwrites, never appends.
        store.save(9000).unwrap();
        assert_eq!(store.load(), 9000);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_creates_missing_directories() {
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let dir = std::env::temp_dir().join(format!("blockfall-test-{}-{}", std::process::id(), n));
        let path = dir.join("nested").join("scores.json");

        let store = HighScoreStore::at(&path);
        store.save(77).unwrap();
        assert_eq!(store.load(), 77);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_garbage_content_loads_as_zero() {
        let path = scratch_file();
        fs::write(&path, "not json at all").unwrap();
        let store = HighScoreStore::at(&path);
        assert_eq!(store.load(), 0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_store_reports_its_path() {
        let path = scratch_file();
        let store = HighScoreStore::at(&path);
        assert_eq!(store.path(), path.as_path());
    }
}
