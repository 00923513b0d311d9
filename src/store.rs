use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Level;

const APP_DIR_NAME: &str = "snk";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Errors from loading or saving the settings file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("settings io error: {0}")]
    Io(#[from] io::Error),
    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Persisted scalar settings: per-level high scores, the big-board
/// toggle, and the selected theme name.
///
/// Missing fields take their defaults so files written by older versions
/// keep loading.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub hi_score_slow: u32,
    #[serde(default)]
    pub hi_score_medium: u32,
    #[serde(default)]
    pub hi_score_fast: u32,
    #[serde(default)]
    pub big_board: bool,
    #[serde(default)]
    pub theme: String,
}

impl Settings {
    #[must_use]
    pub fn high_score(&self, level: Level) -> u32 {
        match level {
            Level::Slow => self.hi_score_slow,
            Level::Medium => self.hi_score_medium,
            Level::Fast => self.hi_score_fast,
        }
    }

    pub fn set_high_score(&mut self, level: Level, score: u32) {
        match level {
            Level::Slow => self.hi_score_slow = score,
            Level::Medium => self.hi_score_medium = score,
            Level::Fast => self.hi_score_fast = score,
        }
    }
}

/// Settings store bound to one on-disk JSON file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    pub settings: Settings,
}

impl SettingsStore {
    /// Loads settings from the platform-local data directory.
    ///
    /// A missing file yields defaults (first run). A present but
    /// unreadable or malformed file is an error, surfaced before the
    /// terminal enters raw mode.
    pub fn load() -> Result<Self, StoreError> {
        Self::load_from_path(default_path())
    }

    /// Creates a store with default settings bound to `path`, ignoring
    /// whatever is on disk. Used when a corrupt file should not stop
    /// the game from running.
    #[must_use]
    pub fn with_defaults(path: PathBuf) -> Self {
        Self {
            path,
            settings: Settings::default(),
        }
    }

    /// Loads settings from an explicit path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, StoreError> {
        let settings = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Settings::default(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self { path, settings })
    }

    /// Writes the settings back to disk, creating parent directories
    /// when needed.
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.settings)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Records `score` as the high score for `level` if it beats the
    /// stored one, persisting immediately. Returns true on a new high.
    pub fn record_high_score(&mut self, level: Level, score: u32) -> Result<bool, StoreError> {
        if score <= self.settings.high_score(level) {
            return Ok(false);
        }

        self.settings.set_high_score(level, score);
        self.save()?;
        Ok(true)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn default_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use crate::config::Level;

    use super::SettingsStore;

    #[test]
    fn settings_round_trip() {
        let path = unique_test_path("round_trip");

        let mut store =
            SettingsStore::load_from_path(path.clone()).expect("missing file loads defaults");
        store.settings.set_high_score(Level::Medium, 440);
        store.settings.big_board = true;
        store.settings.theme = "Grayscale".to_owned();
        store.save().expect("save should succeed");

        let reloaded = SettingsStore::load_from_path(path.clone()).expect("load should succeed");
        assert_eq!(reloaded.settings, store.settings);

        cleanup_test_path(&path);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = unique_test_path("missing");
        let store = SettingsStore::load_from_path(path).expect("missing file should be ok");

        assert_eq!(store.settings.high_score(Level::Slow), 0);
        assert!(!store.settings.big_board);
        assert!(store.settings.theme.is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        assert!(SettingsStore::load_from_path(path.clone()).is_err());
        cleanup_test_path(&path);
    }

    #[test]
    fn record_high_score_only_on_improvement() {
        let path = unique_test_path("record");
        let mut store = SettingsStore::load_from_path(path.clone()).expect("load defaults");

        assert!(store
            .record_high_score(Level::Fast, 120)
            .expect("save should succeed"));
        assert!(!store
            .record_high_score(Level::Fast, 120)
            .expect("save should succeed"));
        assert!(!store
            .record_high_score(Level::Fast, 90)
            .expect("save should succeed"));
        assert_eq!(store.settings.high_score(Level::Fast), 120);
        // Other levels are untouched.
        assert_eq!(store.settings.high_score(Level::Slow), 0);

        cleanup_test_path(&path);
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("snk-store-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
