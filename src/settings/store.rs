//! Settings persistence
//!
//! A narrow key-value interface over the durable local medium. Every key this
//! application writes carries the `insulin_` namespace prefix, and `clear()`
//! removes exactly those keys, leaving anything else in the medium untouched.
//! `load()` never fails: a missing or corrupt settings document reads as
//! "no settings" and the caller falls back to defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::storage;
use crate::error::Result;
use crate::settings::Settings;

/// The durable local key-value medium the store writes through.
///
/// `get`/`keys` are infallible reads against the in-memory view; `set` and
/// `remove` write through to the backing medium and may fail.
pub trait KvMedium {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
    fn keys(&self) -> Vec<String>;
}

/// File-backed medium: a flat string map persisted as one JSON document.
pub struct FileMedium {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileMedium {
    /// Open the medium at `path`. A missing or unreadable file, or one whose
    /// contents fail to parse, yields an empty medium rather than an error.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default();
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KvMedium for FileMedium {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

/// In-memory medium, for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryMedium {
    entries: BTreeMap<String, String>,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvMedium for MemoryMedium {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}

/// Namespaced settings store over any [`KvMedium`].
pub struct SettingsStore<M: KvMedium> {
    medium: M,
}

impl<M: KvMedium> SettingsStore<M> {
    pub fn new(medium: M) -> Self {
        Self { medium }
    }

    fn namespaced(key: &str) -> String {
        format!("{}{}", storage::KEY_PREFIX, key)
    }

    /// Load the persisted settings. Never fails: a missing or corrupt
    /// document is `None` and the caller uses defaults.
    pub fn load(&self) -> Option<Settings> {
        self.medium
            .get(&Self::namespaced(storage::SETTINGS_KEY))
            .and_then(|json| serde_json::from_str(&json).ok())
    }

    /// Persist the whole settings object as a single write.
    pub fn save(&mut self, settings: &Settings) -> Result<()> {
        let json = serde_json::to_string(settings)?;
        self.medium
            .set(&Self::namespaced(storage::SETTINGS_KEY), &json)
    }

    /// Remove every key under this application's namespace. Unconditional;
    /// any confirmation dialog belongs to the caller.
    pub fn clear(&mut self) -> Result<()> {
        for key in self.medium.keys() {
            if key.starts_with(storage::KEY_PREFIX) {
                self.medium.remove(&key)?;
            }
        }
        Ok(())
    }

    /// Read an auxiliary namespaced value (e.g. the UI language).
    pub fn load_str(&self, key: &str) -> Option<String> {
        self.medium.get(&Self::namespaced(key))
    }

    /// Write an auxiliary namespaced value.
    pub fn save_str(&mut self, key: &str, value: &str) -> Result<()> {
        self.medium.set(&Self::namespaced(key), value)
    }
}

/// Where the settings file lives: `$DOSE_OXIDE_DIR`, else `$HOME/.dose-oxide`,
/// else the current directory.
pub fn default_settings_path() -> PathBuf {
    let dir = std::env::var_os(storage::DIR_ENV)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(storage::APP_DIR)))
        .unwrap_or_else(|| PathBuf::from("."));
    dir.join(storage::SETTINGS_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dose::Period;
    use crate::settings::CorrectionSchedule;
    use std::io::Write;

    fn sample_settings() -> Settings {
        Settings {
            carb_ratio: Some(15.0),
            target_glucose: Some(100.0),
            schedule: CorrectionSchedule::Flat { factor: Some(50.0) },
            period: Period::Morning,
        }
    }

    #[test]
    fn test_save_load_round_trip() {
        let mut store = SettingsStore::new(MemoryMedium::new());
        assert_eq!(store.load(), None);

        let settings = sample_settings();
        store.save(&settings).unwrap();
        assert_eq!(store.load(), Some(settings));
    }

    #[test]
    fn test_clear_removes_only_namespaced_keys() {
        let mut medium = MemoryMedium::new();
        medium.set("unrelated_app_data", "keep me").unwrap();

        let mut store = SettingsStore::new(medium);
        store.save(&sample_settings()).unwrap();
        store.save_str(storage::LANG_KEY, "en").unwrap();

        store.clear().unwrap();
        assert_eq!(store.load(), None);
        assert_eq!(store.load_str(storage::LANG_KEY), None);

        // The foreign key survived the clear.
        assert_eq!(
            store.medium.get("unrelated_app_data").as_deref(),
            Some("keep me")
        );
    }

    #[test]
    fn test_file_medium_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut store = SettingsStore::new(FileMedium::open(&path));
        store.save(&sample_settings()).unwrap();

        // Re-open from disk: the write is durable.
        let reopened = SettingsStore::new(FileMedium::open(&path));
        assert_eq!(reopened.load(), Some(sample_settings()));
    }

    #[test]
    fn test_missing_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(FileMedium::open(dir.path().join("nonexistent.json")));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_corrupt_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "{{ not json at all").unwrap();

        let store = SettingsStore::new(FileMedium::open(&path));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_corrupt_settings_value_loads_as_empty() {
        // The medium itself is readable but the settings document is not.
        let mut medium = MemoryMedium::new();
        medium.set("insulin_settings", "not json").unwrap();
        let store = SettingsStore::new(medium);
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_save_overwrites_previous_settings() {
        let mut store = SettingsStore::new(MemoryMedium::new());
        store.save(&sample_settings()).unwrap();

        let mut updated = sample_settings();
        updated.carb_ratio = Some(8.0);
        updated.period = Period::Evening;
        store.save(&updated).unwrap();

        assert_eq!(store.load(), Some(updated));
    }
}
