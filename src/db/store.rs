use log::{debug, warn};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::models::preferences::UserPreferences;

pub const PREFERENCES_KEY: &str = "userPreferences";
pub const LANGUAGE_KEY: &str = "language";

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Serialization(serde_json::Error),
    Poisoned,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "Storage IO error: {}", err),
            StoreError::Serialization(err) => write!(f, "Storage serialization error: {}", err),
            StoreError::Poisoned => write!(f, "Storage lock poisoned"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err)
    }
}

/// String key-value storage with the same shape as browser local storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A JSON object on disk, rewritten whole on every `set`.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            debug!("No storage file at {}, starting empty", path.display());
            HashMap::new()
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn flush(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().map_err(|_| StoreError::Poisoned)?;
        // memory only changes once the file has the new value
        let mut updated = entries.clone();
        updated.insert(key.to_string(), value.to_string());
        self.flush(&updated)?;
        *entries = updated;
        Ok(())
    }
}

/// Stored onboarding record, if any. A corrupt blob reads as absent.
pub fn load_preferences(store: &dyn KeyValueStore) -> Result<Option<UserPreferences>, StoreError> {
    match store.get(PREFERENCES_KEY)? {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(prefs) => Ok(Some(prefs)),
            Err(e) => {
                warn!("Ignoring unreadable {}: {}", PREFERENCES_KEY, e);
                Ok(None)
            }
        },
        None => Ok(None),
    }
}

pub fn save_preferences(
    store: &dyn KeyValueStore,
    preferences: &UserPreferences,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(preferences)?;
    store.set(PREFERENCES_KEY, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::preferences::{Accessibility, Dietary, Transport, UserType};

    fn sample_preferences() -> UserPreferences {
        UserPreferences {
            name: "Ann".to_string(),
            user_type: UserType::Tourist,
            dietary: Dietary::Halal,
            transport: Transport::Taxi,
            accessibility: Accessibility::NoPreference,
        }
    }

    #[test]
    fn test_memory_store_get_set() {
        let store = MemoryStore::new();
        assert_eq!(store.get(LANGUAGE_KEY).unwrap(), None);
        store.set(LANGUAGE_KEY, "my").unwrap();
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("my"));
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("local_storage.json");

        {
            let store = FileStore::open(&path).unwrap();
            store.set(LANGUAGE_KEY, "en").unwrap();
            save_preferences(&store, &sample_preferences()).unwrap();
        }

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(LANGUAGE_KEY).unwrap().as_deref(), Some("en"));
        assert_eq!(
            load_preferences(&reopened).unwrap(),
            Some(sample_preferences())
        );
    }

    #[test]
    fn test_failed_write_leaves_store_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local_storage.json");
        let store = FileStore::open(&path).unwrap();
        store.set(LANGUAGE_KEY, "en").unwrap();

        // a directory in place of the file makes the rename fail
        fs::remove_file(&path).unwrap();
        fs::create_dir(&path).unwrap();

        assert!(store.set(LANGUAGE_KEY, "my").is_err());
        assert_eq!(store.get(LANGUAGE_KEY).unwrap().as_deref(), Some("en"));
        assert!(store.set(PREFERENCES_KEY, "{}").is_err());
        assert_eq!(store.get(PREFERENCES_KEY).unwrap(), None);
    }

    #[test]
    fn test_corrupt_preferences_read_as_absent() {
        let store = MemoryStore::new();
        store.set(PREFERENCES_KEY, "{not json").unwrap();
        assert_eq!(load_preferences(&store).unwrap(), None);
    }
}
